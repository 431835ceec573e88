// Rust guideline compliant 2026-10-16

//! Concrete actions: external commands, Git staging and closures.

use crate::{Action, Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Runs an external program from the repository root.
///
/// Standard streams are inherited so the program's own output reaches the
/// user. A non-zero exit status, or termination by a signal, is a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandAction {
    program: String,
    args: Vec<String>,
}

impl CommandAction {
    /// Creates a command action from an argument vector.
    ///
    /// # Arguments
    ///
    /// * `argv` - Program followed by its arguments
    ///
    /// # Errors
    ///
    /// Returns an error if `argv` is empty.
    pub fn new(argv: &[String]) -> Result<Self> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| Error::Config("command must not be empty".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    /// Returns the full command line joined with spaces.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Action for CommandAction {
    fn run(&self, root: &Path) -> Result<Option<String>> {
        debug!(command = %self.command_line(), root = %root.display(), "spawning command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .status()
            .map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to run `{}`: {}", self.program, e),
                ))
            })?;
        debug!(command = %self.command_line(), ?status, "command finished");

        if status.success() {
            Ok(None)
        } else {
            Err(Error::CommandFailed {
                program: self.command_line(),
                status: describe_status(status),
            })
        }
    }

    fn describe(&self) -> String {
        format!("command `{}`", self.command_line())
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "termination by signal".to_string(),
    }
}

/// Adds a repository-relative file to the Git index.
///
/// Staging goes through `git add` so the index named by `GIT_INDEX_FILE`
/// is the one updated. Git sets that variable for hooks, and while a
/// `git commit -a` or `git commit <paths>` is in progress the default index
/// is locked by Git itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFile {
    path: PathBuf,
}

impl StageFile {
    /// Creates a staging action for `path`, relative to the work-tree root.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn git_add(&self) -> CommandAction {
        CommandAction {
            program: "git".to_string(),
            args: vec![
                "add".to_string(),
                "--".to_string(),
                self.path.to_string_lossy().into_owned(),
            ],
        }
    }
}

impl Action for StageFile {
    fn run(&self, root: &Path) -> Result<Option<String>> {
        if let Some(index_file) = std::env::var_os("GIT_INDEX_FILE") {
            debug!(index_file = ?index_file, "staging into hook index");
        }
        self.git_add().run(root)?;
        debug!(path = %self.path.display(), "staged file");
        Ok(Some(format!("Staged {}", self.path.display())))
    }

    fn describe(&self) -> String {
        format!("stage `{}`", self.path.display())
    }
}

/// Adapts a closure into an [`Action`].
pub struct FnAction<F>(pub F);

impl<F> Action for FnAction<F>
where
    F: Fn(&Path) -> Result<Option<String>>,
{
    fn run(&self, root: &Path) -> Result<Option<String>> {
        (self.0)(root)
    }
}
