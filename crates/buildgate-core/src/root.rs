// Rust guideline compliant 2026-10-16

//! Repository root resolution.
//!
//! The gate never relies on a hardcoded location. The work tree is found by
//! Git discovery, starting from (in order):
//! 1. an explicit path,
//! 2. the `BUILDGATE_ROOT` environment variable,
//! 3. the current directory,
//! 4. the directory of the running executable.
//!
//! The current directory comes before the executable's own location: Git
//! runs hooks from the top of the work tree, while an installed `bgate` or
//! `buildgate-pre-commit` binary usually lives outside any repository. The
//! executable location is the fallback for repository-local builds invoked
//! from elsewhere.

use crate::{Error, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns the work-tree root of the repository containing `start`.
///
/// # Errors
///
/// Returns an error if `start` is not inside a Git repository or the
/// repository is bare.
pub fn discover_workdir(start: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(start)
        .map_err(|e| Error::RootNotFound(format!("{}: {}", start.display(), e.message())))?;
    repo.workdir().map(Path::to_path_buf).ok_or_else(|| {
        Error::RootNotFound(format!("{} is a bare repository", repo.path().display()))
    })
}

/// Resolves the repository root for a gate run.
///
/// # Arguments
///
/// * `explicit` - Path given on the command line, if any
///
/// # Errors
///
/// Returns an error if no candidate location lies inside a non-bare
/// repository. An explicit path or `BUILDGATE_ROOT` that cannot be resolved
/// is an error without falling back further.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return discover_workdir(path);
    }

    if let Some(path) = std::env::var_os("BUILDGATE_ROOT") {
        return discover_workdir(Path::new(&path));
    }

    let cwd = std::env::current_dir()?;
    match discover_workdir(&cwd) {
        Ok(root) => {
            debug!(root = %root.display(), "resolved root from current directory");
            return Ok(root);
        }
        Err(err) => debug!(error = %err, "current directory is not in a repository"),
    }

    let exe = std::env::current_exe()?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| Error::RootNotFound(format!("{} has no parent", exe.display())))?;
    let root = discover_workdir(exe_dir)?;
    debug!(root = %root.display(), "resolved root from executable location");
    Ok(root)
}
