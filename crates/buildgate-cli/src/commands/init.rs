// Rust guideline compliant 2026-10-16

//! Implementation of the `bgate init` command.
//!
//! Writes a default `buildgate.toml` and installs the Git pre-commit hook.

use anyhow::Result;
use buildgate_core::{Config, CONFIG_FILE};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the installed pre-commit hook.
///
/// The hook locates the work tree through Git itself rather than a fixed path.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# Installed by bgate init.\n\
exec bgate pre-commit --root \"$(git rev-parse --show-toplevel)\"\n";

/// Initializes Buildgate in a repository.
///
/// # Arguments
///
/// * `root` - Repository work-tree root
/// * `force` - Overwrite an existing pre-commit hook
///
/// # Returns
///
/// The path of the installed hook.
///
/// # Errors
///
/// Returns an error if:
/// - `root` is not a Git work tree
/// - A pre-commit hook exists and `force` is not set
/// - The configuration or hook cannot be written
pub fn execute(root: &Path, force: bool) -> Result<PathBuf> {
    let repo = Repository::open(root)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;

    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(root)?;
        println!("✓ Created {}", CONFIG_FILE);
    }

    let hooks_dir = repo.path().join("hooks");
    fs::create_dir_all(&hooks_dir)?;
    let hook_path = hooks_dir.join("pre-commit");
    if hook_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Re-run with --force to replace it.",
            hook_path.display()
        );
    }
    install_hook(&hook_path)?;
    println!("✓ Installed {}", hook_path.display());

    Ok(hook_path)
}

fn install_hook(path: &Path) -> Result<()> {
    fs::write(path, HOOK_SCRIPT)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
