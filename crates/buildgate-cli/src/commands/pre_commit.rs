// Rust guideline compliant 2026-10-16

//! Implementation of the `bgate pre-commit` command.

use crate::TerminalReporter;
use anyhow::Result;
use std::path::Path;

/// Runs the full pre-commit gate.
///
/// # Arguments
///
/// * `root` - Repository work-tree root
/// * `use_color` - Whether progress output is coloured
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any step fails.
pub fn execute(root: &Path, use_color: bool) -> Result<()> {
    let mut reporter = TerminalReporter::new(use_color);
    buildgate_hooks::pre_commit_hook(root, &mut reporter)
}
