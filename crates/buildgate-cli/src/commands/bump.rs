// Rust guideline compliant 2026-10-16

//! Implementation of the `bgate bump` command.

use crate::TerminalReporter;
use anyhow::Result;
use std::path::Path;

/// Increments the build number without running tests or staging.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the increment fails.
pub fn execute(root: &Path, use_color: bool) -> Result<()> {
    let mut reporter = TerminalReporter::new(use_color);
    buildgate_hooks::bump_hook(root, &mut reporter)
}
