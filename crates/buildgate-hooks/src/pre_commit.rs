// Rust guideline compliant 2026-10-16

//! Pre-commit hook implementation.
//!
//! Runs the unit tests, increments the build number and stages the version
//! file, stopping at the first failure.

use anyhow::Result;
use buildgate_core::{
    CommandAction, Config, Gate, IncrementBuild, Reporter, StageFile, Step, StepKind,
};
use std::path::Path;
use tracing::debug;

/// Builds the unit-test step.
///
/// # Errors
///
/// Returns an error if the configured test command is empty.
pub fn unit_test_step(config: &Config) -> buildgate_core::Result<Step> {
    Ok(Step::new(
        "unit tests",
        StepKind::UnitTests,
        CommandAction::new(&config.test_command)?,
        "Unit tests FAILED.",
    ))
}

/// Builds the build-increment step.
///
/// Uses the configured bump command, or the built-in incrementer when none is
/// set.
///
/// # Errors
///
/// Returns an error if the configured bump command is empty.
pub fn build_increment_step(config: &Config) -> buildgate_core::Result<Step> {
    let message = "Build increment FAILED.";
    let step = match &config.bump_command {
        Some(argv) => Step::new(
            "build increment",
            StepKind::BuildIncrement,
            CommandAction::new(argv)?,
            message,
        ),
        None => Step::new(
            "build increment",
            StepKind::BuildIncrement,
            IncrementBuild::new(&config.version_file, config.build_key.clone()),
            message,
        ),
    };
    Ok(step)
}

/// Builds the step staging the version file.
pub fn staging_step(config: &Config) -> Step {
    Step::new(
        "stage version file",
        StepKind::Staging,
        StageFile::new(&config.version_file),
        format!("Staging of {} FAILED.", config.version_file.display()),
    )
}

/// Builds the three pre-commit steps in execution order.
///
/// # Errors
///
/// Returns an error if a configured command is empty.
pub fn pre_commit_steps(config: &Config) -> buildgate_core::Result<Vec<Step>> {
    Ok(vec![
        unit_test_step(config)?,
        build_increment_step(config)?,
        staging_step(config),
    ])
}

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Work-tree root of the Git repository
/// * `reporter` - Receives progress output
///
/// # Returns
///
/// Ok if every step passed, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded
/// - The unit tests fail
/// - The build number cannot be incremented
/// - The version file cannot be staged
pub fn pre_commit_hook(repo_path: &Path, reporter: &mut dyn Reporter) -> Result<()> {
    let config = Config::load(repo_path)?;
    debug!(?config, root = %repo_path.display(), "running pre-commit gate");
    let gate = Gate::new(pre_commit_steps(&config)?);
    gate.run(repo_path, reporter)?;
    Ok(())
}

/// Runs only the build-increment step.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the increment
/// fails.
pub fn bump_hook(repo_path: &Path, reporter: &mut dyn Reporter) -> Result<()> {
    let config = Config::load(repo_path)?;
    let gate = Gate::new(vec![build_increment_step(&config)?]);
    gate.run(repo_path, reporter)?;
    Ok(())
}
