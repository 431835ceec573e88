// Rust guideline compliant 2026-10-16

//! The fail-fast gate runner.
//!
//! Steps run strictly in order. The first failing step ends the run: later
//! steps are skipped, nothing is retried and earlier side effects are kept.

use crate::{Reporter, Result, Step};
use std::path::Path;
use tracing::{info, warn};

/// Exit code reported when every step succeeded.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code reported when any step failed or the gate could not start.
pub const EXIT_FAILURE: u8 = 1;

/// An ordered list of steps.
#[derive(Debug, Default)]
pub struct Gate {
    steps: Vec<Step>,
}

impl Gate {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step in declaration order.
    ///
    /// # Arguments
    ///
    /// * `root` - Repository work-tree root passed to each action
    /// * `reporter` - Receives progress events
    ///
    /// # Errors
    ///
    /// Returns the step-specific failure (`TestFailure`,
    /// `BuildIncrementFailure` or `StagingFailure`) of the first step whose
    /// action fails.
    pub fn run(&self, root: &Path, reporter: &mut dyn Reporter) -> Result<()> {
        let total = self.steps.len();
        for (idx, step) in self.steps.iter().enumerate() {
            info!(
                step = step.name(),
                position = idx + 1,
                total,
                action = %step.action().describe(),
                "running step"
            );
            reporter.step_started(step);

            match step.action().run(root) {
                Ok(summary) => reporter.step_passed(step, summary.as_deref()),
                Err(cause) => {
                    warn!(step = step.name(), error = %cause, "step failed");
                    reporter.step_failed(step, &cause);
                    return Err(step.kind().failure(step.on_failure_message(), &cause));
                }
            }
        }

        info!(total, "all steps passed");
        reporter.gate_passed();
        Ok(())
    }
}

/// Maps a gate result to the process exit code.
pub fn exit_code<T, E>(result: &std::result::Result<T, E>) -> u8 {
    if result.is_ok() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
