// Rust guideline compliant 2026-10-16

//! Steps executed by the gate.
//!
//! A [`Step`] pairs a human-readable name with an [`Action`] and the message
//! reported when that action fails. Steps are built fresh for every gate run.

use crate::{Error, Result};
use std::fmt;
use std::path::Path;

/// Something a step does against the repository root.
pub trait Action {
    /// Runs the action.
    ///
    /// # Arguments
    ///
    /// * `root` - Repository work-tree root
    ///
    /// # Returns
    ///
    /// An optional one-line summary of what was done.
    ///
    /// # Errors
    ///
    /// Returns an error if the action did not complete successfully.
    fn run(&self, root: &Path) -> Result<Option<String>>;

    /// Short description used in diagnostic logs.
    fn describe(&self) -> String {
        "in-process action".to_string()
    }
}

/// Which part of the pipeline a step belongs to.
///
/// Selects the error variant raised when the step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Running the unit-test suite.
    UnitTests,
    /// Incrementing the build number.
    BuildIncrement,
    /// Staging the version file.
    Staging,
}

impl StepKind {
    /// Wraps an action failure into the step-specific error.
    pub fn failure(self, message: &str, cause: &Error) -> Error {
        let message = message.to_string();
        let cause = cause.to_string();
        match self {
            StepKind::UnitTests => Error::TestFailure { message, cause },
            StepKind::BuildIncrement => Error::BuildIncrementFailure { message, cause },
            StepKind::Staging => Error::StagingFailure { message, cause },
        }
    }
}

/// A single named action in the gate.
pub struct Step {
    name: String,
    kind: StepKind,
    action: Box<dyn Action>,
    on_failure_message: String,
}

impl Step {
    /// Creates a new step.
    ///
    /// # Arguments
    ///
    /// * `name` - Label shown in progress output and logs
    /// * `kind` - Pipeline stage, used to classify failures
    /// * `action` - What the step does
    /// * `on_failure_message` - Text reported when the action fails
    pub fn new(
        name: impl Into<String>,
        kind: StepKind,
        action: impl Action + 'static,
        on_failure_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            action: Box::new(action),
            on_failure_message: on_failure_message.into(),
        }
    }

    /// Creates a step from a closure.
    pub fn from_fn<F>(
        name: impl Into<String>,
        kind: StepKind,
        f: F,
        on_failure_message: impl Into<String>,
    ) -> Self
    where
        F: Fn(&Path) -> Result<Option<String>> + 'static,
    {
        Self::new(name, kind, crate::FnAction(f), on_failure_message)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn action(&self) -> &dyn Action {
        self.action.as_ref()
    }

    pub fn on_failure_message(&self) -> &str {
        &self.on_failure_message
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("action", &self.action.describe())
            .field("on_failure_message", &self.on_failure_message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_maps_kind_to_variant() {
        let cause = Error::CommandFailed {
            program: "cargo test".to_string(),
            status: "exit code 101".to_string(),
        };

        let err = StepKind::UnitTests.failure("Unit tests FAILED.", &cause);
        assert!(matches!(err, Error::TestFailure { .. }));

        let err = StepKind::BuildIncrement.failure("Build increment FAILED.", &cause);
        assert!(matches!(err, Error::BuildIncrementFailure { .. }));

        let err = StepKind::Staging.failure("Staging FAILED.", &cause);
        match err {
            Error::StagingFailure { message, cause } => {
                assert_eq!(message, "Staging FAILED.");
                assert_eq!(cause, "`cargo test` failed with exit code 101");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_step_accessors() {
        let step = Step::from_fn(
            "unit tests",
            StepKind::UnitTests,
            |_root: &Path| Ok(None),
            "Unit tests FAILED.",
        );
        assert_eq!(step.name(), "unit tests");
        assert_eq!(step.kind(), StepKind::UnitTests);
        assert_eq!(step.on_failure_message(), "Unit tests FAILED.");
        assert_eq!(step.action().describe(), "in-process action");
        assert!(step.action().run(Path::new(".")).unwrap().is_none());
    }
}
