// Rust guideline compliant 2026-10-16

//! Progress reporting for gate runs.

use crate::{Error, Step};
use std::io::Write;

/// Receives progress events while the gate runs.
pub trait Reporter {
    /// Called before a step's action runs.
    fn step_started(&mut self, step: &Step);

    /// Called after a step's action succeeded.
    fn step_passed(&mut self, step: &Step, summary: Option<&str>);

    /// Called when a step's action failed. No further steps will run.
    fn step_failed(&mut self, step: &Step, cause: &Error);

    /// Called once after every step succeeded.
    fn gate_passed(&mut self);
}

/// Writes uncoloured progress lines to any writer.
pub struct PlainReporter<W: Write> {
    out: W,
}

impl<W: Write> PlainReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl PlainReporter<std::io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter for PlainReporter<W> {
    fn step_started(&mut self, step: &Step) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Running {}...", step.name());
    }

    fn step_passed(&mut self, step: &Step, summary: Option<&str>) {
        if let Some(summary) = summary {
            let _ = writeln!(self.out, "{}", summary);
        }
        let _ = writeln!(self.out, "{} passed.", step.name());
    }

    fn step_failed(&mut self, step: &Step, cause: &Error) {
        let _ = writeln!(self.out, "{}", step.on_failure_message());
        let _ = writeln!(self.out, "  cause: {}", cause);
    }

    fn gate_passed(&mut self) {
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "Pre-commit checks passed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepKind;
    use std::path::Path;

    fn step() -> Step {
        Step::from_fn(
            "unit tests",
            StepKind::UnitTests,
            |_root: &Path| Ok(None),
            "Unit tests FAILED.",
        )
    }

    #[test]
    fn test_plain_reporter_pass_lines() {
        let mut reporter = PlainReporter::new(Vec::new());
        let step = step();
        reporter.step_started(&step);
        reporter.step_passed(&step, Some("42 tests"));
        reporter.gate_passed();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            out,
            "\nRunning unit tests...\n42 tests\nunit tests passed.\n\nPre-commit checks passed.\n"
        );
    }

    #[test]
    fn test_plain_reporter_failure_lines() {
        let mut reporter = PlainReporter::new(Vec::new());
        let cause = Error::CommandFailed {
            program: "cargo test".to_string(),
            status: "exit code 101".to_string(),
        };
        reporter.step_failed(&step(), &cause);

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.starts_with("Unit tests FAILED.\n"));
        assert!(out.contains("`cargo test` failed with exit code 101"));
    }
}
