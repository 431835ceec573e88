// Rust guideline compliant 2026-10-16

//! Terminal output for the Buildgate CLI.
//!
//! Progress lines go to stdout with coloured status prefixes.

use buildgate_core::{Error, Reporter, Step};
use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Reporter printing gate progress to stdout.
pub struct TerminalReporter {
    out: StandardStream,
}

impl TerminalReporter {
    /// Creates a reporter; `use_color` selects coloured prefixes.
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
        }
    }

    fn status(&mut self, prefix: &str, color: Color, message: &str) {
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.out, "{} ", prefix);
        let _ = self.out.reset();
        let _ = writeln!(self.out, "{}", message);
    }
}

impl Reporter for TerminalReporter {
    fn step_started(&mut self, step: &Step) {
        let _ = writeln!(self.out);
        self.status("ℹ", Color::Cyan, &format!("Running {}...", step.name()));
    }

    fn step_passed(&mut self, step: &Step, summary: Option<&str>) {
        if let Some(summary) = summary {
            let _ = writeln!(self.out, "  {}", summary);
        }
        self.status("✓", Color::Green, &format!("{} passed.", step.name()));
    }

    fn step_failed(&mut self, step: &Step, cause: &Error) {
        self.status("✗", Color::Red, step.on_failure_message());
        let _ = writeln!(self.out, "  cause: {}", cause);
    }

    fn gate_passed(&mut self) {
        let _ = writeln!(self.out);
        self.status("✓", Color::Green, "Pre-commit checks passed.");
    }
}

/// Prints an error message to stderr with a red prefix.
///
/// # Arguments
/// * `message` - The message to print
/// * `use_color` - Whether to colour the prefix
pub fn print_error(message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "✗ error: ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}
