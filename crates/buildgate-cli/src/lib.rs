// Rust guideline compliant 2026-10-16

//! Buildgate CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod terminal;

pub use terminal::{should_use_color, TerminalReporter};
