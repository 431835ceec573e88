// Rust guideline compliant 2026-10-16

//! Buildgate Core Library
//!
//! This crate provides the building blocks of the pre-commit gate:
//! - Error types and result handling
//! - Configuration loading (`buildgate.toml` plus environment overrides)
//! - Repository root resolution
//! - The build-number file codec and built-in incrementer
//! - Steps, actions and the fail-fast gate runner
//! - The reporter seam for progress output

pub mod action;
pub mod config;
pub mod error;
pub mod gate;
pub mod report;
pub mod root;
pub mod step;
pub mod version;

pub use action::{CommandAction, FnAction, StageFile};
pub use config::{Config, CONFIG_FILE};
pub use error::{Error, Result};
pub use gate::{exit_code, Gate, EXIT_FAILURE, EXIT_SUCCESS};
pub use report::{PlainReporter, Reporter};
pub use root::{discover_workdir, resolve_root};
pub use step::{Action, Step, StepKind};
pub use version::{BuildNumberFile, IncrementBuild};
