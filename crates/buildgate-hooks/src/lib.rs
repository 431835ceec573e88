// Rust guideline compliant 2026-10-16

//! Buildgate Git Hooks
//!
//! This crate provides the pre-commit gate assembled from configuration:
//! - Unit tests
//! - Build-number increment
//! - Staging of the version file

pub mod logging;
pub mod pre_commit;

pub use logging::init_tracing;
pub use pre_commit::{bump_hook, pre_commit_hook, pre_commit_steps};
