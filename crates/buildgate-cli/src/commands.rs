// Rust guideline compliant 2026-10-16

//! Command implementations for the Buildgate CLI.

pub mod bump;
pub mod init;
pub mod pre_commit;
pub mod show;
