// Rust guideline compliant 2026-10-16

//! Error types for the Buildgate core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Buildgate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Buildgate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file or environment override.
    #[error("Invalid config: {0}")]
    Config(String),

    /// No usable repository work tree could be located.
    #[error("Repository root not found: {0}")]
    RootNotFound(String),

    /// External command finished unsuccessfully.
    #[error("`{program}` failed with {status}")]
    CommandFailed { program: String, status: String },

    /// Version file does not exist.
    #[error("Version file not found: {}", .0.display())]
    VersionFileNotFound(PathBuf),

    /// Version file has no usable build number line.
    #[error("No '{}' build number found in {}", .key, .path.display())]
    MissingBuildNumber { key: String, path: PathBuf },

    /// Build number cannot be incremented any further.
    #[error("Build number overflow: {0} is the largest supported value")]
    BuildNumberOverflow(u64),

    /// The unit-test step failed.
    #[error("{message} ({cause})")]
    TestFailure { message: String, cause: String },

    /// The build-increment step failed.
    #[error("{message} ({cause})")]
    BuildIncrementFailure { message: String, cause: String },

    /// Staging the version file failed.
    #[error("{message} ({cause})")]
    StagingFailure { message: String, cause: String },
}

impl Error {
    /// Returns whether this error reports a failed gate step.
    ///
    /// Step failures have already been reported to the user by the time they
    /// surface, so callers typically skip printing them a second time.
    pub fn is_step_failure(&self) -> bool {
        matches!(
            self,
            Error::TestFailure { .. }
                | Error::BuildIncrementFailure { .. }
                | Error::StagingFailure { .. }
        )
    }
}
