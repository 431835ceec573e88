// Rust guideline compliant 2026-10-16

//! Diagnostic logging setup shared by the hook binaries.

use tracing_subscriber::EnvFilter;

/// Builds the log filter.
///
/// A valid `RUST_LOG` is used as is; otherwise only warnings are shown, or
/// debug output when `verbose` is set.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
