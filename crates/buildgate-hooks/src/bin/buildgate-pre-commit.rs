// Rust guideline compliant 2026-10-16

//! CLI entry point for the Buildgate pre-commit hook.

use buildgate_core::{exit_code, resolve_root, Error, PlainReporter};
use std::process::ExitCode;

fn main() -> ExitCode {
    buildgate_hooks::init_tracing(false);

    let result = run();
    if let Err(err) = &result {
        let already_reported = err
            .downcast_ref::<Error>()
            .is_some_and(Error::is_step_failure);
        if !already_reported {
            eprintln!("buildgate: {:#}", err);
        }
    }
    ExitCode::from(exit_code(&result))
}

fn run() -> anyhow::Result<()> {
    let repo_path = resolve_root(None)?;
    let mut reporter = PlainReporter::stdout();
    buildgate_hooks::pre_commit_hook(&repo_path, &mut reporter)
}
