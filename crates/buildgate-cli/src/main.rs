// Rust guideline compliant 2026-10-16

//! Buildgate CLI Application
//!
//! Command-line interface for the Buildgate pre-commit gate.

use buildgate_cli::commands;
use buildgate_cli::should_use_color;
use buildgate_cli::terminal::print_error;
use buildgate_core::{exit_code, resolve_root, Error};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "bgate",
    version,
    about = "Buildgate: test, bump and stage before every commit",
    long_about = "Buildgate runs the unit tests, increments the build number in the version file and stages it. The first failing step aborts the commit.",
    after_help = "Examples:\n  bgate init\n  bgate pre-commit\n  bgate bump\n  bgate show --json\n"
)]
struct Cli {
    /// Repository root (defaults to Git discovery)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run tests, increment the build number and stage the version file
    PreCommit,

    /// Increment the build number only
    Bump,

    /// Show the current build number
    Show {
        /// Enable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Write a default config and install the pre-commit hook
    Init {
        /// Replace an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    buildgate_hooks::init_tracing(cli.verbose);

    let use_color = !cli.no_color && should_use_color();
    let result = run(cli, use_color);
    if let Err(err) = &result {
        let already_reported = err
            .downcast_ref::<Error>()
            .is_some_and(Error::is_step_failure);
        if !already_reported {
            print_error(&format!("{:#}", err), use_color);
        }
    }
    ExitCode::from(exit_code(&result))
}

fn run(cli: Cli, use_color: bool) -> anyhow::Result<()> {
    let root = resolve_root(cli.root.as_deref())?;
    tracing::debug!(root = %root.display(), "resolved repository root");

    match cli.command {
        Commands::PreCommit => commands::pre_commit::execute(&root, use_color)?,
        Commands::Bump => commands::bump::execute(&root, use_color)?,
        Commands::Show { json } => commands::show::execute(&root, json)?,
        Commands::Init { force } => {
            commands::init::execute(&root, force)?;
        }
    }

    Ok(())
}
