//! Ralph CLI
//!
//! Installs the ralph workspace into a project and keeps its core assets
//! current.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod probe;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let project_root = std::env::current_dir()?;
    let distribution_root =
        context::resolve_distribution_root(std::env::var_os(context::DISTRIBUTION_ENV))?;
    let ctx = context::workspace_context(project_root, distribution_root);
    tracing::debug!(
        project = %ctx.project_root().display(),
        distribution = %ctx.distribution_root().display(),
        "resolved context"
    );

    match cli.command {
        Commands::Install => commands::run_install(&ctx),
        Commands::Update => commands::run_update(&ctx),
    }
}

/// Log to stderr so diagnostics never mix with the report on stdout.
///
/// `RALPH_LOG` takes an `EnvFilter` directive; the default is `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("RALPH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
