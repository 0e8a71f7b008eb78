//! Tally CLI - collection-log audit and summary tool
//!
//! Usage:
//!   tally audit --file LOG      Compare the source log against the database
//!   tally summary --file LOG    Print totals and rankings from the source log

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Audit { file, database_url } => {
            commands::cmd_audit(&file, database_url.as_deref()).await
        }
        Commands::Summary {
            file,
            reference_total,
        } => commands::cmd_summary(&file, reference_total),
    }
}
