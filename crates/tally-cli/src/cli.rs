//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - audit a collection-tracking database against its source log
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Collection-log audit and summary tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare source-log records against the database
    Audit {
        /// Source log export to parse
        #[arg(short, long)]
        file: PathBuf,

        /// Database connection string (falls back to DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Print totals and rankings computed from the source log
    Summary {
        /// Source log export to parse
        #[arg(short, long)]
        file: PathBuf,

        /// Known database grand total to diff the source total against
        #[arg(long)]
        reference_total: Option<i64>,
    },
}
