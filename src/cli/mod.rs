//! Command-line interface for csv-combine.
//!
//! Provides `merge` and `inspect` subcommands. This layer owns input
//! validation and presentation; the merge algorithm itself lives in
//! [`crate::merge`].

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod inspect;
mod merge;

/// Merge CSV files into a single output, unioning mismatched headers
#[derive(Parser)]
#[command(name = "csv-combine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge CSV files into one output file
    Merge(merge::MergeArgs),

    /// Show each file's header and row count without merging
    Inspect(inspect::InspectArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Merge(args) => merge::run(args),
        Commands::Inspect(args) => inspect::run(args),
    }
}
