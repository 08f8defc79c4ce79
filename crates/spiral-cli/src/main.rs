//! # spiral CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spiral_cli::fetch::{run_fetch, FetchArgs};
use spiral_cli::traverse::{run_traverse, TraverseArgs};

/// Print the clockwise spiral order of a square integer matrix.
///
/// The matrix is plain text, one row per line, optionally framed with an
/// ASCII-art border of `+`, `-` and `|`.
#[derive(Parser, Debug)]
#[command(name = "spiral", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a matrix over HTTP(S) and print its spiral order.
    Fetch(FetchArgs),

    /// Read a matrix from a file or stdin and print its spiral order.
    Traverse(TraverseArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Fetch(args) => run_fetch(&args),
        Commands::Traverse(args) => run_traverse(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
