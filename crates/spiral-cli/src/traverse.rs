//! # Traverse Subcommand
//!
//! Same pipeline as `fetch`, minus the network: reads matrix text from a
//! file (or stdin) and prints its spiral order.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use spiral_core::square_from_text;

use crate::output;

/// Arguments for the `spiral traverse` subcommand.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    /// Matrix text file. Reads stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Print a JSON object instead of a plain list.
    #[arg(long)]
    pub json: bool,
}

/// Execute the traverse subcommand.
pub fn run_traverse(args: &TraverseArgs) -> Result<u8> {
    let text = read_input(args.path.as_deref())?;
    let (size, order) = traverse_text(&text)?;
    println!("{}", output::render(size, &order, args.json)?);
    Ok(0)
}

/// Parse, validate, and traverse matrix text.
pub fn traverse_text(text: &str) -> Result<(usize, Vec<i64>)> {
    let square = square_from_text(text).context("invalid matrix text")?;
    Ok((square.size(), square.spiral_order()))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read matrix file {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read matrix from stdin")?;
            Ok(text)
        }
    }
}
