//! # Fetch Subcommand
//!
//! Downloads a matrix, checks that it is square, and prints its spiral
//! order. With no URL argument the configured source is used
//! (`SPIRAL_MATRIX_URL`, falling back to the trainee-assignment matrix).

use anyhow::{Context, Result};
use clap::Args;

use spiral_client::{FetchConfig, MatrixClient, MatrixError};

use crate::output;

/// Arguments for the `spiral fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// URL of the plain-text matrix.
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds. Overrides SPIRAL_TIMEOUT_SECS.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Print a JSON object instead of a plain list.
    #[arg(long)]
    pub json: bool,
}

/// Execute the fetch subcommand.
///
/// Returns exit code 0 on success. Every failure is returned as an error.
pub fn run_fetch(args: &FetchArgs) -> Result<u8> {
    let mut config = FetchConfig::from_env().context("failed to load fetch configuration")?;
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    let url = resolve_url(args, &config);

    let client = MatrixClient::new(config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let (size, order) = runtime
        .block_on(fetch_order(&client, &url))
        .context("spiral fetch failed")?;

    println!("{}", output::render(size, &order, args.json)?);
    Ok(0)
}

/// Fetch `url` and return the matrix size with its spiral order.
pub async fn fetch_order(
    client: &MatrixClient,
    url: &str,
) -> Result<(usize, Vec<i64>), MatrixError> {
    let square = client.fetch_square(url).await?;
    let order = square.spiral_order();
    tracing::debug!(size = square.size(), cells = order.len(), "traversed matrix");
    Ok((square.size(), order))
}

fn resolve_url(args: &FetchArgs, config: &FetchConfig) -> String {
    args.url
        .clone()
        .unwrap_or_else(|| config.matrix_url.to_string())
}
