//! # spiral-client — Matrix Fetcher
//!
//! Retrieves a text-encoded matrix over HTTP(S) and runs it through the
//! `spiral-core` pipeline:
//!
//! ```text
//! URL ──GET──▶ text ──parse──▶ Matrix ──validate──▶ SquareMatrix ──traverse──▶ Vec<i64>
//! ```
//!
//! ## Failure Categories
//!
//! Every failure is a [`MatrixError`]; [`MatrixError::kind`] collapses the
//! variants into three categories:
//! - **fetch**: non-2xx status (with the code), body or parse failures,
//!   invalid URL
//! - **connection**: DNS failure, refused or dropped connection, timeout
//! - **validation**: empty or non-square matrix
//!
//! Nothing is retried. One request is in flight per call.

pub mod config;
pub mod error;

pub use config::{ConfigError, FetchConfig};
pub use error::{ErrorKind, MatrixError};

use std::time::Duration;

use spiral_core::{Matrix, SquareMatrix};
use url::Url;

/// HTTP client for matrix sources.
#[derive(Debug, Clone)]
pub struct MatrixClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl MatrixClient {
    /// Create a new client from configuration.
    ///
    /// A zero timeout is rejected: every request would fail immediately.
    pub fn new(config: FetchConfig) -> Result<Self, MatrixError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        match config.timeout_secs {
            Some(0) => return Err(ConfigError::InvalidTimeout("0".into()).into()),
            Some(secs) => builder = builder.timeout(Duration::from_secs(secs)),
            None => {}
        }
        let http = builder.build().map_err(|e| MatrixError::Transport {
            url: "client_init".into(),
            source: e,
        })?;

        Ok(Self { http, config })
    }

    /// Configuration this client was built from.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// GET `url` and return the body as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String, MatrixError> {
        let parsed = Url::parse(url).map_err(|e| MatrixError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(%parsed, "fetching matrix");
        let resp = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(|e| MatrixError::from_send(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "matrix source returned error status");
            return Err(MatrixError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = resp.text().await.map_err(|e| MatrixError::from_body(url, e))?;
        tracing::debug!(bytes = text.len(), "received matrix text");
        Ok(text)
    }

    /// Fetch `url` and parse the body into a [`Matrix`]. No shape check.
    pub async fn fetch_matrix(&self, url: &str) -> Result<Matrix, MatrixError> {
        let text = self.fetch_text(url).await?;
        spiral_core::parse_matrix(&text).map_err(|source| MatrixError::Parse {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch `url` and require a non-empty square matrix.
    pub async fn fetch_square(&self, url: &str) -> Result<SquareMatrix, MatrixError> {
        let matrix = self.fetch_matrix(url).await?;
        let square = spiral_core::ensure_square(matrix)?;
        tracing::info!(size = square.size(), "fetched square matrix");
        Ok(square)
    }

    /// Fetch `url` and return its clockwise spiral traversal.
    pub async fn spiral_order(&self, url: &str) -> Result<Vec<i64>, MatrixError> {
        let square = self.fetch_square(url).await?;
        Ok(spiral_core::spiral_order(&square))
    }

    /// [`spiral_order`](Self::spiral_order) on the configured `matrix_url`.
    pub async fn spiral_order_default(&self) -> Result<Vec<i64>, MatrixError> {
        let url = self.config.matrix_url.to_string();
        self.spiral_order(&url).await
    }
}

/// Fetch `url` with the default configuration and return its spiral traversal.
pub async fn get_matrix(url: &str) -> Result<Vec<i64>, MatrixError> {
    MatrixClient::new(FetchConfig::defaults()?)?
        .spiral_order(url)
        .await
}
