//! Matrix fetch configuration.
//!
//! Defaults point at the public trainee-assignment matrix. Override via
//! environment variables or explicit construction for testing.

use url::Url;

/// Source fetched when no URL is given.
pub const DEFAULT_MATRIX_URL: &str =
    "https://raw.githubusercontent.com/avito-tech/python-trainee-assignment/main/matrix.txt";

/// `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("spiral/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`MatrixClient`](crate::MatrixClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Matrix source used when the caller does not name one.
    pub matrix_url: Url,
    /// Whole-request timeout in seconds. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl FetchConfig {
    /// Configuration for `matrix_url` with no timeout and the default user agent.
    pub fn new(matrix_url: Url) -> Self {
        Self {
            matrix_url,
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Configuration pointing at [`DEFAULT_MATRIX_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the built-in URL cannot be parsed
    /// (not expected, but avoids `expect()`).
    pub fn defaults() -> Result<Self, ConfigError> {
        parse_url("default", DEFAULT_MATRIX_URL).map(Self::new)
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SPIRAL_MATRIX_URL` (default: [`DEFAULT_MATRIX_URL`])
    /// - `SPIRAL_TIMEOUT_SECS` (default: unset, no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("SPIRAL_MATRIX_URL").unwrap_or_else(|| DEFAULT_MATRIX_URL.to_string());
        let mut config = Self::new(parse_url("SPIRAL_MATRIX_URL", &raw_url)?);

        if let Some(raw) = lookup("SPIRAL_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout_secs = Some(secs);
        }

        Ok(config)
    }

    /// Set the request timeout. Zero is rejected by [`MatrixClient::new`](crate::MatrixClient::new).
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

fn parse_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Variable name (or `default`) and the URL parser's message.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    /// Raw value that is not a positive integer.
    #[error("timeout must be a positive whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}
