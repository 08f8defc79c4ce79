//! Matrix fetch error types.

use std::fmt;

use spiral_core::{ParseError, ValidationError};

/// Errors from fetching and processing a remote matrix.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// The server answered with a non-2xx status.
    #[error("failed to fetch matrix from {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// DNS failure, refused or dropped connection, or timeout.
    #[error("connection error fetching {url}: {source}")]
    Connection {
        url: String,
        source: reqwest::Error,
    },

    /// Any other transport failure while sending the request.
    #[error("HTTP error fetching {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// The response body could not be read as text.
    #[error("failed to read matrix body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },

    /// The URL argument is not a valid absolute URL.
    #[error("invalid matrix URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The body is not matrix text.
    #[error("failed to parse matrix from {url}: {source}")]
    Parse { url: String, source: ParseError },

    /// The matrix is empty or not square.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Coarse failure category shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad HTTP status or any unexpected failure during fetch or parse.
    Fetch,
    /// Network-level failure.
    Connection,
    /// Empty or non-square matrix.
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Connection => write!(f, "connection"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

impl MatrixError {
    /// Failure category for user-facing reporting.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Status { .. }
            | Self::Transport { .. }
            | Self::Body { .. }
            | Self::InvalidUrl { .. }
            | Self::Parse { .. }
            | Self::Config(_) => ErrorKind::Fetch,
        }
    }

    /// HTTP status code, if the server answered with a non-2xx status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a `reqwest` failure from sending the request.
    ///
    /// Anything that went wrong on the wire (connect, timeout, a peer that
    /// closed or reset the connection before answering) is a connection
    /// failure. Redirect-policy and request-building errors are not.
    pub(crate) fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_connect() || source.is_timeout() || source.is_request() || has_io_cause(&source)
        {
            Self::Connection {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Classify a `reqwest` failure from reading the body. Timeouts and
    /// I/O errors (connection dropped mid-body) count as connection failures.
    pub(crate) fn from_body(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() || has_io_cause(&source) {
            Self::Connection {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Body {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Whether a `std::io::Error` appears anywhere in the source chain.
fn has_io_cause(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut cause = err.source();
    while let Some(e) = cause {
        if e.is::<std::io::Error>() {
            return true;
        }
        cause = e.source();
    }
    false
}
