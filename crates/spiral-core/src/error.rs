//! # Error Types
//!
//! Errors raised by the pure stages of the pipeline. Network failures live
//! in `spiral-client`; everything here is reproducible from the input text
//! alone.

use std::num::ParseIntError;

use thiserror::Error;

/// Error while turning matrix text into a [`Matrix`](crate::Matrix).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A whitespace-delimited token is not a base-10 `i64`.
    #[error("line {line}: token {token:?} is not a valid integer: {source}")]
    InvalidInteger {
        /// 1-based line number within the trimmed input text.
        line: usize,
        /// The offending token after punctuation was stripped.
        token: String,
        /// Why `str::parse::<i64>` rejected the token.
        source: ParseIntError,
    },
}

/// Why a matrix failed the square check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// The matrix has no rows.
    Empty,
    /// A row's length differs from the row count.
    RowLength {
        /// 0-based index of the first offending row.
        row: usize,
        /// Row count, which every row length must equal.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "matrix has no rows"),
            Self::RowLength {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} columns, expected {expected}"),
        }
    }
}

/// The matrix is empty, ragged, or rectangular but not square.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("fetched data is not a square matrix: {reason}")]
pub struct ValidationError {
    /// Which check failed.
    pub reason: ValidationReason,
}

impl ValidationError {
    pub(crate) fn new(reason: ValidationReason) -> Self {
        Self { reason }
    }
}

/// Failure of the local parse → validate → traverse pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    /// The text could not be read as rows of integers.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The rows do not form a non-empty square matrix.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
