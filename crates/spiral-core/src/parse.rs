//! # Matrix Text Parser
//!
//! Turns the plain-text form of a matrix into a [`Matrix`]. Accepts both a
//! bare grid of integers and an ASCII-art table:
//!
//! ```text
//! +-----+-----+
//! |  10 |  20 |
//! +-----+-----+
//! |  30 |  40 |
//! +-----+-----+
//! ```
//!
//! Frame lines are dropped if their first or last character is
//! [`BORDER_CHAR`]. The check is on the raw line, so a data line that
//! happens to start or end with `+` is dropped as well.

use crate::error::ParseError;
use crate::matrix::Matrix;

/// Character that marks a frame line when it starts or ends the line.
pub const BORDER_CHAR: char = '+';

/// Whether `line` is a decorative frame line.
pub fn is_border_line(line: &str) -> bool {
    line.starts_with(BORDER_CHAR) || line.ends_with(BORDER_CHAR)
}

/// Keep only ASCII alphanumerics and whitespace.
///
/// Column separators (`|`) vanish, and so does any sign character: `-3`
/// becomes `3`.
pub fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Parse matrix text into rows of integers.
///
/// The whole text is trimmed first. Every non-frame line becomes one row,
/// including blank interior lines (which yield empty rows and fail the
/// square check later).
pub fn parse_matrix(text: &str) -> Result<Matrix, ParseError> {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in text.trim().lines().enumerate() {
        if is_border_line(line) {
            skipped += 1;
            continue;
        }
        rows.push(parse_row(&clean_line(line), idx + 1)?);
    }

    tracing::debug!(
        rows = rows.len(),
        border_lines = skipped,
        "parsed matrix text"
    );
    Ok(Matrix::new(rows))
}

fn parse_row(cleaned: &str, line: usize) -> Result<Vec<i64>, ParseError> {
    cleaned
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|source| ParseError::InvalidInteger {
                    line,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}
