//! # Matrix Types
//!
//! [`Matrix`] is whatever the parser produced: possibly empty, possibly
//! ragged. [`SquareMatrix`] is a `Matrix` that passed
//! [`ensure_square`](crate::validate::ensure_square) and is the only input
//! the traversal accepts.
//!
//! Both serialize as a JSON array of arrays. Deserializing a
//! `SquareMatrix` re-runs the square check.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Rows of integers as parsed from text. No shape guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Wrap parsed rows. No shape check.
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Unwrap into the row vectors.
    pub fn into_rows(self) -> Vec<Vec<i64>> {
        self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of integers across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl From<Vec<Vec<i64>>> for Matrix {
    fn from(rows: Vec<Vec<i64>>) -> Self {
        Self::new(rows)
    }
}

/// A non-empty n×n matrix.
///
/// Invariant: `rows.len() >= 1` and every row has exactly `rows.len()`
/// elements. Constructed only through the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct SquareMatrix {
    rows: Vec<Vec<i64>>,
}

impl SquareMatrix {
    pub(crate) fn from_validated(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows in input order; each has length [`size`](Self::size).
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Clockwise spiral order starting at the top-left corner.
    pub fn spiral_order(&self) -> Vec<i64> {
        crate::traverse::spiral_order(self)
    }

    /// Drop the square guarantee.
    pub fn into_matrix(self) -> Matrix {
        Matrix::new(self.rows)
    }
}

impl TryFrom<Matrix> for SquareMatrix {
    type Error = ValidationError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        crate::validate::ensure_square(matrix)
    }
}

impl From<SquareMatrix> for Matrix {
    fn from(square: SquareMatrix) -> Self {
        square.into_matrix()
    }
}
