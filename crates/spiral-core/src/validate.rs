//! # Square-Matrix Validation
//!
//! Gatekeeper between parsing and traversal. Rejects empty input, ragged
//! rows, and rectangular matrices whose column count differs from the row
//! count.

use crate::error::{ValidationError, ValidationReason};
use crate::matrix::{Matrix, SquareMatrix};

/// Check that `matrix` is non-empty and n×n.
///
/// Reports the first row whose length differs from the row count.
pub fn ensure_square(matrix: Matrix) -> Result<SquareMatrix, ValidationError> {
    let n = matrix.row_count();
    if n == 0 {
        return Err(ValidationError::new(ValidationReason::Empty));
    }

    if let Some((row, cells)) = matrix
        .rows()
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != n)
    {
        return Err(ValidationError::new(ValidationReason::RowLength {
            row,
            expected: n,
            actual: cells.len(),
        }));
    }

    Ok(SquareMatrix::from_validated(matrix.into_rows()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(rows: Vec<Vec<i64>>) -> ValidationReason {
        ensure_square(Matrix::new(rows)).unwrap_err().reason
    }

    #[test]
    fn accepts_square() {
        let square = ensure_square(Matrix::new(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ]))
        .unwrap();
        assert_eq!(square.size(), 3);
    }

    #[test]
    fn accepts_single_cell() {
        assert_eq!(ensure_square(Matrix::new(vec![vec![5]])).unwrap().size(), 1);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(reason(vec![]), ValidationReason::Empty);
    }

    #[test]
    fn rejects_single_empty_row() {
        assert_eq!(
            reason(vec![vec![]]),
            ValidationReason::RowLength {
                row: 0,
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn rejects_rectangular() {
        // 2 rows × 3 columns
        assert_eq!(
            reason(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            ValidationReason::RowLength {
                row: 0,
                expected: 2,
                actual: 3
            }
        );
        // 3 rows × 2 columns
        assert!(matches!(
            reason(vec![vec![1, 2], vec![3, 4], vec![5, 6]]),
            ValidationReason::RowLength { row: 0, .. }
        ));
    }

    #[test]
    fn rejects_ragged() {
        assert_eq!(
            reason(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]),
            ValidationReason::RowLength {
                row: 2,
                expected: 3,
                actual: 2
            }
        );
    }
}
