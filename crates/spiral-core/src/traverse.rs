//! # Spiral Traversal
//!
//! Peels the outermost ring of the matrix clockwise (top row, right
//! column, bottom row, left column), shrinks the bounding box, and repeats
//! until the bounds cross.

use crate::matrix::SquareMatrix;

/// Clockwise spiral order of `matrix`, starting at the top-left corner.
///
/// The result holds every cell exactly once, so its length is n².
pub fn spiral_order(matrix: &SquareMatrix) -> Vec<i64> {
    spiral_rows(matrix.rows())
}

/// Spiral walk over rectangular `rows`.
///
/// `bottom` and `right` are exclusive so shrinking never underflows. Rows
/// must all have the length of the first row.
pub(crate) fn spiral_rows<T: Copy>(rows: &[Vec<T>]) -> Vec<T> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(rows.len() * first.len());
    let (mut top, mut bottom) = (0, rows.len());
    let (mut left, mut right) = (0, first.len());

    while top < bottom && left < right {
        for col in left..right {
            out.push(rows[top][col]);
        }
        top += 1;

        for row in top..bottom {
            out.push(rows[row][right - 1]);
        }
        right -= 1;

        if top < bottom {
            for col in (left..right).rev() {
                out.push(rows[bottom - 1][col]);
            }
            bottom -= 1;
        }

        if left < right {
            for row in (top..bottom).rev() {
                out.push(rows[row][left]);
            }
            left += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::validate::ensure_square;
    use proptest::prelude::*;

    fn square(rows: Vec<Vec<i64>>) -> SquareMatrix {
        ensure_square(Matrix::new(rows)).unwrap()
    }

    /// n×n matrix filled with 1..=n².
    fn counting(n: usize) -> Vec<Vec<i64>> {
        (0..n)
            .map(|r| (0..n).map(|c| (r * n + c + 1) as i64).collect())
            .collect()
    }

    #[test]
    fn three_by_three() {
        let m = square(counting(3));
        assert_eq!(spiral_order(&m), vec![1, 2, 3, 6, 9, 8, 7, 4, 5]);
    }

    #[test]
    fn four_by_four() {
        let m = square(counting(4));
        assert_eq!(
            spiral_order(&m),
            vec![1, 2, 3, 4, 8, 12, 16, 15, 14, 13, 9, 5, 6, 7, 11, 10]
        );
    }

    #[test]
    fn two_by_two() {
        assert_eq!(spiral_order(&square(counting(2))), vec![1, 2, 4, 3]);
    }

    #[test]
    fn single_cell() {
        assert_eq!(spiral_order(&square(vec![vec![5]])), vec![5]);
    }

    #[test]
    fn empty_rows_yield_empty_order() {
        let rows: Vec<Vec<i64>> = Vec::new();
        assert!(spiral_rows(&rows).is_empty());
    }

    #[test]
    fn method_matches_free_function() {
        let m = square(counting(5));
        assert_eq!(m.spiral_order(), spiral_order(&m));
    }

    proptest! {
        /// Every cell is visited exactly once.
        #[test]
        fn order_is_permutation_of_cells(n in 1usize..12) {
            let m = square(counting(n));
            let mut order = spiral_order(&m);
            prop_assert_eq!(order.len(), n * n);
            order.sort_unstable();
            let expected: Vec<i64> = (1..=(n * n) as i64).collect();
            prop_assert_eq!(order, expected);
        }

        /// Traversal is deterministic for arbitrary cell values.
        #[test]
        fn order_is_deterministic(
            cells in (1usize..8).prop_flat_map(|n| {
                prop::collection::vec(prop::collection::vec(any::<i64>(), n), n)
            })
        ) {
            let m = square(cells);
            let n = m.size();
            let a = spiral_order(&m);
            let b = spiral_order(&m);
            prop_assert_eq!(a.len(), n * n);
            prop_assert_eq!(a, b);
        }

        /// The walk starts at the top-left corner and the first row comes out intact.
        #[test]
        fn first_row_leads(n in 1usize..12) {
            let rows = counting(n);
            let order = spiral_order(&square(rows.clone()));
            prop_assert_eq!(&order[..n], rows[0].as_slice());
        }
    }
}
