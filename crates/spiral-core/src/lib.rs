//! # spiral-core — Matrix Parsing and Spiral Traversal
//!
//! The pure half of the spiral toolchain. Three stages, each usable on its
//! own:
//!
//! 1. [`parse_matrix`] — text in, [`Matrix`] out. Drops ASCII-art frame
//!    lines and punctuation, reads whitespace-separated integers.
//! 2. [`ensure_square`] — [`Matrix`] in, [`SquareMatrix`] out. Rejects
//!    empty, ragged, and non-square input.
//! 3. [`spiral_order`] — [`SquareMatrix`] in, `Vec<i64>` out. Clockwise
//!    walk from the top-left corner.
//!
//! [`square_from_text`] chains the first two and [`spiral_from_text`] all
//! three, for local input.
//!
//! ## Crate Policy
//!
//! - No I/O. Fetching lives in `spiral-client`.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Traversal is only reachable through a validated [`SquareMatrix`].

#![deny(missing_docs)]

pub mod error;
pub mod matrix;
pub mod parse;
pub mod traverse;
pub mod validate;

pub use error::{ParseError, SpiralError, ValidationError, ValidationReason};
pub use matrix::{Matrix, SquareMatrix};
pub use parse::parse_matrix;
pub use traverse::spiral_order;
pub use validate::ensure_square;

/// Parse and validate matrix text.
pub fn square_from_text(text: &str) -> Result<SquareMatrix, SpiralError> {
    let matrix = parse_matrix(text)?;
    Ok(ensure_square(matrix)?)
}

/// Parse, validate, and traverse matrix text in one call.
pub fn spiral_from_text(text: &str) -> Result<Vec<i64>, SpiralError> {
    square_from_text(text).map(|square| spiral_order(&square))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framed_text_end_to_end() {
        let text = "\
+-----+-----+-----+-----+
|  10 |  20 |  30 |  40 |
+-----+-----+-----+-----+
|  50 |  60 |  70 |  80 |
+-----+-----+-----+-----+
|  90 | 100 | 110 | 120 |
+-----+-----+-----+-----+
| 130 | 140 | 150 | 160 |
+-----+-----+-----+-----+
";
        assert_eq!(
            spiral_from_text(text).unwrap(),
            vec![10, 20, 30, 40, 80, 120, 160, 150, 140, 130, 90, 50, 60, 70, 110, 100]
        );
    }

    #[test]
    fn non_square_text_is_a_validation_error() {
        let err = spiral_from_text("1 2 3\n4 5 6").unwrap_err();
        assert!(matches!(err, SpiralError::Validation(_)));
        assert!(err.to_string().starts_with("fetched data is not a square matrix"));
    }

    #[test]
    fn empty_text_is_a_validation_error() {
        let err = spiral_from_text("+---+\n+---+\n").unwrap_err();
        assert_eq!(
            err,
            SpiralError::Validation(ValidationError {
                reason: ValidationReason::Empty
            })
        );
    }

    #[test]
    fn square_from_text_keeps_the_matrix() {
        let square = square_from_text("| 1 | 2 |\n| 3 | 4 |").unwrap();
        assert_eq!(square.size(), 2);
        assert_eq!(square.rows(), Matrix::new(vec![vec![1, 2], vec![3, 4]]).rows());
    }

    #[test]
    fn bad_token_is_a_parse_error() {
        let err = spiral_from_text("1 2\n3 four").unwrap_err();
        assert!(matches!(err, SpiralError::Parse(_)));
    }
}
