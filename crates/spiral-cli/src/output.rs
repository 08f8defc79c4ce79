//! # Output Formatting
//!
//! Results go to stdout in one of two forms:
//! - text: `[1, 2, 3, 6, 9, 8, 7, 4, 5]`
//! - JSON: `{"size":3,"order":[1,2,3,6,9,8,7,4,5]}`

use anyhow::{Context, Result};
use serde::Serialize;

/// Machine-readable traversal result.
#[derive(Debug, Serialize)]
pub struct SpiralReport<'a> {
    /// Side length of the square matrix.
    pub size: usize,
    /// Elements in clockwise spiral order.
    pub order: &'a [i64],
}

/// Bracketed, comma-separated list.
pub fn format_text(order: &[i64]) -> String {
    let items: Vec<String> = order.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Compact JSON [`SpiralReport`].
pub fn format_json(size: usize, order: &[i64]) -> Result<String> {
    serde_json::to_string(&SpiralReport { size, order }).context("failed to serialize spiral report")
}

/// Render a traversal in the selected form.
pub fn render(size: usize, order: &[i64], json: bool) -> Result<String> {
    if json {
        format_json(size, order)
    } else {
        Ok(format_text(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_matches_list_notation() {
        assert_eq!(format_text(&[1, 2, 3, 6, 9, 8, 7, 4, 5]), "[1, 2, 3, 6, 9, 8, 7, 4, 5]");
        assert_eq!(format_text(&[5]), "[5]");
        assert_eq!(format_text(&[]), "[]");
    }

    #[test]
    fn json_form_includes_size() {
        let json = format_json(2, &[1, 2, 4, 3]).unwrap();
        assert_eq!(json, r#"{"size":2,"order":[1,2,4,3]}"#);

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["order"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn render_switches_on_flag() {
        assert_eq!(render(1, &[7], false).unwrap(), "[7]");
        assert_eq!(render(1, &[7], true).unwrap(), r#"{"size":1,"order":[7]}"#);
    }
}
