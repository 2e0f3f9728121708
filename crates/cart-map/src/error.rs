//! Error types for header resolution.

use cart_model::Field;
use thiserror::Error;

/// Errors from locating the header row or mapping its columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No row in the scan window looked like a header.
    #[error(
        "could not find a header row in the first {scanned_rows} rows; \
         check that the file is a cart or estimate export"
    )]
    HeaderNotFound { scanned_rows: usize },

    /// The header row lacks a column the conversion cannot do without.
    #[error(
        "required column '{field}' not found in header row {header_row} (headers: {})",
        format_headers(.headers)
    )]
    RequiredColumnMissing {
        field: Field,
        header_row: usize,
        headers: Vec<String>,
    },
}

fn format_headers(headers: &[String]) -> String {
    if headers.is_empty() {
        "none".to_string()
    } else {
        headers.join(", ")
    }
}

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::RequiredColumnMissing {
            field: Field::Quantity,
            header_row: 3,
            headers: vec!["상품명".to_string(), "금액".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "required column 'quantity' not found in header row 3 (headers: 상품명, 금액)"
        );
    }

    #[test]
    fn test_header_not_found_mentions_window() {
        let err = ResolveError::HeaderNotFound { scanned_rows: 60 };
        assert!(err.to_string().contains("first 60 rows"));
    }
}
