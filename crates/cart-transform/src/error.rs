//! Error types for item normalization.

use thiserror::Error;

/// Errors from normalizing item rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Every row below the header was blank, skipped or an option line.
    #[error(
        "no items found below header row {header_row}; \
         check that the file is a cart or estimate export"
    )]
    NoItemsFound { header_row: usize },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
