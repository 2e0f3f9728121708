//! Item normalization for cart spreadsheets.
//!
//! Given a sheet, its header row and a resolved [`cart_model::ColumnMap`],
//! [`ItemNormalizer`] walks the data rows and produces
//! [`cart_model::LineItem`]s:
//!
//! - currency and quantity cells are coerced to integers
//! - missing sale or list prices are derived from the row total
//! - `Name (spec)` style names are split and embedded codes extracted
//! - `label: value` option lines refine the preceding item
//!
//! Adjustments are reported as [`ItemWarning`]s rather than errors.

#![deny(unsafe_code)]

mod error;
pub mod normalization;
mod normalizer;
mod types;

pub use error::{NormalizeError, Result};
pub use normalizer::{ItemNormalizer, normalize_items};
pub use types::{ItemWarning, NormalizedItems, WarningKind};
