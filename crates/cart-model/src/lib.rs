//! Data model for cart sheet conversion.
//!
//! A vendor cart export is decoded into a [`RawSheet`], its header row is
//! resolved into a [`ColumnMap`], and each product row becomes a [`LineItem`].

pub mod cell;
pub mod field;
pub mod item;
pub mod options;
pub mod sheet;

pub use cell::CellValue;
pub use field::{ColumnMap, Field};
pub use item::LineItem;
pub use options::{
    ConvertOptions, DEFAULT_MAX_SPEC_LEN, DEFAULT_SCAN_ROWS, HeaderStrategy,
    MissingQuantityPolicy, NormalizerOptions, ResolverOptions,
};
pub use sheet::RawSheet;
