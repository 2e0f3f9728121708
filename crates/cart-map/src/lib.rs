//! Header resolution for vendor cart exports.
//!
//! Finds the header row of a [`RawSheet`](cart_model::RawSheet) and maps its
//! labels onto semantic [`Field`](cart_model::Field)s using priority-ordered
//! synonym lists.
//!
//! # Example
//!
//! ```ignore
//! use cart_map::resolve_header;
//!
//! let (header_row, columns) = resolve_header(&sheet)?;
//! ```

#![deny(unsafe_code)]

mod detect;
mod error;
mod resolver;
mod synonyms;
mod utils;

pub use detect::{RowScore, detect_header_row, score_row};
pub use error::{ResolveError, Result};
pub use resolver::{HeaderResolver, header_texts, map_columns, resolve_header};
pub use synonyms::{HEADER_KEYWORDS, PRIMARY_NAME_KEYWORDS, synonyms};
pub use utils::{compact_header, normalize_header};
