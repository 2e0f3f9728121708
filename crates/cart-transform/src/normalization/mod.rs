//! Cell-level normalization functions.
//!
//! All functions here are pure and never fail; malformed cells degrade to
//! documented defaults so one bad cell cannot abort a conversion.

pub mod name;
pub mod numeric;
pub mod option;

pub use name::{extract_embedded_code, split_name_spec};
pub use numeric::{divide_rounded, parse_amount, parse_numeric_text, parse_quantity};
pub use option::parse_option_line;
