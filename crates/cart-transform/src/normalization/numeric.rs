//! Numeric coercion of price and quantity cells.
//!
//! Vendor exports mix real numbers with display strings such as `12,300원`,
//! `₩ 4,000` or `3개`. Coercion never fails: anything that does not yield a
//! positive number degrades to 0 (prices) or `None` (quantity).

use cart_model::CellValue;

/// Amounts at or above this do not fit a `u64` and are treated as unparsable.
const AMOUNT_LIMIT: f64 = u64::MAX as f64;

/// Parse the numeric part of a display string.
///
/// Keeps ASCII digits, the decimal point and minus signs, dropping currency
/// symbols, thousands separators, whitespace and unit suffixes. Returns
/// `None` when what remains is not a number (`""`, `"-"`, `"1.2.3"`).
pub fn parse_numeric_text(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();

    if !cleaned.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn cell_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Empty => None,
        CellValue::Number(value) => Some(*value).filter(|value| value.is_finite()),
        CellValue::Text(text) => parse_numeric_text(text),
    }
}

/// Coerce a price or total cell to a whole currency amount.
///
/// Fractions round half away from zero; empty, unparsable, negative and
/// out-of-range values become 0.
pub fn parse_amount(cell: &CellValue) -> u64 {
    match cell_number(cell).map(f64::round) {
        Some(value) if value > 0.0 && value < AMOUNT_LIMIT => value as u64,
        _ => 0,
    }
}

/// Coerce a quantity cell. Returns `None` when the quantity is missing,
/// unparsable or not positive after rounding.
pub fn parse_quantity(cell: &CellValue) -> Option<u32> {
    let value = cell_number(cell)?.round();
    if value < 1.0 {
        return None;
    }
    Some(value.min(f64::from(u32::MAX)) as u32)
}

/// Integer division rounding half up, used to derive a unit price from a row total.
pub fn divide_rounded(total: u64, quantity: u32) -> u64 {
    let quantity = u64::from(quantity);
    if quantity == 0 {
        return 0;
    }
    total / quantity + u64::from(total % quantity * 2 >= quantity)
}
