//! Typed cell values as decoded from an uploaded spreadsheet.

use serde::{Deserialize, Serialize};

/// A single decoded cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Builds a text cell, collapsing whitespace-only input to `Empty`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Returns true for `Empty` and for whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Returns the text content when this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Renders the cell for display or string fields.
    ///
    /// Integral numbers print without a fractional part, so a product code
    /// stored as `11033697.0` renders as `11033697`.
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.trim().to_string(),
            Self::Number(value) => format_number(*value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_text_is_empty() {
        assert_eq!(CellValue::text("   "), CellValue::Empty);
        assert!(CellValue::Text(" \t".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(11033697.0).display_text(), "11033697");
        assert_eq!(CellValue::Number(2.5).display_text(), "2.5");
        assert_eq!(CellValue::text(" abc ").display_text(), "abc");
    }

    #[test]
    fn option_conversion() {
        let missing: Option<&str> = None;
        assert_eq!(CellValue::from(missing), CellValue::Empty);
        assert_eq!(CellValue::from(Some(3_i64)), CellValue::Number(3.0));
    }
}
