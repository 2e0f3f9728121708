//! Normalization results and row-level warnings.

use std::fmt;

use cart_model::LineItem;
use serde::Serialize;

/// Items produced from one sheet together with what was adjusted on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedItems {
    pub items: Vec<LineItem>,
    pub warnings: Vec<ItemWarning>,
}

/// A non-fatal observation about one source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemWarning {
    /// 1-based source row.
    pub row: usize,
    pub kind: WarningKind,
}

impl ItemWarning {
    pub fn new(row: usize, kind: WarningKind) -> Self {
        Self { row, kind }
    }
}

/// What happened to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    /// Quantity was missing or not positive and defaulted to 1.
    QuantityDefaulted,
    /// Quantity was missing or not positive and the row was dropped.
    MissingQuantitySkipped,
    /// Sale price was derived from the row total.
    SalePriceDerived { total: u64, quantity: u32 },
    /// List price copied from the sale price.
    ListPriceDerived,
    /// Sale price is above the list price; left as observed.
    SaleAboveList { list: u64, sale: u64 },
    /// A `label: value` line replaced the previous item's spec.
    OptionApplied { spec: String },
    /// A number-less line after an item that was not `label: value`.
    OptionIgnored { text: String },
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuantityDefaulted => write!(f, "quantity missing, defaulted to 1"),
            Self::MissingQuantitySkipped => write!(f, "quantity missing, row skipped"),
            Self::SalePriceDerived { total, quantity } => {
                write!(f, "sale price derived from total {total} / quantity {quantity}")
            }
            Self::ListPriceDerived => write!(f, "list price missing, using sale price"),
            Self::SaleAboveList { list, sale } => {
                write!(f, "sale price {sale} is above list price {list}")
            }
            Self::OptionApplied { spec } => write!(f, "option line set spec to '{spec}'"),
            Self::OptionIgnored { text } => write!(f, "option line '{text}' ignored"),
        }
    }
}

impl fmt::Display for ItemWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.kind)
    }
}
