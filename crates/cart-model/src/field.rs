//! Semantic fields of a cart export and their resolved column positions.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic column of a cart export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Quantity,
    UnitPriceList,
    UnitPriceSale,
    Total,
    ProductCode,
}

impl Field {
    /// All fields in resolution order.
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Quantity,
        Field::UnitPriceList,
        Field::UnitPriceSale,
        Field::Total,
        Field::ProductCode,
    ];

    /// Stable snake_case key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::UnitPriceList => "unit_price_list",
            Self::UnitPriceSale => "unit_price_sale",
            Self::Total => "total",
            Self::ProductCode => "product_code",
        }
    }

    /// Fields whose absence makes a sheet unusable.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Quantity)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Mapping from [`Field`] to a 1-based column index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    columns: BTreeMap<Field, usize>,
}

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column for a field, if it was resolved.
    pub fn get(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, column: usize) {
        self.columns.insert(field, column);
    }

    /// Builder-style [`ColumnMap::insert`].
    #[must_use]
    pub fn with(mut self, field: Field, column: usize) -> Self {
        self.insert(field, column);
        self
    }

    pub fn contains(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }

    /// Returns true if any field already points at `column`.
    pub fn is_claimed(&self, column: usize) -> bool {
        self.columns.values().any(|&c| c == column)
    }

    /// Resolved fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.columns.iter().map(|(field, column)| (*field, *column))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// First required field without a column.
    pub fn missing_required(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .find(|field| !self.contains(*field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields() {
        let required: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(required, vec![Field::Name, Field::Quantity]);
    }

    #[test]
    fn missing_required_reports_first_gap() {
        let map = ColumnMap::new().with(Field::Name, 2);
        assert_eq!(map.missing_required(), Some(Field::Quantity));

        let map = map.with(Field::Quantity, 3);
        assert_eq!(map.missing_required(), None);
        assert!(map.is_claimed(3));
        assert!(!map.is_claimed(1));
    }

    #[test]
    fn iter_follows_field_order() {
        let map = ColumnMap::new()
            .with(Field::Total, 1)
            .with(Field::Name, 4);
        let fields: Vec<_> = map.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Total]);
    }
}
