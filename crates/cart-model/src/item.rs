//! Normalized line items.

use serde::{Deserialize, Serialize};

/// One normalized product line.
///
/// `unit_price_sale <= unit_price_list` is expected but not enforced; vendor
/// data can violate it and the normalizer reports it as a warning instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub spec: String,
    pub quantity: u32,
    pub unit_price_list: u64,
    pub unit_price_sale: u64,
    pub product_code: String,
}

impl LineItem {
    /// Quantity times list price.
    pub fn list_amount(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.unit_price_list)
    }

    /// Quantity times sale price, the amount actually charged.
    pub fn sale_amount(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.unit_price_sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> LineItem {
        LineItem {
            name: "Pencil".to_string(),
            spec: "HB".to_string(),
            quantity: 10,
            unit_price_list: 500,
            unit_price_sale: 400,
            product_code: String::new(),
        }
    }

    #[test]
    fn amounts() {
        let item = item();
        assert_eq!(item.list_amount(), 5000);
        assert_eq!(item.sale_amount(), 4000);
    }

    #[test]
    fn amounts_saturate() {
        let item = LineItem {
            quantity: 3,
            unit_price_list: u64::MAX / 2,
            ..item()
        };
        assert_eq!(item.list_amount(), u64::MAX);
        assert_eq!(item.sale_amount(), 1200);
    }
}
