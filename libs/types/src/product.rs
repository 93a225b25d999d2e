//! Flooring product reference entries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A flooring product with its per-square-foot rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_type: String,
    pub cost_per_square_foot: Decimal,
    pub labor_cost_per_square_foot: Decimal,
}

impl Product {
    pub fn new(
        product_type: impl Into<String>,
        cost_per_square_foot: Decimal,
        labor_cost_per_square_foot: Decimal,
    ) -> Self {
        Self {
            product_type: product_type.into(),
            cost_per_square_foot,
            labor_cost_per_square_foot,
        }
    }

    /// Case-insensitive lookup key for this product
    pub fn key(&self) -> String {
        lookup_key(&self.product_type)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (material ${}/sq ft, labor ${}/sq ft)",
            self.product_type, self.cost_per_square_foot, self.labor_cost_per_square_foot
        )
    }
}

/// Normalize a reference-data key: trimmed and lower-cased.
///
/// Shared by product and tax lookups so `" Wood"`, `"wood"` and `"WOOD"`
/// all address the same entry.
pub fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
