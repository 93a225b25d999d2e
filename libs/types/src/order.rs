//! Flooring order record
//!
//! An order is created transiently by a caller, validated, priced, and then
//! handed to the store, which assigns its partition-scoped number.

use crate::ids::OrderNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete order structure
///
/// The seven derived fields (`tax_rate` through `total`) are written by the
/// cost calculator and must always match the current `product_type` and
/// `state` rates at the time of last calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub state: String,
    pub tax_rate: Decimal,
    pub product_type: String,
    pub area: Decimal,
    pub cost_per_square_foot: Decimal,
    pub labor_cost_per_square_foot: Decimal,
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Order {
    /// Create an unpriced, unnumbered candidate order
    pub fn new(
        customer_name: impl Into<String>,
        state: impl Into<String>,
        product_type: impl Into<String>,
        area: Decimal,
    ) -> Self {
        Self {
            order_number: OrderNumber::UNASSIGNED,
            customer_name: customer_name.into(),
            state: state.into(),
            tax_rate: Decimal::ZERO,
            product_type: product_type.into(),
            area,
            cost_per_square_foot: Decimal::ZERO,
            labor_cost_per_square_foot: Decimal::ZERO,
            material_cost: Decimal::ZERO,
            labor_cost: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Material plus labor, before tax
    pub fn subtotal(&self) -> Decimal {
        self.material_cost + self.labor_cost
    }

    /// Builder-style order number assignment
    pub fn with_order_number(mut self, order_number: OrderNumber) -> Self {
        self.order_number = order_number;
        self
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} | {} | {} | {} | {} sq ft | Material: ${} | Labor: ${} | Tax: ${} | Total: ${}",
            self.order_number,
            self.customer_name,
            self.state,
            self.product_type,
            self.area,
            self.material_cost,
            self.labor_cost,
            self.tax,
            self.total
        )
    }
}
