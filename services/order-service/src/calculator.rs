//! Cost calculation functions
//!
//! Deterministic order pricing with fixed-point Decimal arithmetic.
//! Material and labor costs keep the full precision of the multiplication;
//! only tax and total are rounded, to cents with HALF_UP rounding.

use flooring_types::errors::FlooringError;
use flooring_types::numeric::{percent_to_fraction, round_money};
use flooring_types::order::Order;
use flooring_types::product::Product;
use flooring_types::tax::TaxEntry;
use rust_decimal::Decimal;

/// The seven derived fields of a priced order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    pub tax_rate: Decimal,
    pub cost_per_square_foot: Decimal,
    pub labor_cost_per_square_foot: Decimal,
    pub material_cost: Decimal,
    pub labor_cost: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CostBreakdown {
    /// Material plus labor, before tax
    pub fn subtotal(&self) -> Decimal {
        self.material_cost + self.labor_cost
    }
}

/// Price `area` square feet of `product` installed in the state of `tax`.
///
/// ```text
/// material = area × cost/sq ft
/// labor    = area × labor/sq ft
/// tax      = round2(subtotal × rate / 100)
/// total    = round2(subtotal + tax)
/// ```
///
/// Fails with `AreaTooLarge` when any step leaves the Decimal range.
pub fn calculate(
    area: Decimal,
    product: &Product,
    tax: &TaxEntry,
) -> Result<CostBreakdown, FlooringError> {
    let overflow = || FlooringError::AreaTooLarge(area);

    let material_cost = area
        .checked_mul(product.cost_per_square_foot)
        .ok_or_else(overflow)?;
    let labor_cost = area
        .checked_mul(product.labor_cost_per_square_foot)
        .ok_or_else(overflow)?;
    let subtotal = material_cost.checked_add(labor_cost).ok_or_else(overflow)?;
    let tax_amount = round_money(
        subtotal
            .checked_mul(percent_to_fraction(tax.tax_rate))
            .ok_or_else(overflow)?,
    );
    let total = round_money(subtotal.checked_add(tax_amount).ok_or_else(overflow)?);

    Ok(CostBreakdown {
        tax_rate: tax.tax_rate,
        cost_per_square_foot: product.cost_per_square_foot,
        labor_cost_per_square_foot: product.labor_cost_per_square_foot,
        material_cost,
        labor_cost,
        tax: tax_amount,
        total,
    })
}

/// Write a breakdown onto an order's derived fields.
pub fn apply(order: &mut Order, costs: &CostBreakdown) {
    order.tax_rate = costs.tax_rate;
    order.cost_per_square_foot = costs.cost_per_square_foot;
    order.labor_cost_per_square_foot = costs.labor_cost_per_square_foot;
    order.material_cost = costs.material_cost;
    order.labor_cost = costs.labor_cost;
    order.tax = costs.tax;
    order.total = costs.total;
}

/// Price an order in place from its own area. The order is left untouched on failure.
pub fn price_order(
    order: &mut Order,
    product: &Product,
    tax: &TaxEntry,
) -> Result<CostBreakdown, FlooringError> {
    let costs = calculate(order.area, product, tax)?;
    apply(order, &costs);
    Ok(costs)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_total_is_rounded_subtotal_plus_tax(
            area_cents in 10_000i64..10_000_000,
            cost_cents in 1i64..2_000,
            labor_cents in 1i64..2_000,
            rate_bp in 0i64..3_000,
        ) {
            let area = Decimal::new(area_cents, 2);
            let product = Product::new("P", Decimal::new(cost_cents, 2), Decimal::new(labor_cents, 2));
            let tax = TaxEntry::new("ZZ", "Test", Decimal::new(rate_bp, 2));

            let costs = calculate(area, &product, &tax).unwrap();
            prop_assert_eq!(costs.material_cost, area * product.cost_per_square_foot);
            prop_assert_eq!(costs.tax.scale(), 2);
            prop_assert_eq!(costs.total.scale(), 2);
            prop_assert!(costs.tax >= Decimal::ZERO);
            prop_assert!((costs.total - (costs.subtotal() + costs.tax)).abs() < Decimal::new(1, 2));
            prop_assert_eq!(calculate(area, &product, &tax).unwrap(), costs);
        }
    }
}
