//! Order validation
//!
//! Gate-keeps candidate orders before they are priced or stored.

use chrono::NaiveDate;
use flooring_types::errors::FlooringError;
use flooring_types::numeric::MIN_AREA;
use flooring_types::order::Order;
use flooring_types::product::Product;
use flooring_types::tax::TaxEntry;
use rust_decimal::Decimal;

use crate::reference::{ProductCatalog, TaxTable};

/// Punctuation allowed in a customer name besides ASCII letters and digits
const NAME_PUNCTUATION: [char; 5] = [' ', '.', ',', '-', '\''];

/// Reference entries an order was validated against.
///
/// Pricing uses these same entries, so the derived fields always come from
/// the snapshot the order was checked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRates {
    pub product: Product,
    pub tax: TaxEntry,
}

/// Validate a candidate order.
///
/// Returns the resolved product and tax entries on success,
/// otherwise the first failing check.
///
/// Checks performed (in order):
/// 1. Customer name charset
/// 2. Product type exists
/// 3. State abbreviation exists
/// 4. Area at least 100 sq ft
pub fn validate_order<P, T>(
    order: &Order,
    products: &P,
    taxes: &T,
) -> Result<ResolvedRates, FlooringError>
where
    P: ProductCatalog + ?Sized,
    T: TaxTable + ?Sized,
{
    validate_customer_name(&order.customer_name)?;

    let product = products
        .lookup_product(&order.product_type)?
        .ok_or_else(|| FlooringError::InvalidProductType(order.product_type.clone()))?;

    let tax = taxes
        .lookup_tax_rate(&order.state)?
        .ok_or_else(|| FlooringError::InvalidState(order.state.clone()))?;

    validate_area(order.area)?;

    Ok(ResolvedRates { product, tax })
}

/// Name must be non-blank once trimmed and use only letters, digits,
/// space, period, comma, hyphen and apostrophe.
pub fn validate_customer_name(name: &str) -> Result<(), FlooringError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FlooringError::BlankName);
    }
    match trimmed
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !NAME_PUNCTUATION.contains(c))
    {
        Some(bad) => Err(FlooringError::InvalidNameCharacter(bad)),
        None => Ok(()),
    }
}

/// Area lower bound is inclusive.
pub fn validate_area(area: Decimal) -> Result<(), FlooringError> {
    if area < MIN_AREA {
        return Err(FlooringError::AreaTooSmall(area));
    }
    Ok(())
}

/// New orders must be dated strictly after `today`.
pub fn validate_future_date(date: NaiveDate, today: NaiveDate) -> Result<(), FlooringError> {
    if date <= today {
        return Err(FlooringError::DateNotInFuture(date));
    }
    Ok(())
}
