//! Fixed-point decimal helpers for areas, rates and money
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Only tax and total are rounded, to 2 places with HALF_UP rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on rounded money amounts
pub const MONEY_SCALE: u32 = 2;

/// Smallest area (square feet) an order may cover, inclusive
pub const MIN_AREA: Decimal = Decimal::ONE_HUNDRED;

/// Round a money amount to cents, ties away from zero
///
/// The result always carries exactly two decimal places (`34` becomes `34.00`).
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Convert a percentage (e.g. `4.45`) into a fraction (`0.0445`)
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}
