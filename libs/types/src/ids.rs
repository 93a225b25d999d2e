//! Identifier types for orders
//!
//! Order numbers are unique only within one order-date partition. The store
//! assigns them as `max(existing) + 1`, so a removed number is never handed
//! out again while a higher number still exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Partition-scoped order number
///
/// `0` marks an order that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u32);

impl OrderNumber {
    /// Number carried by an order before the store has assigned one
    pub const UNASSIGNED: OrderNumber = OrderNumber(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// The number following this one, `None` past `u32::MAX`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Next free number given the numbers already in a partition
    ///
    /// Starts at 1 for an empty partition. `None` when the highest existing
    /// number is already `u32::MAX`.
    pub fn next_after<I>(existing: I) -> Option<Self>
    where
        I: IntoIterator<Item = OrderNumber>,
    {
        existing
            .into_iter()
            .max()
            .unwrap_or(Self::UNASSIGNED)
            .next()
    }
}

impl FromStr for OrderNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
