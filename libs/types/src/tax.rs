//! State tax reference entries

use crate::product::lookup_key;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales tax rate for one state
///
/// `tax_rate` is a percentage (`4.45` means 4.45%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub state_abbreviation: String,
    pub state_name: String,
    pub tax_rate: Decimal,
}

impl TaxEntry {
    pub fn new(
        state_abbreviation: impl Into<String>,
        state_name: impl Into<String>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            state_abbreviation: state_abbreviation.into(),
            state_name: state_name.into(),
            tax_rate,
        }
    }

    /// Case-insensitive lookup key for this entry
    pub fn key(&self) -> String {
        lookup_key(&self.state_abbreviation)
    }
}

impl fmt::Display for TaxEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}%",
            self.state_name, self.state_abbreviation, self.tax_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_entry_display() {
        let entry = TaxEntry::new("TX", "Texas", Decimal::new(445, 2));
        assert_eq!(entry.to_string(), "Texas (TX) - 4.45%");
        assert_eq!(entry.key(), "tx");
    }
}
