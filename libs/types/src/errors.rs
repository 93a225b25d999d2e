//! Error types for flooring orders
//!
//! One surfaced error type, tagged with an [`ErrorKind`] so callers can
//! branch on the cause without matching message text.

use crate::ids::OrderNumber;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`FlooringError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad customer input; the store was not touched
    Validation,
    /// Filesystem, data-file or lookup-by-number problem
    Storage,
}

/// Top-level flooring error
#[derive(Error, Debug)]
pub enum FlooringError {
    #[error("Customer name cannot be blank")]
    BlankName,

    #[error("Invalid character '{0}' in name")]
    InvalidNameCharacter(char),

    #[error("Invalid product type: {0}")]
    InvalidProductType(String),

    #[error("Invalid state abbreviation: {0}")]
    InvalidState(String),

    #[error("Area too small: {0} sq ft (minimum is 100 sq ft)")]
    AreaTooSmall(Decimal),

    #[error("Area too large to price: {0} sq ft")]
    AreaTooLarge(Decimal),

    #[error("Order date must be in the future: {0}")]
    DateNotInFuture(NaiveDate),

    #[error("Date out of range for order files: {0}")]
    UnsupportedDate(NaiveDate),

    #[error("Field {field} cannot contain a comma or line break: {value:?}")]
    UnsafeField { field: &'static str, value: String },

    #[error("Order #{order_number} not found for {date}")]
    OrderNotFound {
        order_number: OrderNumber,
        date: NaiveDate,
    },

    #[error("No order numbers left for {0}")]
    OrderNumbersExhausted(NaiveDate),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt data in {} line {line}: {detail}", .path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("Could not load reference data from {}: {detail}", .path.display())]
    ReferenceData { path: PathBuf, detail: String },
}

impl FlooringError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlooringError::BlankName
            | FlooringError::InvalidNameCharacter(_)
            | FlooringError::InvalidProductType(_)
            | FlooringError::InvalidState(_)
            | FlooringError::AreaTooSmall(_)
            | FlooringError::AreaTooLarge(_)
            | FlooringError::DateNotInFuture(_)
            | FlooringError::UnsupportedDate(_)
            | FlooringError::UnsafeField { .. } => ErrorKind::Validation,
            FlooringError::OrderNotFound { .. }
            | FlooringError::OrderNumbersExhausted(_)
            | FlooringError::Io { .. }
            | FlooringError::Corrupt { .. }
            | FlooringError::ReferenceData { .. } => ErrorKind::Storage,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_storage(&self) -> bool {
        self.kind() == ErrorKind::Storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = FlooringError::InvalidNameCharacter('#');
        assert_eq!(err.to_string(), "Invalid character '#' in name");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_order_not_found_is_storage() {
        let err = FlooringError::OrderNotFound {
            order_number: OrderNumber::new(9),
            date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        };
        assert!(err.is_storage());
        assert_eq!(err.to_string(), "Order #9 not found for 2030-06-01");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = FlooringError::Io {
            path: PathBuf::from("orders/Orders_06012030.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert!(err.is_storage());
        assert!(err.to_string().contains("Orders_06012030.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_area_too_small_message() {
        let err = FlooringError::AreaTooSmall(Decimal::new(9999, 2));
        assert!(err.to_string().contains("99.99"));
        assert!(err.is_validation());
    }
}
