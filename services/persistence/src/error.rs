use chrono::NaiveDate;
use flooring_types::errors::FlooringError;
use flooring_types::ids::OrderNumber;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Corrupt row in {} line {line}: {detail}", .path.display())]
    Corrupt {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("Order #{order_number} not found for {date}")]
    OrderNotFound {
        order_number: OrderNumber,
        date: NaiveDate,
    },

    #[error("No order numbers left for {0}")]
    OrderNumbersExhausted(NaiveDate),

    #[error("Field {field} cannot contain a comma or line break: {value:?}")]
    UnsafeField { field: &'static str, value: String },

    #[error("Date out of range for order files: {0}")]
    UnsupportedDate(NaiveDate),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for FlooringError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { path, source } => FlooringError::Io { path, source },
            StoreError::Corrupt { path, line, detail } => {
                FlooringError::Corrupt { path, line, detail }
            }
            StoreError::OrderNotFound { order_number, date } => {
                FlooringError::OrderNotFound { order_number, date }
            }
            StoreError::OrderNumbersExhausted(date) => FlooringError::OrderNumbersExhausted(date),
            StoreError::UnsafeField { field, value } => FlooringError::UnsafeField { field, value },
            StoreError::UnsupportedDate(date) => FlooringError::UnsupportedDate(date),
        }
    }
}
