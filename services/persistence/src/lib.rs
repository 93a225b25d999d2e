//! Order Persistence Service
//!
//! Durable, date-partitioned storage for flooring orders. Each order date maps
//! to one flat comma-separated file; every mutation loads the whole partition,
//! changes it in memory and rewrites the file.
//!
//! # Modules
//! - `partition`: date to file-name addressing
//! - `codec`: row and partition (de)serialization
//! - `store`: the `OrderStore` contract and its file-backed implementation
//! - `export`: single-file export of every partition

pub mod partition;
pub mod codec;
pub mod store;
pub mod export;

mod error;

pub use error::StoreError;
pub use export::{export_all, ExportSummary};
pub use store::{FileOrderStore, OrderStore, StoreConfig};
