//! Flooring Order Service
//!
//! Turns a caller's candidate order into a persisted one:
//! validate → price → store. Also exposes the product and tax reference
//! data the operator picks from.

pub mod reference;
pub mod calculator;
pub mod validator;
pub mod service;

pub use reference::{FileProductCatalog, FileTaxTable, ProductCatalog, TaxTable};
pub use service::FlooringService;
