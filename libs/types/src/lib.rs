//! Types library for flooring installation orders
//!
//! This library provides the core type definitions shared by the order store,
//! the pricing/validation service, and the operator CLI.
//!
//! # Modules
//! - `ids`: Partition-scoped order numbers
//! - `numeric`: Fixed-point helpers (area floor, money rounding)
//! - `order`: The order record and its derived cost fields
//! - `product`: Flooring product reference entries
//! - `tax`: State tax reference entries
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod product;
pub mod tax;
pub mod errors;
