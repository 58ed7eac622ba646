//! Core types for the Furniture Shop.
//!
//! This module provides type-safe wrappers for money, shipping destinations,
//! quantities and transaction identifiers.

pub mod id;
pub mod price;
pub mod quantity;
pub mod state_code;

pub use id::TransactionId;
pub use price::Price;
pub use quantity::{QuantityError, parse_quantity};
pub use state_code::{STATE_ABBREVIATIONS, StateCode, StateCodeError};
