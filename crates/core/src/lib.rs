//! Furniture Shop Core - order accumulation and pricing.
//!
//! This crate turns a shopper's selections into an invoice and is used by:
//! - `cli` - Terminal front end (`shop purchase`, `shop quote`, `shop catalog`)
//! - `integration-tests` - Drives the same checkout with scripted answers
//!
//! # Architecture
//!
//! The core crate contains only types, lookup tables and pure computation -
//! no terminal I/O and no environment access. Interactive flows talk to the
//! outside world through the [`session::Prompter`] trait.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices, state codes, quantities and IDs
//! - [`catalog`] - The fixed item catalog
//! - [`shipping`] - State-to-zone table and zone rates
//! - [`order`] - Order accumulator that merges repeated selections
//! - [`pricing`] - Subtotal, shipping, tax and total
//! - [`invoice`] - Printable invoice rows and summary
//! - [`session`] - Checkout state machine over an injectable prompter

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod invoice;
pub mod order;
pub mod pricing;
pub mod session;
pub mod shipping;
pub mod types;

pub use catalog::{Catalog, CatalogEntry, ItemError};
pub use invoice::{Invoice, InvoiceLine};
pub use order::{Order, OrderLine};
pub use pricing::{OrderSummary, PricingEngine, PricingPolicy};
pub use session::{CheckoutSession, Outcome, Prompter, Step};
pub use shipping::{ShippingTable, ShippingZone};
pub use types::*;
