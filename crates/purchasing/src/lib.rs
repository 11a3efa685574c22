//! Purchasing record module (purchase orders).
//!
//! Record types as supplied by the persistence collaborator. No IO, no HTTP,
//! no storage.

pub mod order;

pub use order::{PurchaseOrder, decode_orders};
