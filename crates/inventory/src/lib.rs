//! Inventory record module.
//!
//! This crate contains the stock-item and stock-transaction record types as
//! supplied by the persistence collaborator, plus the normalization helpers
//! the analytics engine relies on (direction parsing, cancellation-marker
//! detection, defensive field defaults). No IO, no HTTP, no storage.

pub mod item;
pub mod transaction;

pub use item::{StockItem, decode_items};
pub use transaction::{
    CANCELLATION_MARKER, Direction, StockTransaction, decode_transactions,
};
