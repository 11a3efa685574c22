//! `assetflow-core` — shared foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): typed record identifiers, the decode error model for the JSON
//! boundary, lenient deserializers for messy backend payloads, and calendar
//! arithmetic shared by the analytics engine.

pub mod de;
pub mod error;
pub mod id;
pub mod time;

pub use error::{DecodeError, DecodeResult};
pub use id::{ActorId, AgreementId, ItemId, OrderId, TransactionId};
