//! Maintenance record module (maintenance/license agreements).
//!
//! Record types as supplied by the persistence collaborator. No IO, no HTTP,
//! no storage.

pub mod agreement;

pub use agreement::{MaintenanceAgreement, decode_agreements};
