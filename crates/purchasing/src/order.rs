use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetflow_core::de::lenient_datetime;
use assetflow_core::{DecodeError, DecodeResult, OrderId};

/// A purchase order as stored by the backend.
///
/// `status` is an open set owned by the backend; the engine only gives
/// meaning to `Completed` (everything else counts as pending).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: OrderId,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub status: String,
    /// When the order was requested; `None` excludes the order from the
    /// pending-age ranking (its age is undefined).
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub requested_at: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    /// Every status except `Completed` (trimmed, case-insensitive) is pending.
    pub fn is_pending(&self) -> bool {
        !self.status.trim().eq_ignore_ascii_case("completed")
    }
}

/// Decode a raw backend payload (JSON array) into purchase orders.
pub fn decode_orders(payload: &serde_json::Value) -> DecodeResult<Vec<PurchaseOrder>> {
    serde_json::from_value(payload.clone())
        .map_err(|e| DecodeError::payload("purchase orders", e))
}
