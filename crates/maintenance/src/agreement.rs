use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetflow_core::de::lenient_datetime;
use assetflow_core::{AgreementId, DecodeError, DecodeResult};

/// A maintenance or license agreement as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAgreement {
    pub id: AgreementId,
    /// Item or contract name.
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: String,
    /// Agreement end date; `None` excludes it from expiry alerts.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl MaintenanceAgreement {
    /// Cancelled agreements never raise expiry alerts.
    pub fn is_cancelled(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("cancelled")
    }
}

/// Decode a raw backend payload (JSON array) into agreements.
pub fn decode_agreements(payload: &serde_json::Value) -> DecodeResult<Vec<MaintenanceAgreement>> {
    serde_json::from_value(payload.clone())
        .map_err(|e| DecodeError::payload("maintenance agreements", e))
}
