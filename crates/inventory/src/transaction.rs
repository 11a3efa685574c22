use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetflow_core::de::{lenient_datetime, lenient_i64};
use assetflow_core::{ActorId, DecodeError, DecodeResult, ItemId, TransactionId};

/// Substring in a transaction note that marks the row as a reversal of a
/// prior invoice. Reversals are excluded from all movement aggregates.
pub const CANCELLATION_MARKER: &str = "ยกเลิก Invoice";

/// Normalized movement direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
    /// Direction field was missing, blank, or something else entirely.
    Unknown,
}

impl Direction {
    /// Parse a raw direction string: trimmed, case-insensitive `IN`/`OUT`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("in") {
            Direction::Inbound
        } else if raw.eq_ignore_ascii_case("out") {
            Direction::Outbound
        } else {
            Direction::Unknown
        }
    }
}

/// A stock movement as stored by the backend.
///
/// `quantity` may be recorded signed or unsigned depending on which client
/// wrote the row; consumers must use [`StockTransaction::unsigned_quantity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTransaction {
    pub id: TransactionId,
    pub item_id: ItemId,
    /// Raw direction string; see [`StockTransaction::direction`].
    #[serde(default)]
    pub direction: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    /// `None` when the stored timestamp was missing or unparsable; such rows
    /// match no month bucket and no activity window.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Free-text reference, e.g. an invoice number or repair ticket.
    #[serde(default)]
    pub note: Option<String>,
    /// User who performed the movement.
    #[serde(default)]
    pub performed_by: Option<ActorId>,
    #[serde(default)]
    pub budget_ref: Option<String>,
}

impl StockTransaction {
    pub fn direction(&self) -> Direction {
        Direction::parse(&self.direction)
    }

    /// Whether the note carries the reversal marker.
    pub fn is_cancelled(&self) -> bool {
        self.note
            .as_deref()
            .is_some_and(|note| note.contains(CANCELLATION_MARKER))
    }

    /// Absolute quantity moved, regardless of how the row recorded its sign.
    pub fn unsigned_quantity(&self) -> i64 {
        self.quantity.abs()
    }
}

/// Decode a raw backend payload (JSON array) into stock transactions.
pub fn decode_transactions(payload: &serde_json::Value) -> DecodeResult<Vec<StockTransaction>> {
    serde_json::from_value(payload.clone())
        .map_err(|e| DecodeError::payload("stock transactions", e))
}
