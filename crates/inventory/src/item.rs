use serde::{Deserialize, Serialize};

use assetflow_core::de::{lenient_f64, lenient_i64};
use assetflow_core::{DecodeError, DecodeResult, ItemId};

/// A stock item as stored by the backend.
///
/// Threshold fields default to 0 when absent; `max_quantity == 0` means "no
/// maximum configured". `quantity > max_quantity` is tolerated — the backend
/// does not enforce the ceiling and neither does the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: ItemId,
    pub name: String,
    /// Device type / category code. Empty when uncategorized.
    #[serde(default)]
    pub category: String,
    /// Current quantity on hand.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: i64,
    /// Reorder threshold; at or below this the item counts as low stock.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub min_quantity: i64,
    /// Stock ceiling; 0 = unset.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub max_quantity: i64,
    /// Unit price; numbers and numeric strings both accepted, missing → 0.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_price: f64,
    #[serde(default)]
    pub location: Option<String>,
}

impl StockItem {
    /// Whether the item is at or below its reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// Quantity on hand × unit price.
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Decode a raw backend payload (JSON array) into stock items.
pub fn decode_items(payload: &serde_json::Value) -> DecodeResult<Vec<StockItem>> {
    serde_json::from_value(payload.clone())
        .map_err(|e| DecodeError::payload("stock items", e))
}
