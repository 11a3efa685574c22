//! Dead-stock detection.
//!
//! An item is dead stock when it holds a positive quantity but has had no
//! qualifying outbound movement in the trailing three calendar months. A
//! reversal row (cancellation marker in the note) is not a qualifying
//! movement, so an item whose only recent OUT was later reversed still
//! counts as dead.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetflow_core::ItemId;
use assetflow_core::time::within_trailing_months;
use assetflow_inventory::{Direction, StockItem, StockTransaction};

/// Trailing activity window, in calendar months.
pub const ACTIVITY_WINDOW_MONTHS: u32 = 3;
/// Entries listed in the report; totals always cover the full dead set.
pub const DEAD_STOCK_LIMIT: usize = 10;

/// One idle item, priced at its current unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadStockEntry {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub value: f64,
}

/// Dead-stock report: the highest-value idle items plus totals over the
/// complete (unclipped) dead set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadStockReport {
    /// Top [`DEAD_STOCK_LIMIT`] entries by value, descending.
    pub items: Vec<DeadStockEntry>,
    /// Count of all dead items, including those beyond the listed top.
    pub total_items: usize,
    /// Value of all dead items, including those beyond the listed top.
    pub total_value: f64,
}

/// Detect dead stock as of `now`.
pub fn dead_stock_report(
    now: DateTime<Utc>,
    items: &[StockItem],
    txs: &[StockTransaction],
) -> DeadStockReport {
    tracing::debug!(
        items = items.len(),
        transactions = txs.len(),
        "building dead-stock report"
    );

    let active: HashSet<&ItemId> = txs
        .iter()
        .filter(|tx| tx.direction() == Direction::Outbound && !tx.is_cancelled())
        .filter(|tx| {
            tx.occurred_at
                .is_some_and(|ts| within_trailing_months(now, ACTIVITY_WINDOW_MONTHS, ts))
        })
        .map(|tx| &tx.item_id)
        .collect();

    let mut dead: Vec<DeadStockEntry> = items
        .iter()
        .filter(|i| i.quantity > 0 && !active.contains(&i.id))
        .map(|i| DeadStockEntry {
            item_id: i.id.clone(),
            name: i.name.clone(),
            quantity: i.quantity,
            unit_price: i.unit_price,
            value: i.stock_value(),
        })
        .collect();

    let total_items = dead.len();
    let total_value = dead.iter().map(|e| e.value).sum();

    dead.sort_by(|a, b| b.value.total_cmp(&a.value));
    dead.truncate(DEAD_STOCK_LIMIT);

    DeadStockReport {
        items: dead,
        total_items,
        total_value,
    }
}
