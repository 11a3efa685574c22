//! Six-month movement trends.
//!
//! Transactions are bucketed into a rolling window of six calendar months
//! ending at `now`'s month, oldest first. A transaction is assigned to a
//! bucket when its timestamp's month index equals the bucket's month index;
//! the **year is deliberately ignored**, so a row from a previous year whose
//! month matches a bucket is counted into it. This mirrors the behavior the
//! legacy dashboards shipped with and that the product owners have not signed
//! off on changing.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use assetflow_core::ItemId;
use assetflow_core::time::rolling_months;
use assetflow_inventory::{Direction, StockItem, StockTransaction};

/// Number of calendar months in the trend window.
pub const TREND_MONTHS: u32 = 6;

/// Quantity moved per month bucket. `month` is a 1–12 index; rendering it as
/// a localized month name is the display collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementBucket {
    pub month: u32,
    pub inbound: i64,
    pub outbound: i64,
}

/// Money moved per month bucket: `spending` for inbound rows, `consumption`
/// for outbound rows, both priced at the item's current unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueBucket {
    pub month: u32,
    pub spending: f64,
    pub consumption: f64,
}

/// Inbound/outbound quantities over the rolling six-month window.
///
/// Always returns exactly [`TREND_MONTHS`] buckets in chronological order
/// ending at `now`'s month; an empty transaction set yields all-zero buckets.
pub fn movement_trend(now: DateTime<Utc>, txs: &[StockTransaction]) -> Vec<MovementBucket> {
    tracing::debug!(transactions = txs.len(), "building movement trend");

    let months = rolling_months(now, TREND_MONTHS);
    let mut buckets: Vec<MovementBucket> = months
        .iter()
        .map(|&month| MovementBucket { month, inbound: 0, outbound: 0 })
        .collect();

    for (tx, slot) in qualifying(txs, &months) {
        let bucket = &mut buckets[slot];
        match tx.direction() {
            Direction::Inbound => bucket.inbound += tx.unsigned_quantity(),
            Direction::Outbound => bucket.outbound += tx.unsigned_quantity(),
            Direction::Unknown => {}
        }
    }

    buckets
}

/// Spending/consumption value over the rolling six-month window.
///
/// Rows referencing an unknown item are priced at 0, matching the summary's
/// missing-price rule.
pub fn value_trend(
    now: DateTime<Utc>,
    txs: &[StockTransaction],
    items: &[StockItem],
) -> Vec<ValueBucket> {
    tracing::debug!(
        transactions = txs.len(),
        items = items.len(),
        "building value trend"
    );

    let prices: HashMap<&ItemId, f64> = items.iter().map(|i| (&i.id, i.unit_price)).collect();

    let months = rolling_months(now, TREND_MONTHS);
    let mut buckets: Vec<ValueBucket> = months
        .iter()
        .map(|&month| ValueBucket { month, spending: 0.0, consumption: 0.0 })
        .collect();

    for (tx, slot) in qualifying(txs, &months) {
        let price = prices.get(&tx.item_id).copied().unwrap_or(0.0);
        let value = tx.unsigned_quantity() as f64 * price;

        let bucket = &mut buckets[slot];
        match tx.direction() {
            Direction::Inbound => bucket.spending += value,
            Direction::Outbound => bucket.consumption += value,
            Direction::Unknown => {}
        }
    }

    buckets
}

/// Non-cancelled transactions that land in a bucket, paired with the bucket
/// slot. Rows without a timestamp match nothing.
fn qualifying<'a>(
    txs: &'a [StockTransaction],
    months: &'a [u32],
) -> impl Iterator<Item = (&'a StockTransaction, usize)> {
    txs.iter().filter_map(|tx| {
        if tx.is_cancelled() {
            return None;
        }
        let ts = tx.occurred_at?;
        let slot = months.iter().position(|&m| m == ts.month())?;
        Some((tx, slot))
    })
}
