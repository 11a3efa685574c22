//! Top-N rankings for dashboards and reports.
//!
//! Every ranking is a pure function of its inputs (and `now` where a window
//! is involved). Sorts are stable, so ties keep their input order; grouped
//! rankings additionally preserve first-occurrence order before sorting,
//! which makes repeated runs byte-for-byte reproducible.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use assetflow_core::time::{same_calendar_month, whole_days_since, whole_days_until};
use assetflow_core::{ActorId, AgreementId, ItemId, OrderId};
use assetflow_inventory::{Direction, StockItem, StockTransaction};
use assetflow_maintenance::MaintenanceAgreement;
use assetflow_purchasing::PurchaseOrder;

/// Default list length on dashboard cards.
pub const DASHBOARD_LIMIT: usize = 5;
/// Default list length in report tables.
pub const REPORT_LIMIT: usize = 10;

/// An agreement ends within this many days → expiry alert.
pub const EXPIRY_WINDOW_DAYS: i64 = 90;

/// A low-stock item, worst shortage first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockEntry {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub min_quantity: i64,
    /// `quantity - min_quantity`; ≤ 0 for every ranked entry.
    pub deficit: i64,
}

/// Aggregated withdrawals for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalEntry {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    /// Quantity × the item's current unit price (0 for unknown items).
    pub value: f64,
    pub transactions: usize,
}

/// Replenishment-priority entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderNeedEntry {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub max_quantity: i64,
    /// Headroom to the ceiling as a rounded percentage.
    pub need_percent: i64,
}

/// A purchase order still waiting to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrderEntry {
    pub order_id: OrderId,
    pub vendor: Option<String>,
    pub status: String,
    /// Whole days since the order was requested.
    pub days_open: i64,
}

/// An agreement at or past its expiry threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryAlert {
    pub agreement_id: AgreementId,
    pub name: String,
    pub category: String,
    /// Whole days until the end date; negative = already expired.
    pub days_remaining: i64,
}

/// Aggregated withdrawals for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerEntry {
    pub actor: ActorId,
    pub quantity: i64,
    pub value: f64,
    pub transactions: usize,
}

/// Items at or below their reorder threshold, most negative deficit first.
pub fn low_stock_ranking(items: &[StockItem], limit: usize) -> Vec<LowStockEntry> {
    tracing::debug!(items = items.len(), limit, "ranking low stock");

    let mut ranked: Vec<LowStockEntry> = items
        .iter()
        .filter(|i| i.is_low_stock())
        .map(|i| LowStockEntry {
            item_id: i.id.clone(),
            name: i.name.clone(),
            quantity: i.quantity,
            min_quantity: i.min_quantity,
            deficit: i.quantity - i.min_quantity,
        })
        .collect();

    ranked.sort_by_key(|e| e.deficit);
    ranked.truncate(limit);
    ranked
}

/// Most-withdrawn items in `now`'s calendar month (month *and* year must
/// match, unlike the trend buckets).
pub fn top_withdrawn_this_month(
    now: DateTime<Utc>,
    txs: &[StockTransaction],
    items: &[StockItem],
    limit: usize,
) -> Vec<WithdrawalEntry> {
    tracing::debug!(transactions = txs.len(), limit, "ranking current-month withdrawals");

    let mut ranked = withdrawal_totals(txs, items, |tx| {
        tx.occurred_at
            .is_some_and(|ts| same_calendar_month(ts, now))
    });
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(limit);
    ranked
}

/// Most-withdrawn items over the whole transaction history.
pub fn top_withdrawn_all_time(
    txs: &[StockTransaction],
    items: &[StockItem],
    limit: usize,
) -> Vec<WithdrawalEntry> {
    tracing::debug!(transactions = txs.len(), limit, "ranking all-time withdrawals");

    let mut ranked = withdrawal_totals(txs, items, |_| true);
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(limit);
    ranked
}

/// Items with headroom below their ceiling, ranked by how much of the
/// ceiling is unfilled. Only items above their reorder threshold and with a
/// configured ceiling participate.
pub fn order_need_ranking(items: &[StockItem], limit: usize) -> Vec<OrderNeedEntry> {
    tracing::debug!(items = items.len(), limit, "ranking order need");

    let mut ranked: Vec<OrderNeedEntry> = items
        .iter()
        .filter(|i| i.quantity > i.min_quantity && i.max_quantity > 0)
        .map(|i| {
            let headroom = (i.max_quantity - i.quantity) as f64 / i.max_quantity as f64;
            OrderNeedEntry {
                item_id: i.id.clone(),
                name: i.name.clone(),
                quantity: i.quantity,
                max_quantity: i.max_quantity,
                need_percent: (headroom * 100.0).round() as i64,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.need_percent.cmp(&a.need_percent));
    ranked.truncate(limit);
    ranked
}

/// Pending purchase orders, oldest request first. Orders without a request
/// timestamp have no age and are skipped.
pub fn pending_order_ranking(
    now: DateTime<Utc>,
    orders: &[PurchaseOrder],
    limit: usize,
) -> Vec<PendingOrderEntry> {
    tracing::debug!(orders = orders.len(), limit, "ranking pending orders");

    let mut ranked: Vec<PendingOrderEntry> = orders
        .iter()
        .filter(|o| o.is_pending())
        .filter_map(|o| {
            let requested_at = o.requested_at?;
            Some(PendingOrderEntry {
                order_id: o.id.clone(),
                vendor: o.vendor.clone(),
                status: o.status.clone(),
                days_open: whole_days_since(now, requested_at),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.days_open.cmp(&a.days_open));
    ranked.truncate(limit);
    ranked
}

/// Agreements ending within [`EXPIRY_WINDOW_DAYS`], most urgent first.
/// Negative `days_remaining` means already expired; those rank ahead of
/// everything still running.
pub fn expiry_alerts(
    now: DateTime<Utc>,
    agreements: &[MaintenanceAgreement],
    limit: usize,
) -> Vec<ExpiryAlert> {
    tracing::debug!(agreements = agreements.len(), limit, "ranking expiry alerts");

    let mut ranked: Vec<ExpiryAlert> = agreements
        .iter()
        .filter(|a| !a.is_cancelled())
        .filter_map(|a| {
            let ends_at = a.ends_at?;
            let days_remaining = whole_days_until(now, ends_at);
            (days_remaining <= EXPIRY_WINDOW_DAYS).then(|| ExpiryAlert {
                agreement_id: a.id.clone(),
                name: a.name.clone(),
                category: a.category.clone(),
                days_remaining,
            })
        })
        .collect();

    ranked.sort_by_key(|a| a.days_remaining);
    ranked.truncate(limit);
    ranked
}

/// Users ranked by the value of what they withdrew, all-time. Rows without
/// an acting user have no grouping key and are skipped.
pub fn top_consumers(
    txs: &[StockTransaction],
    items: &[StockItem],
    limit: usize,
) -> Vec<ConsumerEntry> {
    tracing::debug!(transactions = txs.len(), limit, "ranking consumers");

    let catalog: HashMap<&ItemId, &StockItem> = items.iter().map(|i| (&i.id, i)).collect();

    let mut index: HashMap<&ActorId, usize> = HashMap::new();
    let mut entries: Vec<ConsumerEntry> = Vec::new();

    for tx in txs {
        if tx.direction() != Direction::Outbound || tx.is_cancelled() {
            continue;
        }
        let Some(actor) = tx.performed_by.as_ref() else {
            continue;
        };

        let slot = *index.entry(actor).or_insert_with(|| {
            entries.push(ConsumerEntry {
                actor: actor.clone(),
                quantity: 0,
                value: 0.0,
                transactions: 0,
            });
            entries.len() - 1
        });

        let qty = tx.unsigned_quantity();
        let price = catalog.get(&tx.item_id).map_or(0.0, |i| i.unit_price);
        let entry = &mut entries[slot];
        entry.quantity += qty;
        entry.value += qty as f64 * price;
        entry.transactions += 1;
    }

    entries.sort_by(|a, b| b.value.total_cmp(&a.value));
    entries.truncate(limit);
    entries
}

/// Sum non-cancelled OUT rows per item in first-occurrence order. Unknown
/// items keep their id as the display name and are priced at 0.
fn withdrawal_totals(
    txs: &[StockTransaction],
    items: &[StockItem],
    mut keep: impl FnMut(&StockTransaction) -> bool,
) -> Vec<WithdrawalEntry> {
    let catalog: HashMap<&ItemId, &StockItem> = items.iter().map(|i| (&i.id, i)).collect();

    let mut index: HashMap<&ItemId, usize> = HashMap::new();
    let mut entries: Vec<WithdrawalEntry> = Vec::new();

    for tx in txs {
        if tx.direction() != Direction::Outbound || tx.is_cancelled() || !keep(tx) {
            continue;
        }

        let slot = *index.entry(&tx.item_id).or_insert_with(|| {
            let name = catalog
                .get(&tx.item_id)
                .map_or_else(|| tx.item_id.to_string(), |i| i.name.clone());
            entries.push(WithdrawalEntry {
                item_id: tx.item_id.clone(),
                name,
                quantity: 0,
                value: 0.0,
                transactions: 0,
            });
            entries.len() - 1
        });

        let qty = tx.unsigned_quantity();
        let price = catalog.get(&tx.item_id).map_or(0.0, |i| i.unit_price);
        let entry = &mut entries[slot];
        entry.quantity += qty;
        entry.value += qty as f64 * price;
        entry.transactions += 1;
    }

    entries
}
