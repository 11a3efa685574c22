//! Inventory analytics aggregation engine.
//!
//! Pure, deterministic functions that turn the four raw record collections
//! (stock items, stock transactions, purchase orders, maintenance
//! agreements) into the derived views the dashboards and reports consume:
//! totals, six-month trends, top-N rankings, expiry alerts, dead-stock
//! detection, and categorical breakdowns.
//!
//! Design rules, applied uniformly:
//!
//! - **No IO, no clock.** Every time-dependent function takes `now` as an
//!   explicit parameter. Results are a function of the inputs alone, so any
//!   caching or refresh policy belongs to the caller.
//! - **Full recompute.** Each call reads the collections from scratch; there
//!   is no incremental state between calls.
//! - **Defensive defaulting.** Malformed fields never abort a computation;
//!   missing prices count as zero and unparsable timestamps match no month
//!   bucket or activity window.
//! - **Stable rankings.** Top-N outputs use stable sorts, so ties keep their
//!   input order and repeated runs produce identical output.

pub mod breakdown;
pub mod dead_stock;
pub mod ranking;
pub mod summary;
pub mod trend;

pub use breakdown::{
    CategoryCount, CategoryValue, ItemValue, count_by_category, outbound_value_by_category,
    value_by_category,
};
pub use dead_stock::{DeadStockEntry, DeadStockReport, dead_stock_report};
pub use ranking::{
    ConsumerEntry, ExpiryAlert, LowStockEntry, OrderNeedEntry, PendingOrderEntry,
    WithdrawalEntry, expiry_alerts, low_stock_ranking, order_need_ranking,
    pending_order_ranking, top_consumers, top_withdrawn_all_time, top_withdrawn_this_month,
};
pub use summary::{InventorySummary, summarize};
pub use trend::{MovementBucket, ValueBucket, movement_trend, value_trend};
