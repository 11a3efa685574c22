//! Categorical breakdowns for chart series.
//!
//! Groupings are keyed by the item's category code. Output is sorted by
//! category (and item name within a category) so chart series are stable
//! across refreshes regardless of map iteration order. Categories with no
//! matching records simply do not appear.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use assetflow_core::ItemId;
use assetflow_inventory::{Direction, StockItem, StockTransaction};

/// Item count per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// One item's contribution inside a category (stacked-series segment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemValue {
    pub name: String,
    pub value: f64,
}

/// Summed value per category with the per-item second level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub category: String,
    pub total: f64,
    pub items: Vec<ItemValue>,
}

/// Count items per category, sorted by category key.
pub fn count_by_category(items: &[StockItem]) -> Vec<CategoryCount> {
    tracing::debug!(items = items.len(), "counting items per category");

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.category.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

/// Stock value (quantity × unit price) per category, with a per-item-name
/// second level for stacked series.
pub fn value_by_category(items: &[StockItem]) -> Vec<CategoryValue> {
    tracing::debug!(items = items.len(), "summing stock value per category");

    let mut grouped: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
    for item in items {
        *grouped
            .entry(item.category.as_str())
            .or_default()
            .entry(item.name.as_str())
            .or_default() += item.stock_value();
    }

    collect_category_values(grouped)
}

/// All-time outbound consumption value per category. Reversal rows and rows
/// whose item id has no matching stock item are skipped (there is no
/// category or price to attribute them to).
pub fn outbound_value_by_category(
    txs: &[StockTransaction],
    items: &[StockItem],
) -> Vec<CategoryValue> {
    tracing::debug!(
        transactions = txs.len(),
        items = items.len(),
        "summing outbound value per category"
    );

    let catalog: HashMap<&ItemId, &StockItem> = items.iter().map(|i| (&i.id, i)).collect();

    let mut grouped: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
    for tx in txs {
        if tx.direction() != Direction::Outbound || tx.is_cancelled() {
            continue;
        }
        let Some(item) = catalog.get(&tx.item_id) else {
            continue;
        };

        *grouped
            .entry(item.category.as_str())
            .or_default()
            .entry(item.name.as_str())
            .or_default() += tx.unsigned_quantity() as f64 * item.unit_price;
    }

    collect_category_values(grouped)
}

fn collect_category_values(grouped: BTreeMap<&str, BTreeMap<&str, f64>>) -> Vec<CategoryValue> {
    grouped
        .into_iter()
        .map(|(category, by_name)| {
            let items: Vec<ItemValue> = by_name
                .into_iter()
                .map(|(name, value)| ItemValue {
                    name: name.to_string(),
                    value,
                })
                .collect();
            CategoryValue {
                category: category.to_string(),
                total: items.iter().map(|i| i.value).sum(),
                items,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetflow_core::TransactionId;
    use chrono::{TimeZone, Utc};

    fn make_item(id: &str, name: &str, category: &str, qty: i64, price: f64) -> StockItem {
        StockItem {
            id: ItemId::from(id),
            name: name.to_string(),
            category: category.to_string(),
            quantity: qty,
            min_quantity: 0,
            max_quantity: 0,
            unit_price: price,
            location: None,
        }
    }

    fn make_out_tx(id: &str, item: &str, qty: i64, note: Option<&str>) -> StockTransaction {
        StockTransaction {
            id: TransactionId::from(id),
            item_id: ItemId::from(item),
            direction: "OUT".to_string(),
            quantity: qty,
            occurred_at: Some(Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()),
            note: note.map(str::to_string),
            performed_by: None,
            budget_ref: None,
        }
    }

    #[test]
    fn counts_group_and_sort_by_category() {
        let items = vec![
            make_item("1", "T14", "laptop", 1, 0.0),
            make_item("2", "Dock", "accessory", 1, 0.0),
            make_item("3", "X1", "laptop", 1, 0.0),
        ];

        let counts = count_by_category(&items);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].category, "accessory");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].category, "laptop");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn values_carry_a_per_item_second_level() {
        let items = vec![
            make_item("1", "T14", "laptop", 2, 100.0),
            make_item("2", "X1", "laptop", 1, 300.0),
            make_item("3", "Dock", "accessory", 4, 25.0),
        ];

        let values = value_by_category(&items);
        assert_eq!(values.len(), 2);

        let laptops = &values[1];
        assert_eq!(laptops.category, "laptop");
        assert_eq!(laptops.total, 500.0);
        assert_eq!(laptops.items.len(), 2);
        assert_eq!(laptops.items[0].name, "T14");
        assert_eq!(laptops.items[0].value, 200.0);

        assert_eq!(values[0].total, 100.0);
    }

    #[test]
    fn empty_input_yields_no_categories() {
        assert!(count_by_category(&[]).is_empty());
        assert!(value_by_category(&[]).is_empty());
        assert!(outbound_value_by_category(&[], &[]).is_empty());
    }

    #[test]
    fn outbound_values_skip_reversals_and_unknown_items() {
        let items = vec![make_item("1", "T14", "laptop", 0, 100.0)];
        let txs = vec![
            make_out_tx("t1", "1", 2, None),
            make_out_tx("t2", "1", 5, Some("ยกเลิก Invoice #2")),
            make_out_tx("t3", "ghost", 5, None),
        ];

        let values = outbound_value_by_category(&txs, &items);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].category, "laptop");
        assert_eq!(values[0].total, 200.0);
    }

    #[test]
    fn uncategorized_items_group_under_empty_key() {
        let items = vec![make_item("1", "Misc", "", 1, 10.0)];
        let counts = count_by_category(&items);
        assert_eq!(counts[0].category, "");
    }
}
