//! Inventory summary: headline totals for the dashboard.

use serde::{Deserialize, Serialize};

use assetflow_inventory::StockItem;

/// Headline inventory totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub item_count: usize,
    /// Sum of current quantities.
    pub total_quantity: i64,
    /// Sum of quantity × unit price; items without a price contribute 0.
    pub total_value: f64,
    /// Items at or below their reorder threshold.
    pub low_stock_count: usize,
}

/// Summarize the stock-item collection. Empty input yields all zeroes.
pub fn summarize(items: &[StockItem]) -> InventorySummary {
    tracing::debug!(items = items.len(), "summarizing inventory");

    InventorySummary {
        item_count: items.len(),
        total_quantity: items.iter().map(|i| i.quantity).sum(),
        total_value: items.iter().map(StockItem::stock_value).sum(),
        low_stock_count: items.iter().filter(|i| i.is_low_stock()).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetflow_core::ItemId;
    use proptest::prelude::*;

    fn make_item(id: &str, quantity: i64, min: i64, price: f64) -> StockItem {
        StockItem {
            id: ItemId::from(id),
            name: id.to_string(),
            category: String::new(),
            quantity,
            min_quantity: min,
            max_quantity: 0,
            unit_price: price,
            location: None,
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(
            summary,
            InventorySummary {
                item_count: 0,
                total_quantity: 0,
                total_value: 0.0,
                low_stock_count: 0,
            }
        );
    }

    #[test]
    fn totals_match_hand_computed_values() {
        let items = vec![
            make_item("A", 2, 5, 100.0),
            make_item("B", 15, 5, 50.0),
        ];

        let summary = summarize(&items);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 17);
        assert_eq!(summary.total_value, 950.0);
        assert_eq!(summary.low_stock_count, 1);
    }

    #[test]
    fn missing_price_counts_as_zero_value() {
        let items = vec![make_item("A", 10, 0, 0.0)];
        assert_eq!(summarize(&items).total_value, 0.0);
    }

    proptest! {
        #[test]
        fn total_value_is_sum_of_item_values(
            rows in prop::collection::vec((0i64..1_000, 0i64..50, 0.0f64..10_000.0), 0..40)
        ) {
            let items: Vec<StockItem> = rows
                .iter()
                .enumerate()
                .map(|(i, &(qty, min, price))| make_item(&format!("I{i}"), qty, min, price))
                .collect();

            let summary = summarize(&items);

            let expected: f64 = items.iter().map(|i| i.quantity as f64 * i.unit_price).sum();
            prop_assert_eq!(summary.total_value, expected);
            prop_assert!(summary.total_value >= 0.0);

            let low = items.iter().filter(|i| i.quantity <= i.min_quantity).count();
            prop_assert_eq!(summary.low_stock_count, low);
        }
    }
}
