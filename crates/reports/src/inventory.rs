//! Inventory report aggregation.
//!
//! Point-in-time: operates on the full current snapshot and ignores any
//! date window.

use serde::Serialize;

use mealdash_inventory::{InventoryItemRecord, StockStatus};

use crate::group::Grouped;

/// Summary totals over the whole snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_items: u64,
    /// Sum of upstream `total_cost`, smallest currency unit.
    pub total_value: u64,
    pub low_stock_count: u64,
    pub out_of_stock_count: u64,
}

/// Item count and value per category, in first-appearance order.
///
/// Unsorted on purpose; the revenue-ranked table lives in the sales report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInventory {
    pub category: String,
    pub items: u64,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    pub summary: InventorySummary,
    pub category_breakdown: Vec<CategoryInventory>,
    pub items: Vec<InventoryItemRecord>,
}

pub fn aggregate(items: Vec<InventoryItemRecord>) -> InventoryReport {
    let mut summary = InventorySummary {
        total_items: items.len() as u64,
        ..InventorySummary::default()
    };

    let mut categories: Grouped<CategoryInventory> = Grouped::new();

    for item in &items {
        summary.total_value += item.total_cost;
        match item.status {
            StockStatus::LowStock => summary.low_stock_count += 1,
            StockStatus::OutOfStock => summary.out_of_stock_count += 1,
            StockStatus::InStock => {}
        }

        let row = categories.entry(&item.category, || CategoryInventory {
            category: item.category.clone(),
            items: 0,
            value: 0,
        });
        row.items += 1;
        row.value += item.total_cost;
    }

    InventoryReport {
        summary,
        category_breakdown: categories.into_rows(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealdash_core::ItemId;

    fn item(name: &str, category: &str, status: StockStatus, total_cost: u64) -> InventoryItemRecord {
        InventoryItemRecord {
            id: ItemId::new(),
            name: name.to_string(),
            category: category.to_string(),
            quantity: 10,
            unit: "kg".to_string(),
            status,
            cost_per_unit: 1,
            total_cost,
        }
    }

    #[test]
    fn summarizes_value_and_stock_alerts() {
        let items = vec![
            item("Chicken Breast", "Meat", StockStatus::InStock, 1125),
            item("Milk", "Dairy", StockStatus::OutOfStock, 0),
            item("Butter", "Dairy", StockStatus::LowStock, 300),
        ];

        let report = aggregate(items);

        assert_eq!(report.summary.total_items, 3);
        assert_eq!(report.summary.total_value, 1425);
        assert_eq!(report.summary.low_stock_count, 1);
        assert_eq!(report.summary.out_of_stock_count, 1);
        assert_eq!(report.items.len(), 3);
    }

    #[test]
    fn category_breakdown_preserves_first_appearance_order() {
        let items = vec![
            item("Chicken Breast", "Meat", StockStatus::InStock, 1125),
            item("Milk", "Dairy", StockStatus::OutOfStock, 0),
        ];

        let report = aggregate(items);

        let categories: Vec<&str> = report
            .category_breakdown
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Meat", "Dairy"]);
        assert_eq!(report.category_breakdown[0].value, 1125);
        assert_eq!(report.category_breakdown[1].items, 1);
    }

    #[test]
    fn empty_snapshot_is_a_valid_report() {
        let report = aggregate(Vec::new());

        assert_eq!(report.summary, InventorySummary::default());
        assert!(report.category_breakdown.is_empty());
        assert!(report.items.is_empty());
    }
}
