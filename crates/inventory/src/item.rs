use serde::{Deserialize, Serialize};

use mealdash_core::ItemId;

/// Stock status computed upstream from quantity vs. reorder point.
///
/// The engine reads this verbatim; it never recomputes it from `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

/// Read-only inventory item snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemRecord {
    pub id: ItemId,
    pub name: String,
    /// Free-form category string (e.g., "Meat", "Dairy").
    pub category: String,
    pub quantity: u32,
    /// Unit of measure (e.g., "kg", "pcs").
    pub unit: String,
    pub status: StockStatus,
    /// Cost per unit in smallest currency unit.
    pub cost_per_unit: u64,
    /// `quantity * cost_per_unit`, produced upstream.
    pub total_cost: u64,
}
