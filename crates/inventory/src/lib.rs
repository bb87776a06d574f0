//! Inventory item records as read from the `inventory` collection.

pub mod item;

pub use item::{InventoryItemRecord, StockStatus};
