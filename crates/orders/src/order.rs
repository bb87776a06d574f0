use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mealdash_core::OrderId;

/// Order lifecycle status.
///
/// Upstream documents occasionally carry statuses outside this set; those
/// decode as `Unknown` so the record still reaches detail rows, but they are
/// counted in no per-status bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Order line: item name, category, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
}

impl OrderLine {
    /// Line revenue in smallest currency unit.
    pub fn revenue(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

/// Read-only order snapshot.
///
/// The engine never mutates these; one report generation call owns its own
/// decoded set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub order_number: u64,
    pub status: OrderStatus,
    /// Total in smallest currency unit (e.g., cents).
    pub total: u64,
    pub item_count: u32,
    pub customer_name: String,
    #[serde(deserialize_with = "mealdash_core::timestamp::deserialize_instant")]
    pub created_at: DateTime<Utc>,
    pub payment_method: String,
    pub payment_status: String,
    /// Line items; empty for legacy documents that never stored them.
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}
