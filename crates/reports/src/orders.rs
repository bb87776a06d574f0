//! Orders report aggregation.

use serde::Serialize;

use mealdash_orders::{OrderRecord, OrderStatus};

use crate::window::DateWindow;

/// Order counts across the fixed status enumeration.
///
/// The field set *is* the output schema: a status outside the enumeration is
/// counted nowhere rather than opening a new bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: u64,
    pub processing: u64,
    pub completed: u64,
    pub delivered: u64,
    pub cancelled: u64,
}

impl StatusCounts {
    fn record(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Processing => self.processing += 1,
            OrderStatus::Completed => self.completed += 1,
            OrderStatus::Delivered => self.delivered += 1,
            OrderStatus::Cancelled => self.cancelled += 1,
            OrderStatus::Unknown => {}
        }
    }

    /// Sum over the five fixed buckets.
    pub fn total(&self) -> u64 {
        self.pending + self.processing + self.completed + self.delivered + self.cancelled
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrdersReport {
    /// Caller-facing detail rows, every status included.
    pub orders: Vec<OrderRecord>,
    pub status_counts: StatusCounts,
    pub total_orders: u64,
}

pub fn aggregate(orders: Vec<OrderRecord>, window: DateWindow) -> OrdersReport {
    let filtered: Vec<OrderRecord> = orders
        .into_iter()
        .filter(|o| window.contains(o.created_at))
        .collect();

    let mut status_counts = StatusCounts::default();
    for order in &filtered {
        status_counts.record(order.status);
    }

    let total_orders = filtered.len() as u64;

    OrdersReport {
        orders: filtered,
        status_counts,
        total_orders,
    }
}
