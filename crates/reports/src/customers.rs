//! Customers report aggregation.

use serde::Serialize;

use mealdash_customers::CustomerRecord;

use crate::window::DateWindow;

/// Summary totals over the qualifying customer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomersSummary {
    pub customer_count: u64,
    /// Sum of cumulative spend, smallest currency unit.
    pub total_spent: u64,
    pub total_orders: u64,
    /// `total_spent / customer_count`; exactly 0 when no customer qualifies.
    pub average_spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomersReport {
    pub customers: Vec<CustomerRecord>,
    pub summary: CustomersSummary,
}

/// Customers qualify on their most recent order instant, not on account
/// creation; a customer who has never ordered is never selected.
pub fn aggregate(customers: Vec<CustomerRecord>, window: DateWindow) -> CustomersReport {
    let filtered: Vec<CustomerRecord> = customers
        .into_iter()
        .filter(|c| c.last_order_at.is_some_and(|at| window.contains(at)))
        .collect();

    let customer_count = filtered.len() as u64;
    let total_spent: u64 = filtered.iter().map(|c| c.total_spent).sum();
    let total_orders: u64 = filtered.iter().map(|c| c.order_count).sum();
    let average_spend = if customer_count == 0 {
        0.0
    } else {
        total_spent as f64 / customer_count as f64
    };

    CustomersReport {
        customers: filtered,
        summary: CustomersSummary {
            customer_count,
            total_spent,
            total_orders,
            average_spend,
        },
    }
}
