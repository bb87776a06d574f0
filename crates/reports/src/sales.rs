//! Sales report aggregation.
//!
//! Operates on the windowed, non-cancelled order set. Category and top-item
//! dimensions are derived from the orders' own line items; the payment
//! breakdown from the order-level payment method.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use mealdash_orders::{OrderRecord, OrderStatus};

use crate::group::Grouped;
use crate::window::DateWindow;

/// Maximum number of rows in the top-sellers table.
pub const TOP_ITEMS_LIMIT: usize = 10;

/// Summary totals over the filtered order set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    /// Revenue in smallest currency unit.
    pub total_revenue: u64,
    pub total_orders: u64,
    /// `total_revenue / total_orders`; exactly 0 when there are no orders.
    pub average_order_value: f64,
}

/// One calendar day of the daily series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub revenue: u64,
    pub orders: u64,
}

/// Revenue and quantity summed per line-item category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    pub category: String,
    pub revenue: u64,
    pub quantity: u64,
}

/// Quantity and revenue summed per item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSales {
    pub name: String,
    pub quantity: u64,
    pub revenue: u64,
}

/// Revenue and order count per payment method, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethodSales {
    pub method: String,
    pub revenue: u64,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub summary: SalesSummary,
    /// Ascending by calendar day.
    pub daily_sales: Vec<DailySales>,
    /// Descending by revenue; ties keep first-appearance order.
    pub category_breakdown: Vec<CategorySales>,
    /// Descending by quantity, at most [`TOP_ITEMS_LIMIT`] rows; ties keep
    /// first-appearance order.
    pub top_items: Vec<ItemSales>,
    pub payment_methods: Vec<PaymentMethodSales>,
}

pub fn aggregate(orders: &[OrderRecord], window: DateWindow) -> SalesReport {
    let filtered: Vec<&OrderRecord> = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled && window.contains(o.created_at))
        .collect();

    let total_revenue: u64 = filtered.iter().map(|o| o.total).sum();
    let total_orders = filtered.len() as u64;
    let average_order_value = if total_orders == 0 {
        0.0
    } else {
        total_revenue as f64 / total_orders as f64
    };

    // BTreeMap keys iterate in ascending date order, which for rendered
    // YYYY-MM-DD strings is also lexicographic order.
    let mut daily: BTreeMap<NaiveDate, DailySales> = BTreeMap::new();

    let mut categories: Grouped<CategorySales> = Grouped::new();
    let mut items: Grouped<ItemSales> = Grouped::new();
    let mut payments: Grouped<PaymentMethodSales> = Grouped::new();

    for order in &filtered {
        let date = order.created_at.date_naive();
        let day = daily.entry(date).or_insert(DailySales {
            date,
            revenue: 0,
            orders: 0,
        });
        day.revenue += order.total;
        day.orders += 1;

        for line in &order.lines {
            let row = categories.entry(&line.category, || CategorySales {
                category: line.category.clone(),
                revenue: 0,
                quantity: 0,
            });
            row.revenue += line.revenue();
            row.quantity += u64::from(line.quantity);

            let row = items.entry(&line.name, || ItemSales {
                name: line.name.clone(),
                quantity: 0,
                revenue: 0,
            });
            row.quantity += u64::from(line.quantity);
            row.revenue += line.revenue();
        }

        let row = payments.entry(&order.payment_method, || PaymentMethodSales {
            method: order.payment_method.clone(),
            revenue: 0,
            orders: 0,
        });
        row.revenue += order.total;
        row.orders += 1;
    }

    // Stable sorts: equal keys stay in first-appearance order.
    let mut category_breakdown = categories.into_rows();
    category_breakdown.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    let mut top_items = items.into_rows();
    top_items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top_items.truncate(TOP_ITEMS_LIMIT);

    SalesReport {
        summary: SalesSummary {
            total_revenue,
            total_orders,
            average_order_value,
        },
        daily_sales: daily.into_values().collect(),
        category_breakdown,
        top_items,
        payment_methods: payments.into_rows(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use mealdash_core::OrderId;
    use mealdash_orders::OrderLine;

    fn window(start: &str, end: &str) -> DateWindow {
        DateWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    fn order(total: u64, status: OrderStatus, created_at: &str) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(),
            order_number: 1,
            status,
            total,
            item_count: 1,
            customer_name: "Avery".to_string(),
            created_at: created_at.parse::<DateTime<Utc>>().unwrap(),
            payment_method: "card".to_string(),
            payment_status: "paid".to_string(),
            lines: Vec::new(),
        }
    }

    fn line(name: &str, category: &str, quantity: u32, unit_price: u64) -> OrderLine {
        OrderLine {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn cancelled_orders_are_excluded() {
        let orders = vec![
            order(100, OrderStatus::Completed, "2024-05-01T10:00:00Z"),
            order(50, OrderStatus::Cancelled, "2024-05-02T10:00:00Z"),
        ];

        let report = aggregate(&orders, window("2024-05-01T00:00:00Z", "2024-05-02T00:00:00Z"));

        assert_eq!(report.summary.total_revenue, 100);
        assert_eq!(report.summary.total_orders, 1);
        assert_eq!(
            report.daily_sales,
            vec![DailySales {
                date: "2024-05-01".parse().unwrap(),
                revenue: 100,
                orders: 1,
            }]
        );
    }

    #[test]
    fn empty_window_yields_zeroed_summary() {
        let orders = vec![order(100, OrderStatus::Completed, "2024-06-01T10:00:00Z")];

        let report = aggregate(&orders, window("2024-05-01T00:00:00Z", "2024-05-02T00:00:00Z"));

        assert_eq!(report.summary.total_revenue, 0);
        assert_eq!(report.summary.total_orders, 0);
        assert_eq!(report.summary.average_order_value, 0.0);
        assert!(report.daily_sales.is_empty());
        assert!(report.category_breakdown.is_empty());
        assert!(report.top_items.is_empty());
    }

    #[test]
    fn daily_series_is_ascending_and_reconciles_with_summary() {
        let orders = vec![
            order(300, OrderStatus::Completed, "2024-05-03T21:00:00Z"),
            order(100, OrderStatus::Delivered, "2024-05-01T09:00:00Z"),
            order(200, OrderStatus::Completed, "2024-05-03T11:00:00Z"),
            order(400, OrderStatus::Pending, "2024-05-02T12:00:00Z"),
        ];

        let report = aggregate(&orders, window("2024-05-01T00:00:00Z", "2024-05-03T00:00:00Z"));

        let dates: Vec<String> = report
            .daily_sales
            .iter()
            .map(|d| d.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);

        let daily_revenue: u64 = report.daily_sales.iter().map(|d| d.revenue).sum();
        let daily_orders: u64 = report.daily_sales.iter().map(|d| d.orders).sum();
        assert_eq!(daily_revenue, report.summary.total_revenue);
        assert_eq!(daily_orders, report.summary.total_orders);
    }

    #[test]
    fn average_order_value_is_revenue_over_orders() {
        let orders = vec![
            order(100, OrderStatus::Completed, "2024-05-01T10:00:00Z"),
            order(50, OrderStatus::Completed, "2024-05-01T11:00:00Z"),
        ];

        let report = aggregate(&orders, window("2024-05-01T00:00:00Z", "2024-05-01T00:00:00Z"));

        assert_eq!(report.summary.average_order_value, 75.0);
    }

    #[test]
    fn categories_sort_by_revenue_with_stable_ties() {
        let mut first = order(0, OrderStatus::Completed, "2024-05-01T10:00:00Z");
        first.lines = vec![
            line("Lemonade", "Drinks", 1, 100),
            line("Margherita", "Pizza", 1, 900),
            line("Baklava", "Dessert", 1, 100),
        ];

        let report = aggregate(
            &[first],
            window("2024-05-01T00:00:00Z", "2024-05-01T00:00:00Z"),
        );

        let categories: Vec<&str> = report
            .category_breakdown
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        // Drinks and Dessert tie at 100; Drinks appeared first.
        assert_eq!(categories, vec!["Pizza", "Drinks", "Dessert"]);
    }

    #[test]
    fn top_items_rank_by_quantity_and_truncate_to_ten() {
        let mut big = order(0, OrderStatus::Completed, "2024-05-01T10:00:00Z");
        big.lines = (0..12)
            .map(|i| line(&format!("Item {i}"), "Misc", 12 - i, 100))
            .collect();

        let report = aggregate(
            &[big],
            window("2024-05-01T00:00:00Z", "2024-05-01T00:00:00Z"),
        );

        assert_eq!(report.top_items.len(), TOP_ITEMS_LIMIT);
        assert!(
            report
                .top_items
                .windows(2)
                .all(|pair| pair[0].quantity >= pair[1].quantity)
        );
        assert_eq!(report.top_items[0].name, "Item 0");
    }

    #[test]
    fn fewer_than_ten_items_are_never_padded() {
        let mut one = order(0, OrderStatus::Completed, "2024-05-01T10:00:00Z");
        one.lines = vec![line("Margherita", "Pizza", 2, 900)];

        let report = aggregate(
            &[one],
            window("2024-05-01T00:00:00Z", "2024-05-01T00:00:00Z"),
        );

        assert_eq!(report.top_items.len(), 1);
        assert_eq!(report.top_items[0].quantity, 2);
        assert_eq!(report.top_items[0].revenue, 1800);
    }

    #[test]
    fn payment_methods_keep_first_appearance_order() {
        let mut card = order(100, OrderStatus::Completed, "2024-05-01T10:00:00Z");
        card.payment_method = "card".to_string();
        let mut cash = order(60, OrderStatus::Completed, "2024-05-01T11:00:00Z");
        cash.payment_method = "cash".to_string();
        let mut card_again = order(40, OrderStatus::Completed, "2024-05-01T12:00:00Z");
        card_again.payment_method = "card".to_string();

        let report = aggregate(
            &[card, cash, card_again],
            window("2024-05-01T00:00:00Z", "2024-05-01T00:00:00Z"),
        );

        assert_eq!(report.payment_methods.len(), 2);
        assert_eq!(report.payment_methods[0].method, "card");
        assert_eq!(report.payment_methods[0].revenue, 140);
        assert_eq!(report.payment_methods[0].orders, 2);
        assert_eq!(report.payment_methods[1].method, "cash");
    }
}
