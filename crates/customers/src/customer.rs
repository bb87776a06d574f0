use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mealdash_core::CustomerId;

/// Contact information for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Read-only customer snapshot.
///
/// `order_count` and `total_spent` are cumulative figures maintained
/// upstream; the engine sums them, it does not derive them from orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(deserialize_with = "mealdash_core::timestamp::deserialize_instant")]
    pub created_at: DateTime<Utc>,
    pub order_count: u64,
    /// Cumulative spend in smallest currency unit.
    pub total_spent: u64,
    /// Instant of the most recent order; `None` when the customer has never
    /// ordered.
    #[serde(default, deserialize_with = "mealdash_core::timestamp::deserialize_instant_opt")]
    pub last_order_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_a_full_document() {
        let customer: CustomerRecord = serde_json::from_value(serde_json::json!({
            "id": "018f4e8a-0000-7000-8000-0000000000aa",
            "name": "Dana R.",
            "contact": { "email": "dana@example.com", "phone": null, "address": null },
            "created_at": "2023-11-02T09:00:00Z",
            "order_count": 14,
            "total_spent": 31250,
            "last_order_at": "2024-05-09"
        }))
        .unwrap();

        assert_eq!(customer.order_count, 14);
        assert_eq!(
            customer.last_order_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 9, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn never_ordered_customer_has_no_last_order() {
        let customer: CustomerRecord = serde_json::from_value(serde_json::json!({
            "id": "018f4e8a-0000-7000-8000-0000000000ab",
            "name": "New Signup",
            "created_at": "2024-05-01T12:00:00Z",
            "order_count": 0,
            "total_spent": 0
        }))
        .unwrap();

        assert_eq!(customer.last_order_at, None);
        assert_eq!(customer.contact, ContactInfo::default());
    }
}
