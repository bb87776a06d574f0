//! Record retrieval boundary.

use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Supplies raw documents per collection for one report generation call.
///
/// Implementations return the full relevant set; the engine imposes no
/// pagination contract. In production this fronts the document store client;
/// tests and dev use [`InMemoryRecordSource`].
pub trait RecordSource: Send + Sync {
    fn orders(&self) -> Result<Vec<JsonValue>>;
    fn customers(&self) -> Result<Vec<JsonValue>>;
    fn inventory_items(&self) -> Result<Vec<JsonValue>>;
}

impl<S> RecordSource for Arc<S>
where
    S: RecordSource + ?Sized,
{
    fn orders(&self) -> Result<Vec<JsonValue>> {
        (**self).orders()
    }

    fn customers(&self) -> Result<Vec<JsonValue>> {
        (**self).customers()
    }

    fn inventory_items(&self) -> Result<Vec<JsonValue>> {
        (**self).inventory_items()
    }
}

/// In-memory record source for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    orders: RwLock<Vec<JsonValue>>,
    customers: RwLock<Vec<JsonValue>>,
    inventory: RwLock<Vec<JsonValue>>,
}

impl InMemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_order(&self, doc: JsonValue) {
        if let Ok(mut docs) = self.orders.write() {
            docs.push(doc);
        }
    }

    pub fn insert_customer(&self, doc: JsonValue) {
        if let Ok(mut docs) = self.customers.write() {
            docs.push(doc);
        }
    }

    pub fn insert_inventory_item(&self, doc: JsonValue) {
        if let Ok(mut docs) = self.inventory.write() {
            docs.push(doc);
        }
    }
}

impl RecordSource for InMemoryRecordSource {
    fn orders(&self) -> Result<Vec<JsonValue>> {
        read_all(&self.orders, "orders")
    }

    fn customers(&self) -> Result<Vec<JsonValue>> {
        read_all(&self.customers, "customers")
    }

    fn inventory_items(&self) -> Result<Vec<JsonValue>> {
        read_all(&self.inventory, "inventory")
    }
}

fn read_all(lock: &RwLock<Vec<JsonValue>>, collection: &str) -> Result<Vec<JsonValue>> {
    lock.read()
        .map(|docs| docs.clone())
        .map_err(|_| anyhow!("{collection} store lock poisoned"))
}

/// Decode raw documents into typed records.
///
/// A document that fails to decode (including one whose timestamp cannot be
/// normalized) is skipped with a warning. A malformed record must not abort
/// the report, and a malformed date must never be guessed into a day bucket.
pub fn decode_records<T: DeserializeOwned>(docs: Vec<JsonValue>, collection: &str) -> Vec<T> {
    let mut records = Vec::with_capacity(docs.len());
    for doc in docs {
        match serde_json::from_value(doc) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!(collection, error = %err, "skipping malformed record");
            }
        }
    }
    records
}
