//! Report envelope and kind-dispatched generation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::customers::{self, CustomersReport};
use crate::inventory::{self, InventoryReport};
use crate::orders::{self, OrdersReport};
use crate::request::{ReportKind, ReportPlan, ReportRequest};
use crate::sales::{self, SalesReport};
use crate::source::{self, RecordSource};

#[derive(Debug, Error)]
pub enum ReportError {
    /// A required request field was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The requested report kind is not one of the supported four.
    #[error("unsupported report type: {0}")]
    UnsupportedKind(String),

    /// A request date was present but unparseable.
    #[error("invalid {field}: {value}")]
    InvalidDate {
        field: &'static str,
        value: String,
    },

    /// The record source failed to deliver a collection.
    #[error("record source failure: {0}")]
    Source(#[from] anyhow::Error),
}

impl ReportError {
    /// Request errors are the caller's fault and are never retried.
    pub fn is_request_error(&self) -> bool {
        !matches!(self, ReportError::Source(_))
    }
}

/// Kind-specific report payload.
///
/// Closed set: adding a kind forces every dispatch site through the compiler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportData {
    Sales(SalesReport),
    Orders(OrdersReport),
    Customers(CustomersReport),
    Inventory(InventoryReport),
}

/// Generated report envelope returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kind: ReportKind,
    pub title: &'static str,
    /// Requested window, absent for the point-in-time inventory report.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub generated_at: DateTime<Utc>,
    pub data: ReportData,
}

/// Report aggregation engine: a pure per-call reduction over the records
/// supplied by the record source.
#[derive(Debug)]
pub struct ReportEngine<S> {
    source: S,
}

impl<S: RecordSource> ReportEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate one report. `now` is used only for the generated-at stamp,
    /// so identical inputs always produce identical output.
    pub fn generate(
        &self,
        request: &ReportRequest,
        now: DateTime<Utc>,
    ) -> Result<Report, ReportError> {
        let plan = request.validate()?;
        let kind = plan.kind();
        tracing::debug!(kind = %kind, "generating report");

        let data = match plan {
            ReportPlan::Sales(window) => {
                let records = source::decode_records(self.source.orders()?, "orders");
                ReportData::Sales(sales::aggregate(&records, window))
            }
            ReportPlan::Orders(window) => {
                let records = source::decode_records(self.source.orders()?, "orders");
                ReportData::Orders(orders::aggregate(records, window))
            }
            ReportPlan::Customers(window) => {
                let records = source::decode_records(self.source.customers()?, "customers");
                ReportData::Customers(customers::aggregate(records, window))
            }
            ReportPlan::Inventory => {
                let records = source::decode_records(self.source.inventory_items()?, "inventory");
                ReportData::Inventory(inventory::aggregate(records))
            }
        };

        Ok(Report {
            kind,
            title: kind.title(),
            start_date: plan.window().map(|w| w.start_date()),
            end_date: plan.window().map(|w| w.end_date()),
            generated_at: now,
            data,
        })
    }
}
