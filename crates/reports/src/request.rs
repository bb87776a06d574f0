//! Report request validation.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mealdash_core::timestamp;

use crate::report::ReportError;
use crate::window::DateWindow;

/// Report kind: determines which aggregation strategy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Sales,
    Orders,
    Customers,
    Inventory,
}

impl ReportKind {
    /// Fixed human-readable label per kind.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Sales => "Sales Report",
            ReportKind::Orders => "Orders Report",
            ReportKind::Customers => "Customers Report",
            ReportKind::Inventory => "Inventory Report",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "sales" => Some(ReportKind::Sales),
            "orders" => Some(ReportKind::Orders),
            "customers" => Some(ReportKind::Customers),
            "inventory" => Some(ReportKind::Inventory),
            _ => None,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportKind::Sales => "sales",
            ReportKind::Orders => "orders",
            ReportKind::Customers => "customers",
            ReportKind::Inventory => "inventory",
        };
        f.write_str(s)
    }
}

/// Raw report request as received from the caller.
///
/// Every field is optional at this layer so that presence is checked in one
/// place and missing fields are reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    pub report_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Validated aggregation plan: the kind together with the window it needs.
///
/// Closed set of variants so dispatch over kinds is compiler-enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPlan {
    Sales(DateWindow),
    Orders(DateWindow),
    Customers(DateWindow),
    Inventory,
}

impl ReportPlan {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportPlan::Sales(_) => ReportKind::Sales,
            ReportPlan::Orders(_) => ReportKind::Orders,
            ReportPlan::Customers(_) => ReportKind::Customers,
            ReportPlan::Inventory => ReportKind::Inventory,
        }
    }

    pub fn window(&self) -> Option<DateWindow> {
        match self {
            ReportPlan::Sales(w) | ReportPlan::Orders(w) | ReportPlan::Customers(w) => Some(*w),
            ReportPlan::Inventory => None,
        }
    }
}

impl ReportRequest {
    /// Check presence and shape of the request fields.
    ///
    /// Dates are required for every kind except `inventory`, which is
    /// point-in-time. An unsupported kind is reported with the offending
    /// value; no aggregation runs for an invalid request.
    pub fn validate(&self) -> Result<ReportPlan, ReportError> {
        let raw_kind = self
            .report_type
            .as_deref()
            .ok_or(ReportError::MissingField("report_type"))?;
        let kind = ReportKind::parse(raw_kind)
            .ok_or_else(|| ReportError::UnsupportedKind(raw_kind.to_string()))?;

        if kind == ReportKind::Inventory {
            return Ok(ReportPlan::Inventory);
        }

        let start = parse_date_field("start_date", self.start_date.as_deref())?;
        let end = parse_date_field("end_date", self.end_date.as_deref())?;
        let window = DateWindow::new(start, end);

        Ok(match kind {
            ReportKind::Sales => ReportPlan::Sales(window),
            ReportKind::Orders => ReportPlan::Orders(window),
            ReportKind::Customers => ReportPlan::Customers(window),
            ReportKind::Inventory => ReportPlan::Inventory,
        })
    }
}

fn parse_date_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, ReportError> {
    let value = value.ok_or(ReportError::MissingField(field))?;
    timestamp::parse_instant(value).map_err(|_| ReportError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
