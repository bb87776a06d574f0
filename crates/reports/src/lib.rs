//! Report aggregation engine.
//!
//! Given a report kind and a date window, selects the qualifying records,
//! groups them along the dimensions relevant to that kind, and reduces them
//! into the structured payload returned to the caller. The engine is a pure
//! function of its inputs plus the generated-at instant supplied by the
//! caller: it holds no state between calls and caches nothing, so concurrent
//! invocations need no locking.

pub mod customers;
pub mod inventory;
pub mod orders;
pub mod report;
pub mod request;
pub mod sales;
pub mod source;
pub mod window;

mod group;

pub use report::{Report, ReportData, ReportEngine, ReportError};
pub use request::{ReportKind, ReportPlan, ReportRequest};
pub use source::{InMemoryRecordSource, RecordSource};
pub use window::DateWindow;
