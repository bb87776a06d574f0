//! Service wiring for the HTTP layer.

use std::sync::Arc;

use mealdash_reports::{InMemoryRecordSource, ReportEngine};

/// Shared services injected into request handlers.
#[derive(Debug)]
pub struct AppServices {
    pub engine: ReportEngine<Arc<InMemoryRecordSource>>,
    /// Handle to the record source so callers (tests, dev seeding) can load
    /// documents; request handlers only go through `engine`.
    pub records: Arc<InMemoryRecordSource>,
}

/// Build the service graph.
///
/// The record source here is the in-memory implementation; the production
/// document-store client plugs in behind the same `RecordSource` trait.
pub fn build_services() -> AppServices {
    let records = Arc::new(InMemoryRecordSource::new());
    AppServices {
        engine: ReportEngine::new(records.clone()),
        records,
    }
}
