use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use mealdash_reports::ReportRequest;

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", post(generate_report))
}

pub async fn generate_report(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<ReportRequest>,
) -> axum::response::Response {
    let report = match services.engine.generate(&request, Utc::now()) {
        Ok(report) => report,
        Err(e) => return errors::report_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "report": report,
        })),
    )
        .into_response()
}
