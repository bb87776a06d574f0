use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use mealdash_reports::ReportError;

pub fn report_error_to_response(err: ReportError) -> axum::response::Response {
    match err {
        ReportError::MissingField(field) => json_error(
            StatusCode::BAD_REQUEST,
            "missing_field",
            format!("missing required field: {field}"),
        ),
        ReportError::UnsupportedKind(kind) => json_error(
            StatusCode::BAD_REQUEST,
            "unsupported_report_type",
            format!("unsupported report type: {kind}"),
        ),
        ReportError::InvalidDate { field, value } => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_date",
            format!("invalid {field}: {value}"),
        ),
        ReportError::Source(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            format!("{e:?}"),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
