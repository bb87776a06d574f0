use axum::Router;

pub mod reports;
pub mod system;

/// Router for all report endpoints.
pub fn router() -> Router {
    Router::new().nest("/reports", reports::router())
}
