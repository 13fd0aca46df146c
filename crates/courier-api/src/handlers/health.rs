//! Health check handler for service monitoring.
//!
//! This service holds no connections and no state, so health reduces to
//! the process answering requests at all.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::instrument;

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service health status
    pub status: &'static str,
}

/// Health check endpoint handler.
///
/// Designed to be called frequently by orchestration systems and load
/// balancers; performs no expensive work.
#[instrument(name = "health_check")]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_body_reports_healthy() {
        let body = serde_json::to_value(HealthResponse { status: "healthy" }).unwrap();
        assert_eq!(body, serde_json::json!({"status": "healthy"}));
    }
}
