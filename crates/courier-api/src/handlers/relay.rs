//! Contact-form relay handler.
//!
//! Dispatches on method: OPTIONS gets a CORS preflight answer, POST runs
//! the validate → resolve-credential → format → send pipeline, anything
//! else is rejected. Registered as the router fallback so the contract
//! holds on every path.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Local};
use courier_core::{RelayError, Result, Submission};
use courier_slack::BlockMessage;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::AppState;

/// Response body for a successfully relayed submission.
#[derive(Debug, Serialize)]
pub struct RelaySuccess {
    /// Always `true`
    pub success: bool,
    /// Human-readable confirmation
    pub message: &'static str,
}

impl RelaySuccess {
    fn new() -> Self {
        Self { success: true, message: "Notification sent to Slack" }
    }
}

/// Response body for a failed request.
#[derive(Debug, Serialize)]
pub struct RelayFailure {
    /// Always `false`
    pub success: bool,
    /// Error message safe to echo to the caller
    pub error: String,
}

/// Method-dispatching entry point for everything except `GET /health`.
#[instrument(name = "relay", skip(state, body), fields(method = %method))]
pub async fn dispatch(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    match method {
        Method::OPTIONS => preflight_response(),
        Method::POST => match relay_submission(&state, &body).await {
            Ok(()) => (StatusCode::OK, Json(RelaySuccess::new())).into_response(),
            Err(e) => error_response(&e),
        },
        other => error_response(&RelayError::unsupported_method(other.as_str())),
    }
}

/// Runs the relay pipeline for one POST request.
///
/// # Errors
///
/// Propagates validation errors, credential-resolution failures,
/// transport failures, and webhook rejections; the caller maps them to
/// HTTP responses.
async fn relay_submission(state: &AppState, body: &[u8]) -> Result<()> {
    let submission = Submission::parse(body)?;
    debug!(name = %submission.name, email = %submission.email, "Submission validated");

    let webhook_url = state.credentials.webhook_url()?;
    debug!("Webhook credential resolved");

    let received_at = DateTime::<Local>::from(state.clock.now_system());
    let message = BlockMessage::for_submission(&submission, received_at);

    let response = state.slack.post(&webhook_url, &message).await?;

    if !response.is_success {
        return Err(RelayError::webhook_rejected(response.status_code, response.body));
    }

    info!(
        status = response.status_code,
        duration_ms = response.duration.as_millis(),
        "Notification relayed to Slack"
    );
    Ok(())
}

/// Answers a CORS preflight request.
///
/// Browsers send OPTIONS before a cross-origin POST; the answer permits
/// POST with a Content-Type header from any origin and caches the
/// preflight for an hour.
fn preflight_response() -> Response {
    let headers = [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        (header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST")),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type")),
        (header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("3600")),
    ];

    (StatusCode::NO_CONTENT, headers).into_response()
}

/// Maps a relay error to its JSON error response, logging it first.
fn error_response(error: &RelayError) -> Response {
    if error.is_client_error() {
        warn!(error = %error, "Relay request rejected");
    } else {
        error!(error = %error, "Relay request failed");
    }

    let status = StatusCode::from_u16(error.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = RelayFailure { success: false, error: error.client_message() };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_carries_cors_headers() {
        let response = preflight_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "POST");
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "Content-Type");
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "3600");
    }

    #[test]
    fn validation_error_maps_to_400() {
        let response = error_response(&RelayError::MissingField { field: "email" });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn credential_error_maps_to_500() {
        let response = error_response(&RelayError::credential_unavailable("not set"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn success_body_shape() {
        let body = serde_json::to_value(RelaySuccess::new()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "Notification sent to Slack"})
        );
    }
}
