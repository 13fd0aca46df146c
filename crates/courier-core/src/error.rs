//! Error types and result handling for relay operations.
//!
//! Defines the error taxonomy for the validate → resolve → format → send
//! pipeline, with HTTP status mapping and a client/internal split that
//! controls which messages are safe to echo back to callers.

use thiserror::Error;

/// Result type alias using `RelayError`.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors produced while handling a relay request.
///
/// Validation failures and webhook rejections map to 400 and echo their
/// message to the caller. Everything else is an internal failure: the
/// caller sees a generic message while the detail goes to the log.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Request used a method the service does not handle.
    #[error("Unsupported method: {method}")]
    UnsupportedMethod {
        /// The HTTP method that was rejected
        method: String,
    },

    /// Request body was empty or not a JSON object.
    #[error("No JSON payload received")]
    MissingPayload,

    /// A required submission field was absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the first missing field in declared order
        field: &'static str,
    },

    /// The webhook endpoint answered with a non-200 status.
    #[error("Failed to send message to Slack: {body}")]
    WebhookRejected {
        /// Status code returned by the endpoint
        status: u16,
        /// Response body returned by the endpoint
        body: String,
    },

    /// The webhook URL could not be resolved.
    #[error("webhook credential unavailable: {reason}")]
    CredentialUnavailable {
        /// Why resolution failed
        reason: String,
    },

    /// Transport-level failure reaching the webhook endpoint.
    #[error("webhook delivery failed: {message}")]
    Delivery {
        /// Error message describing the transport failure
        message: String,
    },

    /// The outbound request exceeded its timeout.
    #[error("webhook request timeout after {timeout_seconds}s")]
    Timeout {
        /// Number of seconds before the request timed out
        timeout_seconds: u64,
    },

    /// Invalid client or service configuration.
    #[error("invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// Generic error for wrapping unexpected failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RelayError {
    /// Creates an unsupported-method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod { method: method.into() }
    }

    /// Creates a webhook-rejected error from an endpoint response.
    pub fn webhook_rejected(status: u16, body: impl Into<String>) -> Self {
        Self::WebhookRejected { status, body: body.into() }
    }

    /// Creates a credential-unavailable error.
    pub fn credential_unavailable(reason: impl Into<String>) -> Self {
        Self::CredentialUnavailable { reason: reason.into() }
    }

    /// Creates a delivery error from a transport failure.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery { message: message.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Returns the HTTP status code this error maps to.
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::UnsupportedMethod { .. }
            | Self::MissingPayload
            | Self::MissingField { .. }
            | Self::WebhookRejected { .. } => 400,
            Self::CredentialUnavailable { .. }
            | Self::Delivery { .. }
            | Self::Timeout { .. }
            | Self::Configuration { .. }
            | Self::Other(_) => 500,
        }
    }

    /// Returns whether this error is attributable to the client request.
    pub const fn is_client_error(&self) -> bool {
        self.http_status() < 500
    }

    /// Returns the message to echo back to the caller.
    ///
    /// Client-class errors and webhook rejections carry their full
    /// message; internal failures surface a stable generic message so
    /// operator details stay out of responses.
    pub fn client_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            "Internal server error".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(RelayError::unsupported_method("DELETE").http_status(), 400);
        assert_eq!(RelayError::MissingPayload.http_status(), 400);
        assert_eq!(RelayError::MissingField { field: "email" }.http_status(), 400);
        assert_eq!(RelayError::webhook_rejected(500, "invalid_payload").http_status(), 400);
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(RelayError::credential_unavailable("not set").http_status(), 500);
        assert_eq!(RelayError::delivery("connection refused").http_status(), 500);
        assert_eq!(RelayError::timeout(30).http_status(), 500);
        assert_eq!(RelayError::configuration("bad url").http_status(), 500);
    }

    #[test]
    fn client_messages_echo_validation_causes() {
        let err = RelayError::MissingField { field: "email" };
        assert_eq!(err.client_message(), "Missing required field: email");

        let err = RelayError::unsupported_method("PUT");
        assert_eq!(err.client_message(), "Unsupported method: PUT");
    }

    #[test]
    fn webhook_rejection_includes_endpoint_body() {
        let err = RelayError::webhook_rejected(404, "no_service");
        assert_eq!(err.client_message(), "Failed to send message to Slack: no_service");
    }

    #[test]
    fn internal_details_hidden_from_clients() {
        let err = RelayError::credential_unavailable("SLACK_WEBHOOK_URL not set");
        assert_eq!(err.client_message(), "Internal server error");
        assert!(err.to_string().contains("SLACK_WEBHOOK_URL"));
    }
}
