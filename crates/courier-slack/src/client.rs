//! HTTP client for posting block messages to a webhook URL.
//!
//! Handles request construction, response capture, and error
//! categorization. Status classification is left to the caller: the
//! relay pipeline treats any non-200 endpoint response as a rejection.

use std::time::Duration;

use courier_core::{RelayError, Result};
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};

use crate::{message::BlockMessage, DEFAULT_TIMEOUT_SECONDS};

/// Configuration for the webhook client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Timeout for outbound HTTP requests.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: "Courier/1.0".to_string(),
        }
    }
}

/// HTTP client for webhook delivery.
///
/// Wraps a pooled `reqwest` client with a configured timeout. Cheap to
/// clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    config: ClientConfig,
}

/// Response captured from a webhook post.
#[derive(Debug, Clone)]
pub struct WebhookResponse {
    /// HTTP status code returned by the endpoint.
    pub status_code: u16,
    /// Response body (truncated if oversized).
    pub body: String,
    /// Total duration of the request.
    pub duration: Duration,
    /// Whether the endpoint answered 200.
    pub is_success: bool,
}

impl WebhookClient {
    /// Creates a new webhook client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Configuration` if the HTTP client cannot be
    /// built with the provided settings.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RelayError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Creates a new webhook client with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Posts a block message to the webhook URL.
    ///
    /// Returns the endpoint's status and body regardless of status code;
    /// transport failures map to categorized errors.
    ///
    /// # Errors
    ///
    /// - `RelayError::Timeout` when the request exceeds the configured
    ///   timeout
    /// - `RelayError::Delivery` for connection and other transport
    ///   failures
    pub async fn post(&self, url: &str, message: &BlockMessage) -> Result<WebhookResponse> {
        let start_time = std::time::Instant::now();

        let span = info_span!("webhook_post", url = %url);

        async move {
            tracing::debug!("Posting message to webhook");

            let response = match self.client.post(url).json(message).send().await {
                Ok(response) => response,
                Err(e) => {
                    let duration = start_time.elapsed();
                    tracing::warn!(duration_ms = duration.as_millis(), "Request failed: {}", e);

                    if e.is_timeout() {
                        return Err(RelayError::timeout(self.config.timeout.as_secs()));
                    }
                    if e.is_connect() {
                        return Err(RelayError::delivery(format!("connection failed: {e}")));
                    }
                    return Err(RelayError::delivery(e.to_string()));
                },
            };

            let duration = start_time.elapsed();
            let status_code = response.status().as_u16();
            let is_success = status_code == 200;

            tracing::debug!(
                status = status_code,
                duration_ms = duration.as_millis(),
                "Received webhook response"
            );

            let body = read_body(response).await;

            Ok(WebhookResponse { status_code, body, duration, is_success })
        }
        .instrument(span)
        .await
    }
}

/// Reads a response body, truncating oversized content.
async fn read_body(response: reqwest::Response) -> String {
    const MAX_RESPONSE_BODY_SIZE: usize = 64 * 1024;

    match response.bytes().await {
        Ok(bytes) => {
            if bytes.len() > MAX_RESPONSE_BODY_SIZE {
                let suffix = "... (truncated)";
                let truncated =
                    String::from_utf8_lossy(&bytes[..MAX_RESPONSE_BODY_SIZE - suffix.len()]);
                format!("{truncated}{suffix}")
            } else {
                String::from_utf8_lossy(&bytes).into_owned()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read response body: {}", e);
            format!("[Failed to read response body: {e}]")
        },
    }
}
