//! Shared fixtures for API integration tests.

#![allow(dead_code)]

use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use axum::Router;
use courier_api::{create_router, credentials::CredentialStore, AppState};
use courier_core::{RelayError, Result, TestClock};
use courier_slack::{ClientConfig, WebhookClient};

/// Request timeout used by test routers.
pub const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credential store that always resolves to a fixed URL.
#[derive(Debug)]
pub struct StaticCredentials(pub String);

impl CredentialStore for StaticCredentials {
    fn webhook_url(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Credential store that always fails resolution.
#[derive(Debug)]
pub struct FailingCredentials;

impl CredentialStore for FailingCredentials {
    fn webhook_url(&self) -> Result<String> {
        Err(RelayError::credential_unavailable("secret store unreachable"))
    }
}

/// Builds application state pointing at the given webhook URL.
pub fn test_state(webhook_url: &str) -> AppState {
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let clock = TestClock::with_start_time(start);

    AppState::new(
        Arc::new(StaticCredentials(webhook_url.to_string())),
        test_client(),
        Arc::new(clock),
    )
}

/// Builds a router that relays to the given webhook URL.
pub fn test_router(webhook_url: &str) -> Router {
    create_router(test_state(webhook_url), TEST_REQUEST_TIMEOUT)
}

/// Builds a router whose credential resolution always fails.
pub fn failing_credentials_router() -> Router {
    let state = AppState::new(
        Arc::new(FailingCredentials),
        test_client(),
        Arc::new(TestClock::new()),
    );
    create_router(state, TEST_REQUEST_TIMEOUT)
}

fn test_client() -> WebhookClient {
    let config = ClientConfig { timeout: Duration::from_secs(5), ..ClientConfig::default() };
    WebhookClient::new(config).expect("test webhook client should build")
}

/// Reads a response body to completion as bytes.
pub async fn read_body(response: axum::response::Response) -> bytes::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
}

/// Reads a response body and parses it as JSON.
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("response body should be valid JSON")
}
