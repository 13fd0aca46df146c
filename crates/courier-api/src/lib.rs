//! Courier HTTP API.
//!
//! Exposes the relay surface: a health endpoint, CORS preflight
//! handling, and the contact-form POST handler that validates, formats,
//! and forwards submissions to Slack.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use courier_core::Clock;
use courier_slack::WebhookClient;

use crate::credentials::CredentialStore;

pub mod config;
pub mod credentials;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared application state injected into handlers.
///
/// Everything a request needs is carried here; nothing is resolved from
/// process globals inside handlers.
#[derive(Clone)]
pub struct AppState {
    /// Webhook-URL resolver, consulted on every relay request.
    pub credentials: Arc<dyn CredentialStore>,
    /// Pooled HTTP client for webhook posts.
    pub slack: WebhookClient,
    /// Timestamp source for outbound messages.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state from its collaborators.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        slack: WebhookClient,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { credentials, slack, clock }
    }
}
