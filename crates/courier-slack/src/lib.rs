//! Slack webhook delivery for the Courier relay service.
//!
//! This crate renders a contact-form submission into a Slack Block Kit
//! payload and posts it to an incoming-webhook URL. Each relay is a
//! single synchronous call: no retries, no queueing. The caller decides
//! how to classify non-200 endpoint responses.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use courier_core::Submission;
//! use courier_slack::{BlockMessage, WebhookClient};
//!
//! # async fn example(submission: Submission) -> courier_core::Result<()> {
//! let client = WebhookClient::with_defaults()?;
//! let message = BlockMessage::for_submission(&submission, Local::now());
//!
//! let response = client.post("https://hooks.slack.com/services/T/B/X", &message).await?;
//! assert!(response.is_success);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod message;

pub use client::{ClientConfig, WebhookClient, WebhookResponse};
pub use message::{Block, BlockMessage, Text};

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
