//! Core domain types for the Courier relay service.
//!
//! Provides the submission model, the relay error taxonomy, and the clock
//! abstraction. The API and Slack crates depend on these foundational
//! types for consistency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod submission;
pub mod time;

pub use error::{RelayError, Result};
pub use submission::Submission;
pub use time::{Clock, RealClock, TestClock};
