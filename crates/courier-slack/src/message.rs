//! Slack Block Kit message construction.
//!
//! Renders a submission into the fixed four-block layout the service
//! posts to Slack: a header, a two-field sender section, the message
//! body, and a received-at context footer.

use chrono::{DateTime, Local};
use courier_core::Submission;
use serde::Serialize;

/// Header text shown at the top of every relayed message.
pub const HEADER_TEXT: &str = "New Message Received! \u{1F4EC}";

/// Timestamp format rendered into the context block.
pub const RECEIVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A Block Kit text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text, optionally rendering emoji shortcodes.
    PlainText {
        /// The literal text content
        text: String,
        /// Whether Slack should render emoji in the text
        emoji: bool,
    },
    /// Slack-flavored markdown.
    Mrkdwn {
        /// The markdown content
        text: String,
    },
}

impl Text {
    /// Creates a plain-text object with emoji rendering enabled.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into(), emoji: true }
    }

    /// Creates a markdown text object.
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// A single Block Kit layout block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Large header text.
    Header {
        /// Header text object (plain text only)
        text: Text,
    },
    /// A section with either free text or a field column layout.
    Section {
        /// Free text content, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Text>,
        /// Two-column field content, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<Text>>,
    },
    /// Small contextual footer elements.
    Context {
        /// Footer text elements
        elements: Vec<Text>,
    },
}

/// The complete webhook payload: an ordered list of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockMessage {
    /// Layout blocks in render order
    pub blocks: Vec<Block>,
}

impl BlockMessage {
    /// Renders a submission into the fixed relay layout.
    ///
    /// The layout is deterministic given the submission and timestamp:
    /// header, `From`/`Email` fields, message section, received-at
    /// context.
    pub fn for_submission(submission: &Submission, received_at: DateTime<Local>) -> Self {
        let timestamp = received_at.format(RECEIVED_AT_FORMAT).to_string();

        Self {
            blocks: vec![
                Block::Header { text: Text::plain(HEADER_TEXT) },
                Block::Section {
                    text: None,
                    fields: Some(vec![
                        Text::mrkdwn(format!("*From:*\n{}", submission.name)),
                        Text::mrkdwn(format!("*Email:*\n{}", submission.email)),
                    ]),
                },
                Block::Section {
                    text: Some(Text::mrkdwn(format!("*Message:*\n{}", submission.message))),
                    fields: None,
                },
                Block::Context {
                    elements: vec![Text::mrkdwn(format!("Received at: {timestamp}"))],
                },
            ],
        }
    }
}
