//! Contact-form submission model and validation.
//!
//! A submission carries `name`, `email`, and `message`. Validation is
//! presence-only; a missing key fails with the first missing field in
//! declared order so the caller gets a deterministic error message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RelayError, Result};

/// Required submission fields, in the order they are reported missing.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Name of the sender.
    pub name: String,
    /// Contact email of the sender.
    pub email: String,
    /// Free-text message body.
    pub message: String,
}

impl Submission {
    /// Parses a submission from a raw request body.
    ///
    /// # Errors
    ///
    /// Returns `MissingPayload` if the body is empty or not a JSON
    /// object, and `MissingField` naming the first absent field.
    pub fn parse(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Err(RelayError::MissingPayload);
        }

        let payload: Value =
            serde_json::from_slice(body).map_err(|_| RelayError::MissingPayload)?;

        Self::from_json(&payload)
    }

    /// Validates and extracts a submission from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `MissingPayload` for non-object values (including JSON
    /// `null` and fields of the wrong type), and `MissingField` for the
    /// first key absent from the object.
    pub fn from_json(payload: &Value) -> Result<Self> {
        let object =
            payload.as_object().filter(|o| !o.is_empty()).ok_or(RelayError::MissingPayload)?;

        for field in REQUIRED_FIELDS {
            if !object.contains_key(field) {
                return Err(RelayError::MissingField { field });
            }
        }

        serde_json::from_value(payload.clone()).map_err(|_| RelayError::MissingPayload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_payload_parses() {
        let body = br#"{"name":"Ada","email":"ada@example.com","message":"Hello"}"#;
        let submission = Submission::parse(body).expect("payload should parse");

        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hello");
    }

    #[test]
    fn extra_keys_are_ignored() {
        let payload = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello",
            "phone": "555-0100"
        });

        assert!(Submission::from_json(&payload).is_ok());
    }

    #[test]
    fn empty_body_is_missing_payload() {
        assert!(matches!(Submission::parse(b""), Err(RelayError::MissingPayload)));
    }

    #[test]
    fn malformed_json_is_missing_payload() {
        assert!(matches!(Submission::parse(b"{not json"), Err(RelayError::MissingPayload)));
    }

    #[test]
    fn non_object_payloads_rejected() {
        assert!(matches!(Submission::from_json(&json!(null)), Err(RelayError::MissingPayload)));
        assert!(matches!(Submission::from_json(&json!([1, 2])), Err(RelayError::MissingPayload)));
        assert!(matches!(Submission::from_json(&json!({})), Err(RelayError::MissingPayload)));
    }

    #[test]
    fn first_missing_field_reported_in_declared_order() {
        let payload = json!({"name": "Ada"});
        match Submission::from_json(&payload) {
            Err(RelayError::MissingField { field }) => assert_eq!(field, "email"),
            other => panic!("expected MissingField, got {other:?}"),
        }

        let payload = json!({"email": "ada@example.com"});
        match Submission::from_json(&payload) {
            Err(RelayError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("expected MissingField, got {other:?}"),
        }

        let payload = json!({"name": "Ada", "email": "ada@example.com"});
        match Submission::from_json(&payload) {
            Err(RelayError::MissingField { field }) => assert_eq!(field, "message"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn wrong_field_type_rejected() {
        let payload = json!({"name": 5, "email": "ada@example.com", "message": "Hello"});
        assert!(matches!(Submission::from_json(&payload), Err(RelayError::MissingPayload)));
    }
}
