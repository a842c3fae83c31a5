//! Wire types for the redaction endpoints and the public result value.

use serde::{Deserialize, Serialize};

use crate::mode::RedactionStyle;

/// Request body for both endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct RedactRequest<'a> {
    pub text: &'a str,
    pub mode: RedactionStyle,
}

/// Success body. Missing fields fall back to their defaults rather than
/// failing the call; values are otherwise taken as reported.
#[derive(Debug, Deserialize)]
pub(crate) struct RedactResponse {
    #[serde(default)]
    pub redacted: String,
    #[serde(default)]
    pub detections: u64,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of a successful redaction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactionResult {
    redacted: String,
    detections: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl RedactionResult {
    /// The input text with PII replaced by tags or asterisks.
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    /// Number of PII items the service reported.
    pub fn detections(&self) -> u64 {
        self.detections
    }

    /// Advisory message from the service, if any.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn has_pii(&self) -> bool {
        self.detections > 0
    }

    pub fn into_redacted(self) -> String {
        self.redacted
    }

    /// Decodes a success body, applying the per-field defaults.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<RedactResponse>(body).map(RedactResponse::into_result)
    }
}

impl RedactResponse {
    fn into_result(self) -> RedactionResult {
        RedactionResult {
            redacted: self.redacted,
            detections: self.detections,
            warning: self.warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> RedactionResult {
        RedactionResult::from_json(body.as_bytes()).unwrap()
    }

    #[test]
    fn full_response_is_taken_verbatim() {
        let result = decode(r#"{"redacted":"Contact [EMAIL] at [PHONE_US]","detections":2}"#);
        assert_eq!(result.redacted(), "Contact [EMAIL] at [PHONE_US]");
        assert_eq!(result.detections(), 2);
        assert_eq!(result.warning(), None);
        assert!(result.has_pii());
    }

    #[test]
    fn missing_fields_use_lenient_defaults() {
        let result = decode(r#"{"detections":0}"#);
        assert_eq!(result.redacted(), "");
        assert!(!result.has_pii());

        let result = decode("{}");
        assert_eq!(result.detections(), 0);
        assert_eq!(result.warning(), None);
    }

    #[test]
    fn warning_is_preserved() {
        let result = decode(r#"{"redacted":"x","detections":1,"warning":"input truncated"}"#);
        assert_eq!(result.warning(), Some("input truncated"));
    }

    #[test]
    fn negative_detections_are_rejected() {
        assert!(serde_json::from_str::<RedactResponse>(r#"{"detections":-1}"#).is_err());
    }

    #[test]
    fn non_string_redacted_is_rejected() {
        assert!(RedactionResult::from_json(br#"{"redacted":null,"detections":0}"#).is_err());
        assert!(RedactionResult::from_json(br#"{"redacted":7,"detections":1}"#).is_err());
    }

    #[test]
    fn request_body_matches_wire_format() {
        let body = RedactRequest {
            text: "hi",
            mode: RedactionStyle::Mask,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"text": "hi", "mode": "mask"})
        );
    }

    #[test]
    fn error_body_tolerates_missing_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"x"}"#).unwrap();
        assert_eq!(body.error, None);
    }

    #[test]
    fn error_body_rejects_non_string_error_field() {
        assert!(serde_json::from_str::<ErrorBody>(r#"{"error":123}"#).is_err());
    }
}
