//! Blocking client for the PII Firewall Edge redaction API.
//!
//! A [`Client`] owns an API key, a timeout and a base URL, all fixed at
//! construction. Each redaction call validates its input, performs exactly
//! one POST and turns the outcome into either a [`RedactionResult`] or a
//! [`PiiFirewallError`]. Nothing is retried and no state changes between
//! calls, so a single client can be shared across threads.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::classifier::classify_http_error;
use crate::config::{
    ClientConfig, API_HOST, API_HOST_HEADER, API_KEY_HEADER, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::engine::RedactionService;
use crate::errors::{PiiFirewallError, Result};
use crate::mode::RedactionMode;
use crate::result::{ErrorBody, RedactRequest, RedactionResult};
use crate::sensitive::{loggable_text, mask_api_key};
use crate::validators::{
    text_from_value, validate_api_key, validate_base_url, validate_text, validate_timeout,
};

/// Client for the redaction endpoints.
///
/// ```rust,no_run
/// use piifw_core::Client;
///
/// let client = Client::new("YOUR_API_KEY", None)?;
/// let result = client.redact_fast("Contact john@test.com at 555-1234")?;
/// println!("{}", result.redacted()); // Contact [EMAIL] at [PHONE_US]
/// # Ok::<(), piifw_core::PiiFirewallError>(())
/// ```
pub struct Client {
    http: reqwest::blocking::Client,
    api_key: String,
    timeout: Duration,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for clients that need a non-default timeout or host.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: Option<String>,
    timeout: Duration,
    base_url: String,
}

impl ClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends requests to `base_url` instead of the production host.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validates the settings and creates the client.
    pub fn build(self) -> Result<Client> {
        let api_key = validate_api_key(self.api_key.as_deref())?.to_string();
        let timeout = validate_timeout(self.timeout)?;
        let base_url = validate_base_url(&self.base_url)?;

        // No idle connections are kept, so nothing outlives a call.
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .user_agent(concat!("piifw-core/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                PiiFirewallError::Config(format!("Failed to initialise HTTP transport: {}", e))
            })?;

        debug!(
            "Created client for {} (timeout {:?}, key {})",
            base_url,
            timeout,
            mask_api_key(&api_key)
        );

        Ok(Client {
            http,
            api_key,
            timeout,
            base_url,
        })
    }
}

impl Client {
    /// Creates a client against the production host. `timeout` defaults to 10 seconds.
    pub fn new(api_key: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Self::builder(api_key);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: Some(api_key.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a client from layered configuration. Fails if no API key was supplied.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        ClientBuilder {
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
            base_url: config.base_url().to_string(),
        }
        .build()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fast mode, label style: PII becomes type tags such as `[EMAIL]`.
    ///
    /// Covers emails, phones, SSNs, card numbers, API keys and IBANs. Names
    /// and addresses are not detected in this mode.
    pub fn redact_fast(&self, text: &str) -> Result<RedactionResult> {
        self.redact(text, RedactionMode::Fast)
    }

    /// Fast mode, mask style: PII becomes asterisks.
    pub fn redact_fast_masked(&self, text: &str) -> Result<RedactionResult> {
        self.redact(text, RedactionMode::FastMasked)
    }

    /// Deep mode, label style: fast coverage plus human names and addresses.
    pub fn redact_deep(&self, text: &str) -> Result<RedactionResult> {
        self.redact(text, RedactionMode::Deep)
    }

    /// Deep mode, mask style.
    pub fn redact_deep_masked(&self, text: &str) -> Result<RedactionResult> {
        self.redact(text, RedactionMode::DeepMasked)
    }

    /// Runs the redaction selected by `mode`.
    pub fn redact(&self, text: &str, mode: RedactionMode) -> Result<RedactionResult> {
        let text = validate_text(text)?;
        self.send(text, mode)
    }

    /// Redacts a dynamically typed value, rejecting `null` and non-strings.
    pub fn redact_value(&self, value: &Value, mode: RedactionMode) -> Result<RedactionResult> {
        let text = text_from_value(value)?;
        self.send(text, mode)
    }

    fn send(&self, text: &str, mode: RedactionMode) -> Result<RedactionResult> {
        let url = format!("{}{}", self.base_url, mode.endpoint().path());
        debug!("POST {} ({} mode, {} bytes)", url, mode, text.len());
        trace!("Request text: {}", loggable_text(text));

        let body = RedactRequest {
            text,
            mode: mode.style(),
        };
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, API_HOST)
            .json(&body)
            .send()
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!("Response status: {}", status);
        if status.is_success() {
            decode_success(status, response)
        } else {
            Err(decode_failure(status, response))
        }
    }
}

impl RedactionService for Client {
    fn redact(&self, text: &str, mode: RedactionMode) -> Result<RedactionResult> {
        Client::redact(self, text, mode)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

fn decode_success(status: StatusCode, response: Response) -> Result<RedactionResult> {
    let bytes = response.bytes().map_err(map_transport_error)?;
    let result =
        RedactionResult::from_json(&bytes).map_err(|e| PiiFirewallError::MalformedResponse {
            status: status.as_u16(),
            message: format!("Malformed response body: {}", e),
        })?;
    debug!(
        "Redaction completed: {} detections{}",
        result.detections(),
        if result.warning().is_some() { " (with warning)" } else { "" }
    );
    Ok(result)
}

fn decode_failure(status: StatusCode, response: Response) -> PiiFirewallError {
    let message = match response.bytes() {
        Ok(bytes) => error_message(status, &bytes),
        Err(e) => {
            debug!("Failed to read error body: {}", e);
            reason_phrase(status)
        }
    };
    classify_http_error(status.as_u16(), &message)
}

/// Picks the message for a non-2xx response: the body's `error` field when the
/// body is JSON, otherwise the status reason phrase.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.unwrap_or_else(|| "Unknown error".to_string()),
        Err(_) => reason_phrase(status),
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

fn map_transport_error(err: reqwest::Error) -> PiiFirewallError {
    if err.is_timeout() {
        debug!("Request timed out: {}", err);
        return PiiFirewallError::Timeout;
    }
    PiiFirewallError::network(root_cause(&err))
}

/// Innermost error in the source chain, which carries the useful reason
/// (e.g. "Connection refused") rather than reqwest's generic wrapper text.
fn root_cause(err: &(dyn std::error::Error + 'static)) -> String {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_error_field() {
        let msg = error_message(StatusCode::TOO_MANY_REQUESTS, br#"{"error":"too many requests"}"#);
        assert_eq!(msg, "too many requests");
    }

    #[test]
    fn error_message_defaults_when_field_missing() {
        let msg = error_message(StatusCode::BAD_REQUEST, br#"{"message":"nope"}"#);
        assert_eq!(msg, "Unknown error");
    }

    #[test]
    fn error_message_falls_back_to_reason_phrase() {
        let msg = error_message(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(msg, "Bad Gateway");
        let msg = error_message(StatusCode::from_u16(599).unwrap(), b"");
        assert_eq!(msg, "Unknown error");
    }

    #[test]
    fn non_string_error_field_falls_back_to_reason_phrase() {
        let msg = error_message(StatusCode::BAD_REQUEST, br#"{"error":123}"#);
        assert_eq!(msg, "Bad Request");
    }

    #[test]
    fn construction_rejects_empty_key() {
        let err = Client::new("", None).unwrap_err();
        assert_eq!(err, PiiFirewallError::Config("API key is required".to_string()));
    }

    #[test]
    fn construction_rejects_zero_timeout() {
        let err = Client::new("key", Some(Duration::ZERO)).unwrap_err();
        assert!(matches!(err, PiiFirewallError::Config(_)));
    }

    #[test]
    fn from_config_requires_api_key() {
        let err = Client::from_config(&ClientConfig::default()).unwrap_err();
        assert_eq!(err.message(), "API key is required");
    }

    #[test]
    fn defaults_are_applied() {
        let client = Client::new("key", None).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(10));
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = Client::new("my-very-secret-key", None).unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("my-very-secret"));
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
