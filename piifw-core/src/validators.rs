// File: piifw-core/src/validators.rs
//! Input and configuration checks that run before any request is built.
//!
//! Text validation is the only gate between a caller and the network: every
//! check here must fail fast so invalid input never costs a round trip.
//!
//! License: MIT OR APACHE 2.0

use reqwest::header::HeaderValue;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

use crate::errors::{PiiFirewallError, Result};

/// Rejects empty or whitespace-only text.
///
/// The ASCII separator controls U+001C..=U+001F count as whitespace too.
pub fn validate_text(text: &str) -> Result<&str> {
    if text.chars().all(is_blank) {
        return Err(PiiFirewallError::InvalidInput("Text cannot be empty".to_string()));
    }
    Ok(text)
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Extracts redactable text from a dynamically typed value.
///
/// `null` and non-string values are rejected with distinct messages before
/// the usual emptiness check runs.
pub fn text_from_value(value: &Value) -> Result<&str> {
    match value {
        Value::Null => Err(PiiFirewallError::InvalidInput("Text cannot be None".to_string())),
        Value::String(text) => validate_text(text),
        _ => Err(PiiFirewallError::InvalidInput("Text must be a string".to_string())),
    }
}

/// Checks that an API key is present, non-blank and usable as a header value.
pub fn validate_api_key(api_key: Option<&str>) -> Result<&str> {
    let Some(key) = api_key else {
        return Err(PiiFirewallError::Config("API key is required".to_string()));
    };
    if key.trim().is_empty() {
        return Err(PiiFirewallError::Config("API key is required".to_string()));
    }
    if HeaderValue::from_str(key).is_err() {
        return Err(PiiFirewallError::Config(
            "API key contains characters that are not allowed in an HTTP header".to_string(),
        ));
    }
    Ok(key)
}

pub fn validate_timeout(timeout: Duration) -> Result<Duration> {
    if timeout.is_zero() {
        return Err(PiiFirewallError::Config(
            "Timeout must be a positive duration".to_string(),
        ));
    }
    Ok(timeout)
}

/// Normalises a base URL: must be absolute http(s); trailing slashes are
/// dropped so endpoint paths can be appended verbatim.
pub fn validate_base_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url)
        .map_err(|e| PiiFirewallError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PiiFirewallError::Config(format!(
            "Invalid base URL '{}': scheme must be http or https",
            base_url
        )));
    }
    Ok(base_url.trim_end_matches('/').to_string())
}
