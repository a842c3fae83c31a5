// File: piifw-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot use without managing a client.

use std::time::Duration;

use crate::client::Client;
use crate::config::ClientConfig;
use crate::errors::Result;
use crate::mode::RedactionMode;
use crate::result::RedactionResult;

/// Creates a client against the production host.
///
/// Equivalent to [`Client::new`]; `timeout` defaults to 10 seconds.
pub fn create_client(api_key: impl Into<String>, timeout: Option<Duration>) -> Result<Client> {
    Client::new(api_key, timeout)
}

/// Builds a client from `config`, runs a single redaction and drops the client.
pub fn headless_redact(
    config: &ClientConfig,
    text: &str,
    mode: RedactionMode,
) -> Result<RedactionResult> {
    Client::from_config(config)?.redact(text, mode)
}
