//! errors.rs - Error type for the piifw-core library.
//!
//! Every fallible operation in this crate returns a [`PiiFirewallError`]. Each
//! variant carries enough information for a caller to decide what to do next:
//! a human-readable message, the HTTP status code the failure maps to (0 when
//! no HTTP response was obtained) and an advisory retryable flag.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Message prefix used for transport-level failures.
pub const NETWORK_ERROR_PREFIX: &str = "Network error";

/// Message used when no response arrives within the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "Request timeout";

/// All failures surfaced by the PII Firewall client.
///
/// `#[non_exhaustive]` keeps room for new failure classes without breaking
/// downstream `match` statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PiiFirewallError {
    /// The text was rejected before any request was built.
    #[error("[400] {0}")]
    InvalidInput(String),

    /// The service answered with a non-2xx status.
    #[error("[{status}] {message}")]
    Http {
        status: u16,
        message: String,
        retryable: bool,
    },

    /// No HTTP response was obtained (DNS, refused connection, TLS, reset).
    #[error("{0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// A 2xx response whose body did not match the documented schema.
    #[error("[{status}] {message}")]
    MalformedResponse { status: u16, message: String },

    /// The client could not be configured (missing key, bad timeout, bad URL).
    #[error("{0}")]
    Config(String),
}

impl PiiFirewallError {
    /// Builds a network error from the underlying transport reason.
    pub fn network(reason: impl std::fmt::Display) -> Self {
        PiiFirewallError::Network(format!("{}: {}", NETWORK_ERROR_PREFIX, reason))
    }

    /// The message without the `[status]` prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            PiiFirewallError::InvalidInput(message)
            | PiiFirewallError::Network(message)
            | PiiFirewallError::Config(message) => message,
            PiiFirewallError::Http { message, .. }
            | PiiFirewallError::MalformedResponse { message, .. } => message,
            PiiFirewallError::Timeout => TIMEOUT_MESSAGE,
        }
    }

    /// HTTP status code associated with the failure, or 0 for transport and
    /// configuration failures.
    pub fn status_code(&self) -> u16 {
        match self {
            PiiFirewallError::InvalidInput(_) => 400,
            PiiFirewallError::Http { status, .. }
            | PiiFirewallError::MalformedResponse { status, .. } => *status,
            PiiFirewallError::Network(_)
            | PiiFirewallError::Timeout
            | PiiFirewallError::Config(_) => 0,
        }
    }

    /// Whether repeating the same request after a delay may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            PiiFirewallError::Http { retryable, .. } => *retryable,
            PiiFirewallError::Network(_) | PiiFirewallError::Timeout => true,
            PiiFirewallError::InvalidInput(_)
            | PiiFirewallError::MalformedResponse { .. }
            | PiiFirewallError::Config(_) => false,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PiiFirewallError>;
