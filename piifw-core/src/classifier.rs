//! Maps HTTP failure statuses to typed errors.
//!
//! The table below is the client's whole retry policy. It is kept as a
//! static ordered slice so it can be audited and tested without a transport.

use crate::errors::PiiFirewallError;

/// `(status, label, retryable)` for every status the service documents.
pub const STATUS_TABLE: &[(u16, &str, bool)] = &[
    (400, "Bad Request", false),
    (401, "Unauthorized: Invalid or missing API key", false),
    (403, "Forbidden: API key does not have access", false),
    (413, "Payload Too Large", false),
    (429, "Rate Limit Exceeded: Upgrade your plan or wait", true),
    (500, "Server Error: Please try again later", true),
];

/// Looks up the documented label and retry flag for `status`.
pub fn status_label(status: u16) -> Option<(&'static str, bool)> {
    STATUS_TABLE
        .iter()
        .find(|(code, _, _)| *code == status)
        .map(|(_, label, retryable)| (*label, *retryable))
}

/// Composes the error for a non-2xx response.
///
/// Documented statuses produce `"{label}: {message}"`; anything else becomes
/// `"HTTP Error {status}: {message}"` and is not retryable.
pub fn classify_http_error(status: u16, message: &str) -> PiiFirewallError {
    match status_label(status) {
        Some((label, retryable)) => PiiFirewallError::Http {
            status,
            message: format!("{}: {}", label, message),
            retryable,
        },
        None => PiiFirewallError::Http {
            status,
            message: format!("HTTP Error {}: {}", status, message),
            retryable: false,
        },
    }
}
