// piifw-core/src/engine.rs
//! Defines the `RedactionService` trait.
//!
//! Front ends (the CLI, embedding applications) depend on this trait rather
//! than on [`Client`](crate::Client) directly, so a different transport or a
//! test double can stand in for the hosted API.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::Result;
use crate::mode::RedactionMode;
use crate::result::RedactionResult;

/// Anything that can turn text into a [`RedactionResult`].
pub trait RedactionService: Send + Sync {
    /// Redacts `text` using the endpoint and style selected by `mode`.
    ///
    /// Implementations must reject empty or whitespace-only text with
    /// [`PiiFirewallError::InvalidInput`](crate::PiiFirewallError::InvalidInput)
    /// before doing any I/O.
    fn redact(&self, text: &str, mode: RedactionMode) -> Result<RedactionResult>;

    /// Short description of where redactions are performed, for diagnostics.
    fn describe(&self) -> String;
}
