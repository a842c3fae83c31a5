// piifw-core/src/lib.rs
//! # PII Firewall Core Library
//!
//! `piifw-core` is the client side of the PII Firewall Edge redaction API.
//! Detection runs entirely on the hosted service; this crate builds requests,
//! validates input before anything leaves the process, decodes results into a
//! uniform shape and maps every failure to a typed error carrying a status
//! code and a retryable flag.
//!
//! ## Modules
//!
//! * `client`: The blocking [`Client`] and its [`ClientBuilder`].
//! * `classifier`: The status table that decides messages and retryability.
//! * `config`: [`ClientConfig`] loading from YAML files and environment variables.
//! * `engine`: The [`RedactionService`] trait front ends program against.
//! * `errors`: [`PiiFirewallError`], the single error type of the crate.
//! * `headless`: One-shot helpers.
//! * `mode`: [`RedactionMode`] and its endpoint/style components.
//! * `result`: [`RedactionResult`] and the wire schema.
//! * `validators`: Pre-flight checks for text and configuration.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use piifw_core::{Client, PiiFirewallError};
//!
//! fn main() -> Result<(), PiiFirewallError> {
//!     let client = Client::new("YOUR_API_KEY", None)?;
//!
//!     match client.redact_deep("Call Jane Doe on 555-1234") {
//!         Ok(result) if result.has_pii() => println!("{}", result.redacted()),
//!         Ok(_) => println!("no PII found"),
//!         Err(e) if e.is_retryable() => eprintln!("transient failure, retry later: {}", e),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, PiiFirewallError>`. The crate never
//! retries; [`PiiFirewallError::is_retryable`] tells the caller whether backing
//! off and repeating the request is worthwhile.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod client;
pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod mode;
pub mod result;
pub mod sensitive;
pub mod validators;

/// Re-exports the client and its builder.
pub use client::{Client, ClientBuilder};

/// Re-exports the error type and the status classifier.
pub use errors::{PiiFirewallError, Result};
pub use classifier::{classify_http_error, STATUS_TABLE};

/// Re-exports configuration types and the fixed wire constants.
pub use config::{ClientConfig, API_HOST, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub use engine::RedactionService;
pub use mode::{Endpoint, RedactionMode, RedactionStyle};
pub use result::RedactionResult;

/// Re-exports one-shot helpers.
pub use headless::{create_client, headless_redact};
