//! Redaction mode selection.
//!
//! The service exposes two detection profiles (fast, deep) and two output
//! styles (label, mask). [`RedactionMode`] is the closed set of their four
//! combinations; no other pairing can be expressed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-side detection profile, selected by endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Structured PII only (emails, phones, SSNs, cards, keys, IBANs).
    Fast,
    /// Fast coverage plus human names and addresses.
    Deep,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Fast => "/v1/redact/fast",
            Endpoint::Deep => "/v1/redact/deep",
        }
    }
}

/// Output format for detected PII, sent as the `mode` body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedactionStyle {
    /// Replace with a type tag such as `[EMAIL]`.
    Label,
    /// Replace with a run of asterisks.
    Mask,
}

impl RedactionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            RedactionStyle::Label => "label",
            RedactionStyle::Mask => "mask",
        }
    }
}

/// One of the four operations offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedactionMode {
    Fast,
    FastMasked,
    Deep,
    DeepMasked,
}

impl RedactionMode {
    pub const ALL: [RedactionMode; 4] = [
        RedactionMode::Fast,
        RedactionMode::FastMasked,
        RedactionMode::Deep,
        RedactionMode::DeepMasked,
    ];

    pub fn new(endpoint: Endpoint, style: RedactionStyle) -> Self {
        match (endpoint, style) {
            (Endpoint::Fast, RedactionStyle::Label) => RedactionMode::Fast,
            (Endpoint::Fast, RedactionStyle::Mask) => RedactionMode::FastMasked,
            (Endpoint::Deep, RedactionStyle::Label) => RedactionMode::Deep,
            (Endpoint::Deep, RedactionStyle::Mask) => RedactionMode::DeepMasked,
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            RedactionMode::Fast | RedactionMode::FastMasked => Endpoint::Fast,
            RedactionMode::Deep | RedactionMode::DeepMasked => Endpoint::Deep,
        }
    }

    pub fn style(self) -> RedactionStyle {
        match self {
            RedactionMode::Fast | RedactionMode::Deep => RedactionStyle::Label,
            RedactionMode::FastMasked | RedactionMode::DeepMasked => RedactionStyle::Mask,
        }
    }
}

impl fmt::Display for RedactionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RedactionMode::Fast => "fast",
            RedactionMode::FastMasked => "fast-masked",
            RedactionMode::Deep => "deep",
            RedactionMode::DeepMasked => "deep-masked",
        };
        f.write_str(name)
    }
}
