//! Keeps request text and credentials out of debug logs.

use once_cell::sync::Lazy;

/// Set once from `PIIFW_ALLOW_DEBUG_PII`; only affects request text, never the API key.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("PIIFW_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// Text as it may appear in a log line.
pub fn loggable_text(text: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        text.to_string()
    } else {
        redact_sensitive(text)
    }
}

/// Shows the last four characters of a key, e.g. `****abcd`.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
