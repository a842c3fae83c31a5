//! Configuration management for `piifw-core`.
//!
//! A [`ClientConfig`] gathers the settings a [`Client`](crate::Client) needs
//! from YAML files, environment variables or code, and can be layered so that
//! more specific sources win. Values are only validated when a client is built
//! from the configuration.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::errors::PiiFirewallError;
use crate::sensitive::mask_api_key;

/// Production host of the redaction API.
pub const DEFAULT_BASE_URL: &str = "https://pii-firewall-edge.p.rapidapi.com";

/// Value of the `X-RapidAPI-Host` header. Fixed even when the base URL is overridden.
pub const API_HOST: &str = "pii-firewall-edge.p.rapidapi.com";

pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_KEY: &str = "PIIFW_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "PIIFW_TIMEOUT_SECS";
pub const ENV_BASE_URL: &str = "PIIFW_BASE_URL";

/// Partially specified client settings.
#[derive(Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// RapidAPI key forwarded with every request.
    pub api_key: Option<String>,
    /// Hard upper bound on each request, in seconds (default: 10).
    pub timeout_secs: Option<u64>,
    /// Alternate API host, e.g. a staging deployment.
    pub base_url: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("timeout_secs", &self.timeout_secs)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading client configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ClientConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Reads `PIIFW_API_KEY`, `PIIFW_TIMEOUT_SECS` and `PIIFW_BASE_URL`.
    pub fn from_env() -> Result<Self, PiiFirewallError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PiiFirewallError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                PiiFirewallError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?),
            None => None,
        };

        Ok(ClientConfig {
            api_key: lookup(ENV_API_KEY),
            timeout_secs,
            base_url: lookup(ENV_BASE_URL),
        })
    }

    /// Layers `overrides` on top of `self`; any value set in `overrides` wins.
    pub fn merge(self, overrides: ClientConfig) -> ClientConfig {
        ClientConfig {
            api_key: overrides.api_key.or(self.api_key),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs),
            base_url: overrides.base_url.or(self.base_url),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_unset() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn debug_output_masks_api_key() {
        let config = ClientConfig {
            api_key: Some("super-secret-key-1234".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("****1234"));
    }

    #[test]
    fn lookup_reads_all_variables() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_KEY, "k"),
            (ENV_TIMEOUT_SECS, " 30 "),
            (ENV_BASE_URL, "http://localhost:9000"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    #[test]
    fn lookup_rejects_non_numeric_timeout() {
        let err = ClientConfig::from_lookup(|name| {
            (name == ENV_TIMEOUT_SECS).then(|| "ten".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, PiiFirewallError::Config(_)));
        assert!(err.message().contains("ten"));
    }

    #[test]
    fn merge_prefers_overrides() {
        let file = ClientConfig {
            api_key: Some("file-key".into()),
            timeout_secs: Some(5),
            base_url: Some("http://file".into()),
        };
        let cli = ClientConfig {
            api_key: Some("cli-key".into()),
            ..Default::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.api_key.as_deref(), Some("cli-key"));
        assert_eq!(merged.timeout_secs, Some(5));
        assert_eq!(merged.base_url.as_deref(), Some("http://file"));
    }
}
