//! Configuration for the fetch layer.
//!
//! The config file is optional: a missing or empty file yields
//! `FetchConfig::default()`. Unknown keys are silently ignored by serde
//! (with `deny_unknown_fields` off). Only transport settings live here;
//! the safety cap and default item cap are build-time constants on the
//! pipeline, not configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Transport settings for the HTTP fetcher.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified. Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Overall request timeout in seconds, covering the full body read.
    pub request_timeout_secs: u64,

    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            user_agent: concat!("feedsnap/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(FetchConfig::default())`
    /// - Empty file → `Ok(FetchConfig::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        let config: FetchConfig = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            connect_timeout_secs = config.connect_timeout_secs,
            request_timeout_secs = config.request_timeout_secs,
            "Loaded configuration"
        );
        Ok(config)
    }
}
