//! Configuration for the augmentation client

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/ai/examples";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENDPOINT_ENV: &str = "PATTERN_SENSE_ENDPOINT";
pub const TIMEOUT_ENV: &str = "PATTERN_SENSE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AugmentConfig {
    /// Defaults overlaid with `PATTERN_SENSE_ENDPOINT` / `PATTERN_SENSE_TIMEOUT_MS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout_ms = raw.trim().parse().map_err(|err| {
                Error::Config(format!("invalid {TIMEOUT_ENV} value '{raw}': {err}"))
            })?;
        }

        Ok(config)
    }

    /// Timeout in milliseconds, with 0 meaning the default
    pub fn effective_timeout_ms(&self) -> u64 {
        if self.timeout_ms == 0 {
            DEFAULT_TIMEOUT_MS
        } else {
            self.timeout_ms
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("augmentation endpoint is empty".to_string()));
        }
        Ok(())
    }
}
