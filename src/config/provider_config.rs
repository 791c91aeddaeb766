//! Market data provider configuration parsing from environment variables.

use crate::infrastructure::core::HttpClientSettings;
use crate::infrastructure::dexscreener::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// DexScreener API configuration
#[derive(Debug, Clone)]
pub struct ProviderEnvConfig {
    pub base_url: String,
    /// Chain id used for single-pair lookups
    pub chain: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub max_retries: u32,
}

impl Default for ProviderEnvConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chain: "solana".to_string(),
            request_timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
            max_retries: 0,
        }
    }
}

impl ProviderEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            base_url: env::var("DEXSCREENER_BASE_URL").unwrap_or(defaults.base_url),
            chain: env::var("DEXSCREENER_CHAIN").unwrap_or(defaults.chain),
            request_timeout_ms: parse_u64(
                "DEXSCREENER_REQUEST_TIMEOUT_MS",
                defaults.request_timeout_ms,
            )?,
            connect_timeout_ms: parse_u64(
                "DEXSCREENER_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout_ms,
            )?,
            max_retries: env::var("DEXSCREENER_MAX_RETRIES")
                .unwrap_or_else(|_| defaults.max_retries.to_string())
                .parse::<u32>()
                .context("Failed to parse DEXSCREENER_MAX_RETRIES")?,
        };
        config
            .validate()
            .context("Invalid provider config")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_ms == 0 {
            anyhow::bail!("DEXSCREENER_REQUEST_TIMEOUT_MS must be greater than 0");
        }
        if self.connect_timeout_ms == 0 {
            anyhow::bail!("DEXSCREENER_CONNECT_TIMEOUT_MS must be greater than 0");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn http_settings(&self) -> HttpClientSettings {
        HttpClientSettings {
            request_timeout: self.request_timeout(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            max_retries: self.max_retries,
            ..Default::default()
        }
    }
}

fn parse_u64(key: &str, default: u64) -> Result<u64> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .context(format!("Failed to parse {}", key))
}
