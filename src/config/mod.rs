//! Configuration module for dexboard.
//!
//! Structured configuration loading from environment variables, organized by
//! concern: Provider, DCA and Observability.

mod dca_config;
mod observability_config;
mod provider_config;

pub use dca_config::DcaEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use provider_config::ProviderEnvConfig;

use crate::application::DashboardSettings;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Which market data provider backs the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid DEXBOARD_MODE: {}. Must be 'live' or 'mock'", s),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub provider: ProviderEnvConfig,
    pub dca: DcaEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Live,
            provider: ProviderEnvConfig::default(),
            dca: DcaEnvConfig::default(),
            observability: ObservabilityEnvConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mode_str = env::var("DEXBOARD_MODE").unwrap_or_else(|_| "live".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let provider = ProviderEnvConfig::from_env().context("Failed to load provider config")?;
        let dca = DcaEnvConfig::from_env().context("Failed to load DCA config")?;
        let observability = ObservabilityEnvConfig::from_env();

        Ok(Self {
            mode,
            provider,
            dca,
            observability,
        })
    }

    pub fn to_dashboard_settings(&self) -> Result<DashboardSettings> {
        Ok(DashboardSettings {
            chain: self.provider.chain.clone(),
            request_timeout: self.provider.request_timeout(),
            dca_plan: self.dca.to_plan()?,
        })
    }
}
