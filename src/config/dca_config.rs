//! DCA simulation parameters from environment variables.

use crate::domain::dca::DcaPlan;
use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, Copy)]
pub struct DcaEnvConfig {
    pub monthly_investment: f64,
    pub months: u32,
    pub monthly_decay: f64,
}

impl Default for DcaEnvConfig {
    fn default() -> Self {
        let plan = DcaPlan::default();
        Self {
            monthly_investment: plan.monthly_investment,
            months: plan.months,
            monthly_decay: plan.monthly_decay,
        }
    }
}

impl DcaEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            monthly_investment: Self::parse_f64(
                "DCA_MONTHLY_INVESTMENT",
                defaults.monthly_investment,
            )?,
            months: env::var("DCA_MONTHS")
                .unwrap_or_else(|_| defaults.months.to_string())
                .parse::<u32>()
                .context("Failed to parse DCA_MONTHS")?,
            monthly_decay: Self::parse_f64("DCA_MONTHLY_DECAY", defaults.monthly_decay)?,
        })
    }

    /// Build the plan, rejecting values the simulation cannot run with
    pub fn to_plan(&self) -> Result<DcaPlan> {
        let plan = DcaPlan {
            monthly_investment: self.monthly_investment,
            months: self.months,
            monthly_decay: self.monthly_decay,
        };
        plan.validate()
            .map_err(|e| anyhow::anyhow!("Invalid DCA config: {}", e))?;
        Ok(plan)
    }

    fn parse_f64(key: &str, default: f64) -> Result<f64> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f64>()
            .context(format!("Failed to parse {}", key))
    }
}
