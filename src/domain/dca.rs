//! Dollar-cost averaging simulation.
//!
//! The provider exposes no price history, so past prices are synthesized from
//! the current price with a constant monthly decay. The result is an
//! approximation, not a backtest.

use crate::domain::errors::DcaError;
use serde::{Deserialize, Serialize};

/// Parameters of the synthetic DCA run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcaPlan {
    /// USD invested every month
    pub monthly_investment: f64,
    pub months: u32,
    /// Fractional price drop assumed per month going back in time
    pub monthly_decay: f64,
}

impl Default for DcaPlan {
    fn default() -> Self {
        Self {
            monthly_investment: 100.0,
            months: 12,
            monthly_decay: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcaSimulationResult {
    pub total_invested: f64,
    pub total_tokens: f64,
    pub avg_price: f64,
    pub current_price: f64,
}

impl DcaPlan {
    pub fn validate(&self) -> Result<(), DcaError> {
        if self.months == 0 {
            return Err(DcaError::InvalidPlan {
                reason: "months must be at least 1".to_string(),
            });
        }
        if !self.monthly_investment.is_finite() || self.monthly_investment <= 0.0 {
            return Err(DcaError::InvalidPlan {
                reason: format!(
                    "monthly investment must be positive, got {}",
                    self.monthly_investment
                ),
            });
        }
        if !self.monthly_decay.is_finite() {
            return Err(DcaError::InvalidPlan {
                reason: "monthly decay must be a finite number".to_string(),
            });
        }
        Ok(())
    }

    /// Synthetic price `month` months ago
    pub fn synthetic_price(&self, current_price: f64, month: u32) -> f64 {
        current_price * (1.0 - self.monthly_decay * f64::from(month))
    }

    /// Run the simulation against `current_price`.
    ///
    /// Fails before accumulating anything if the price is not positive or if
    /// the decay drives any synthetic price to zero or below.
    pub fn simulate(&self, current_price: f64) -> Result<DcaSimulationResult, DcaError> {
        self.validate()?;

        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(DcaError::NonPositivePrice {
                price: current_price,
            });
        }

        let mut total_invested = 0.0;
        let mut total_tokens = 0.0;

        for month in 0..self.months {
            let past_price = self.synthetic_price(current_price, month);
            if past_price <= 0.0 {
                return Err(DcaError::NonPositiveSyntheticPrice {
                    month,
                    price: past_price,
                });
            }
            total_invested += self.monthly_investment;
            total_tokens += self.monthly_investment / past_price;
        }

        Ok(DcaSimulationResult {
            total_invested,
            total_tokens,
            avg_price: total_invested / total_tokens,
            current_price,
        })
    }
}
