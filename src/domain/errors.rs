use thiserror::Error;

/// Errors returned by a market data provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    #[error("Provider returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {reason}")]
    Malformed { endpoint: String, reason: String },

    #[error("Service timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

impl ProviderError {
    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::Malformed { .. } => "malformed",
            Self::Timeout { .. } => "timeout",
        }
    }
}

/// Errors raised by the DCA simulation guards
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DcaError {
    #[error("Current price must be a positive number, got {price}")]
    NonPositivePrice { price: f64 },

    #[error("Synthetic price for month {month} is not positive ({price:.4})")]
    NonPositiveSyntheticPrice { month: u32, price: f64 },

    #[error("Invalid DCA plan: {reason}")]
    InvalidPlan { reason: String },
}
