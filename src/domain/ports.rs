use crate::domain::errors::ProviderError;
use crate::domain::market::TradingPairRecord;
use crate::domain::slots::DisplaySlot;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Search the provider's pair listing for `term`.
    /// A response without a pair list yields an empty vector.
    async fn search(&self, term: &str) -> Result<Vec<TradingPairRecord>, ProviderError>;

    /// Look up a single pair by chain and address. `Ok(None)` means not found.
    async fn pair(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Option<TradingPairRecord>, ProviderError>;
}

/// Receives rendered fragments, one slot at a time.
/// Rendering into a slot fully replaces its previous content.
pub trait RenderTarget: Send + Sync {
    fn render(&self, slot: DisplaySlot, fragment: &str) -> Result<()>;
}
