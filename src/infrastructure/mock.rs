use crate::domain::errors::ProviderError;
use crate::domain::market::{Liquidity, TokenInfo, TradingPairRecord, TxnCounts, Txns, Volume};
use crate::domain::ports::MarketDataProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;

/// Address that resolves to a pair in the demo data set
pub const DEMO_PAIR_ADDRESS: &str = "DemoSoLUsdcPair1111111111111111111111111111";

/// Scripted provider for tests and offline runs.
///
/// Search terms and pair addresses without a script return "no results".
#[derive(Clone, Default)]
pub struct MockMarketDataProvider {
    searches: HashMap<String, Result<Vec<TradingPairRecord>, ProviderError>>,
    pairs: HashMap<String, Result<Option<TradingPairRecord>, ProviderError>>,
    delays: HashMap<String, Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic sample listing served for every section's search term
    pub fn demo() -> Self {
        let listing = demo_listing();
        let mut provider = Self::new();
        for term in ["solana", "trending", "top", "volume"] {
            provider = provider.with_search(term, listing.clone());
        }
        provider.with_pair(DEMO_PAIR_ADDRESS, listing[0].clone())
    }

    pub fn with_search(mut self, term: &str, pairs: Vec<TradingPairRecord>) -> Self {
        self.searches.insert(term.to_string(), Ok(pairs));
        self
    }

    pub fn with_search_error(mut self, term: &str, error: ProviderError) -> Self {
        self.searches.insert(term.to_string(), Err(error));
        self
    }

    pub fn with_pair(mut self, address: &str, pair: TradingPairRecord) -> Self {
        self.pairs.insert(address.to_string(), Ok(Some(pair)));
        self
    }

    pub fn with_pair_error(mut self, address: &str, error: ProviderError) -> Self {
        self.pairs.insert(address.to_string(), Err(error));
        self
    }

    /// Stall calls for `key` (a search term or pair address)
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    /// Every call made so far, as `search:<term>` or `pair:<chain>/<address>`
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    async fn record(&self, call: String, key: &str) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketDataProvider {
    async fn search(&self, term: &str) -> Result<Vec<TradingPairRecord>, ProviderError> {
        self.record(format!("search:{term}"), term).await;
        let result = self.searches.get(term).cloned().unwrap_or_else(|| Ok(Vec::new()));
        if let Ok(pairs) = &result {
            info!("MockMarketDataProvider: search '{}' -> {} pairs", term, pairs.len());
        }
        result
    }

    async fn pair(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Option<TradingPairRecord>, ProviderError> {
        self.record(format!("pair:{chain}/{address}"), address).await;
        self.pairs.get(address).cloned().unwrap_or(Ok(None))
    }
}

/// Build a pair record from the handful of fields the sections use
pub fn sample_pair(
    base: (&str, &str),
    quote: (&str, &str),
    price_usd: &str,
    liquidity_usd: f64,
    volume_h24: f64,
    buys_h24: u64,
) -> TradingPairRecord {
    TradingPairRecord {
        chain_id: Some("solana".to_string()),
        base_token: TokenInfo {
            address: None,
            name: base.0.to_string(),
            symbol: base.1.to_string(),
        },
        quote_token: TokenInfo {
            address: None,
            name: quote.0.to_string(),
            symbol: quote.1.to_string(),
        },
        price_usd: Some(price_usd.to_string()),
        liquidity: Some(Liquidity {
            usd: Some(liquidity_usd),
            ..Default::default()
        }),
        volume: Some(Volume {
            h24: Some(volume_h24),
            ..Default::default()
        }),
        txns: Some(Txns {
            h24: TxnCounts {
                buys: buys_h24,
                sells: buys_h24 / 2,
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn demo_listing() -> Vec<TradingPairRecord> {
    let usdc = ("USD Coin", "USDC");
    let sol = ("Wrapped SOL", "SOL");
    vec![
        sample_pair(sol, usdc, "142.37", 18_450_000.0, 96_300_000.0, 41_200),
        sample_pair(("Jupiter", "JUP"), usdc, "0.8123", 6_120_000.0, 12_800_000.0, 9_870),
        sample_pair(("Bonk", "BONK"), sol, "0.00002134", 3_900_000.0, 8_400_000.0, 15_340),
        sample_pair(("dogwifhat", "WIF"), sol, "1.874", 9_750_000.0, 22_100_000.0, 12_010),
        sample_pair(("Raydium", "RAY"), usdc, "2.416", 2_230_000.0, 95_500.0, 1_820),
        sample_pair(("Pyth Network", "PYTH"), usdc, "0.3311", 1_460_000.0, 3_050_000.0, 2_940),
        sample_pair(("Jito", "JTO"), sol, "2.77", 4_880_000.0, 61_000.0, 1_150),
    ]
}
