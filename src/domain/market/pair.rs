use serde::{Deserialize, Deserializer, Serialize};

/// Token side of a trading pair as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    pub address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liquidity {
    pub usd: Option<f64>,
    pub base: Option<f64>,
    pub quote: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub h24: Option<f64>,
    pub h6: Option<f64>,
    pub h1: Option<f64>,
    pub m5: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub buys: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sells: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Txns {
    #[serde(deserialize_with = "null_as_default")]
    pub h24: TxnCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub h6: TxnCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub h1: TxnCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub m5: TxnCounts,
}

/// A single DEX trading pair record.
///
/// Every field is optional on the wire. A record with missing fields still
/// deserializes; the accessors below give the values the sections sort and
/// filter on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TradingPairRecord {
    pub chain_id: Option<String>,
    pub dex_id: Option<String>,
    pub url: Option<String>,
    pub pair_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub base_token: TokenInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub quote_token: TokenInfo,
    pub price_usd: Option<String>,
    pub liquidity: Option<Liquidity>,
    pub volume: Option<Volume>,
    pub txns: Option<Txns>,
}

impl TradingPairRecord {
    /// Pool liquidity in USD, `0.0` when the provider omits it
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity
            .and_then(|l| l.usd)
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Trailing 24h volume, `None` when absent or not a finite number
    pub fn volume_h24(&self) -> Option<f64> {
        self.volume.and_then(|v| v.h24).filter(|v| v.is_finite())
    }

    pub fn buys_h24(&self) -> u64 {
        self.txns.map(|t| t.h24.buys).unwrap_or(0)
    }

    /// `priceUsd` parsed as a number
    pub fn price_usd_value(&self) -> Option<f64> {
        self.price_usd
            .as_deref()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite())
    }

    /// `BASE/QUOTE` symbol pair
    pub fn symbol_pair(&self) -> String {
        format!("{}/{}", self.base_token.symbol, self.quote_token.symbol)
    }
}

/// `null` on the wire reads as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
