use super::pair::TradingPairRecord;
use serde::Deserialize;

/// Provider response for both the search and the pair lookup endpoints.
///
/// A missing or `null` `pairs` list is treated as "no results".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    #[serde(deserialize_with = "null_as_empty")]
    pub pairs: Vec<TradingPairRecord>,
    pub pair: Option<TradingPairRecord>,
}

impl QueryResult {
    /// Single-pair lookup result: `pair` wins, otherwise the first listed pair
    pub fn into_single(self) -> Option<TradingPairRecord> {
        self.pair.or_else(|| self.pairs.into_iter().next())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TradingPairRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<TradingPairRecord>>::deserialize(deserializer)?.unwrap_or_default())
}
