//! Pure list transforms applied between fetch and render.

use crate::domain::market::TradingPairRecord;
use std::cmp::Ordering;

pub fn take_first(pairs: Vec<TradingPairRecord>, limit: usize) -> Vec<TradingPairRecord> {
    pairs.into_iter().take(limit).collect()
}

/// Keep pairs whose 24h volume is strictly above `threshold`, preserving
/// provider order. Pairs without a volume figure are dropped.
pub fn filter_min_volume(
    pairs: Vec<TradingPairRecord>,
    threshold: f64,
    limit: usize,
) -> Vec<TradingPairRecord> {
    pairs
        .into_iter()
        .filter(|p| p.volume_h24().is_some_and(|v| v > threshold))
        .take(limit)
        .collect()
}

/// Highest liquidity first. Ties keep provider order.
pub fn sort_by_liquidity_desc(
    mut pairs: Vec<TradingPairRecord>,
    limit: usize,
) -> Vec<TradingPairRecord> {
    pairs.sort_by(|a, b| descending(a.liquidity_usd(), b.liquidity_usd()));
    pairs.truncate(limit);
    pairs
}

/// Most 24h buys first. Ties keep provider order.
pub fn sort_by_buys_desc(mut pairs: Vec<TradingPairRecord>, limit: usize) -> Vec<TradingPairRecord> {
    pairs.sort_by(|a, b| b.buys_h24().cmp(&a.buys_h24()));
    pairs.truncate(limit);
    pairs
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
