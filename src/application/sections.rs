//! Dashboard sections: what each one fetches, how it narrows the list and
//! how a surviving pair is rendered.

use crate::application::formatting::{escape_html, format_grouped, list_fragment, price_text};
use crate::application::transforms;
use crate::domain::market::TradingPairRecord;
use crate::domain::slots::DisplaySlot;
use std::fmt;

/// Minimum 24h volume (USD, exclusive) for the Daily Trends section
pub const TRENDING_MIN_VOLUME_USD: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    DailyTrends,
    TopTokens,
    Transactions,
    SmartMoney,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::DailyTrends,
        Section::TopTokens,
        Section::Transactions,
        Section::SmartMoney,
    ];

    pub fn slot(&self) -> DisplaySlot {
        match self {
            Self::Overview => DisplaySlot::Overview,
            Self::DailyTrends => DisplaySlot::Trends,
            Self::TopTokens => DisplaySlot::Tokens,
            Self::Transactions => DisplaySlot::Transactions,
            Self::SmartMoney => DisplaySlot::SmartMoney,
        }
    }

    pub fn title(&self) -> &'static str {
        self.slot().title()
    }

    /// Search term sent to the provider; `None` for static sections
    pub fn search_term(&self) -> Option<&'static str> {
        match self {
            Self::Overview => Some("solana"),
            Self::DailyTrends => Some("trending"),
            Self::TopTokens => Some("top"),
            Self::Transactions => None,
            Self::SmartMoney => Some("volume"),
        }
    }

    /// Maximum number of rendered items
    pub fn cap(&self) -> usize {
        match self {
            Self::Overview | Self::SmartMoney => 3,
            Self::DailyTrends | Self::TopTokens => 5,
            Self::Transactions => DEMO_TRANSACTIONS.len(),
        }
    }

    fn header(&self) -> Option<&'static str> {
        match self {
            Self::Overview => Some("Top Solana Pairs:"),
            Self::SmartMoney => Some("High Buy Activity (Whale Proxy):"),
            _ => None,
        }
    }

    /// Narrow the provider list to what this section shows
    pub fn select(&self, pairs: Vec<TradingPairRecord>) -> Vec<TradingPairRecord> {
        let cap = self.cap();
        match self {
            Self::Overview => transforms::take_first(pairs, cap),
            Self::DailyTrends => transforms::filter_min_volume(pairs, TRENDING_MIN_VOLUME_USD, cap),
            Self::TopTokens => transforms::sort_by_liquidity_desc(pairs, cap),
            Self::SmartMoney => transforms::sort_by_buys_desc(pairs, cap),
            Self::Transactions => Vec::new(),
        }
    }

    fn render_item(&self, pair: &TradingPairRecord) -> String {
        let name = escape_html(&pair.base_token.name);
        match self {
            Self::Overview => format!(
                "{}: ${}",
                escape_html(&pair.symbol_pair()),
                price_text(pair)
            ),
            Self::DailyTrends => format!(
                "{}: ${} ({} 24h vol)",
                name,
                price_text(pair),
                pair.volume_h24()
                    .map(format_grouped)
                    .unwrap_or_else(|| "0".to_string())
            ),
            Self::TopTokens => format!(
                "{}: ${} (Liquidity: ${})",
                name,
                price_text(pair),
                format_grouped(pair.liquidity_usd())
            ),
            Self::SmartMoney => format!("{}: {} buys (24h)", name, pair.buys_h24()),
            Self::Transactions => String::new(),
        }
    }

    /// Render already-selected pairs into this section's fragment
    pub fn fragment(&self, selected: &[TradingPairRecord]) -> String {
        if *self == Self::Transactions {
            return transactions_fragment();
        }
        list_fragment(
            self.header(),
            selected
                .iter()
                .take(self.cap())
                .map(|pair| self.render_item(pair)),
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Fixed demo entry; the provider has no transaction listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoTransaction {
    pub pair: &'static str,
    pub amount: &'static str,
    pub usd: f64,
}

pub const DEMO_TRANSACTIONS: [DemoTransaction; 2] = [
    DemoTransaction {
        pair: "SOL/USDC",
        amount: "10 SOL",
        usd: 2000.0,
    },
    DemoTransaction {
        pair: "ETH/WETH",
        amount: "1 ETH",
        usd: 3500.0,
    },
];

pub fn transactions_fragment() -> String {
    list_fragment(
        None,
        DEMO_TRANSACTIONS
            .iter()
            .map(|tx| format!("{}: {} (${})", tx.pair, tx.amount, format_grouped(tx.usd))),
    )
}
