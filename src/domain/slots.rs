use serde::{Deserialize, Serialize};
use std::fmt;

/// Page region that receives a rendered fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DisplaySlot {
    Overview,
    Trends,
    Tokens,
    Transactions,
    SmartMoney,
    DcaResult,
}

impl DisplaySlot {
    pub const ALL: [DisplaySlot; 6] = [
        DisplaySlot::Overview,
        DisplaySlot::Trends,
        DisplaySlot::Tokens,
        DisplaySlot::Transactions,
        DisplaySlot::SmartMoney,
        DisplaySlot::DcaResult,
    ];

    /// Element id of the region on the page
    pub fn id(&self) -> &'static str {
        match self {
            Self::Overview => "overview-data",
            Self::Trends => "trends-data",
            Self::Tokens => "tokens-data",
            Self::Transactions => "tx-data",
            Self::SmartMoney => "smart-money-data",
            Self::DcaResult => "dca-result",
        }
    }

    /// Human readable heading used by page renderers
    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Trends => "Daily Trends",
            Self::Tokens => "Top Tokens",
            Self::Transactions => "Transactions",
            Self::SmartMoney => "Smart Money Tracker",
            Self::DcaResult => "DCA Checker",
        }
    }
}

impl fmt::Display for DisplaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
