pub mod pair;
pub mod query;

pub use pair::{Liquidity, TokenInfo, TradingPairRecord, TxnCounts, Txns, Volume};
pub use query::QueryResult;
