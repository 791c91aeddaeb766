pub mod core;
pub mod dexscreener;
pub mod in_memory;
pub mod mock;
pub mod observability;

pub use dexscreener::DexScreenerProvider;
pub use in_memory::InMemoryRenderTarget;
pub use mock::MockMarketDataProvider;
