//! Market Data Port
//!
//! Source of price, liquidity and listing data for a token address.

use async_trait::async_trait;

use crate::domain::MarketData;

/// Market data provider (DexScreener in production)
///
/// Implementations never surface transport or parse failures: any problem
/// is logged at the boundary and reported as `None` ("not found").
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Fetch market data from the token's canonical pair
    async fn fetch_market_data(&self, address: &str) -> Option<MarketData>;
}
