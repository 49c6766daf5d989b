//! DexScreener Adapter
//!
//! Market data (price, liquidity, volume, listing age) and promotion status
//! for a token, read from its first listed DEX pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use apescan::adapters::dexscreener::DexScreenerClient;
//!
//! let client = DexScreenerClient::new()?;
//! let market = client.get_market_data("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263").await?;
//! println!("{} @ ${}", market.symbol, market.price);
//! ```

mod client;
mod types;

pub use client::{parse_market_data, DexScreenerClient, DexScreenerConfig, DexScreenerError};
pub use types::{Pair, TokenPairsResponse};
