//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: Market data and promotion status
//! - Helius: Solana holder lists
//! - Moralis: Ethereum / BSC holder lists
//! - Holder router: Per-chain dispatch between holder providers
//! - CLI: Command-line interface handlers

pub mod dexscreener;
pub mod helius;
pub mod moralis;
pub mod holder_router;
pub mod cli;
pub mod wire;

pub use dexscreener::DexScreenerClient;
pub use helius::HeliusClient;
pub use moralis::MoralisClient;
pub use holder_router::ChainHolderRouter;
pub use cli::CliApp;
