//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement.
//! Following hexagonal architecture, these traits abstract:
//! - Market data (DEX pair listing)
//! - Token holder lists (per-chain providers)
//! - Contract security checks

pub mod market_data;
pub mod holders;
pub mod checks;
pub mod mocks;

// Re-export main traits and types
pub use market_data::MarketDataSource;
pub use holders::HolderSource;
pub use checks::{ConstantCheck, SecurityCheck};
