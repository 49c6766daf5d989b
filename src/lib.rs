//! apescan - Token Risk Scanner Library
//!
//! Aggregates DEX market data, holder distribution and contract checks into
//! a single risk report for Solana, Ethereum and BSC tokens.
//!
//! # Modules
//!
//! - `domain`: Core types and heuristics (Chain, HolderAnalysis, SecurityAnalysis, TokenReport)
//! - `ports`: Trait abstractions (MarketDataSource, HolderSource, SecurityCheck)
//! - `adapters`: External implementations (DexScreener, Helius, Moralis, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Token analyzer and security scorer

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;

pub use application::{AnalysisError, TokenAnalyzer};
pub use domain::{Chain, TokenReport};
