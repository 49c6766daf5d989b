//! Domain Layer - Core types and heuristics for token risk analysis
//!
//! This module contains pure domain types and logic with no I/O.
//! All external interactions happen through the ports layer.
//!
//! - `chain`: Supported chains and address-shape detection
//! - `holders`: Holder concentration and bundle heuristics
//! - `security`: Composite security score and warnings
//! - `report`: Market snapshot and the aggregated token report

pub mod chain;
pub mod holders;
pub mod security;
pub mod report;

pub use chain::{detect_chain, Chain, ChainError};
pub use holders::{
    analyze_holders, classify_concentration, detect_bundles, rank_holders, HolderAnalysis,
    HolderDistribution, HolderEntry,
};
pub use security::{
    score, RiskLevel, SecurityAnalysis, SecurityWarning, Severity, StaticChecks,
};
pub use report::{MarketData, PromotionInfo, PromotionType, SocialLink, TokenReport, WebsiteLink};
