//! Application Layer - Use cases
//!
//! - `analyzer`: Token scan pipeline producing `TokenReport`s
//! - `scorer`: Contract checks plus security scoring

pub mod analyzer;
pub mod scorer;

pub use analyzer::{AnalysisError, DataSource, TokenAnalyzer};
pub use scorer::SecurityScorer;
