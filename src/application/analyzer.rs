//! Token Analyzer
//!
//! Turns a token address into a `TokenReport`:
//! chain detection -> market data -> holders -> heuristics -> security score.
//!
//! Missing market data always fails the request. Missing holder data (no
//! holder with a balance) is chain dependent: Solana requests fail, Ethereum
//! and BSC requests continue with an empty holder analysis.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::Instrument;

use super::scorer::SecurityScorer;
use crate::adapters::dexscreener::{DexScreenerClient, DexScreenerConfig};
use crate::adapters::helius::{HeliusClient, HeliusConfig};
use crate::adapters::holder_router::ChainHolderRouter;
use crate::adapters::moralis::{MoralisClient, MoralisConfig};
use crate::config::Config;
use crate::domain::{analyze_holders, detect_chain, Chain, HolderAnalysis, TokenReport};
use crate::ports::{HolderSource, MarketDataSource};

/// Upstream data a report could not do without
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    MarketData,
    SolanaHolders,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::MarketData => write!(f, "market data"),
            DataSource::SolanaHolders => write!(f, "Solana holder data"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid token address: '{0}'")]
    InvalidAddress(String),
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(DataSource),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Reply shown to the person who requested the scan
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::InvalidAddress(_) => {
                "❌ Could not determine the blockchain for this token address.\n\
                 Please make sure the address is valid for Solana, Ethereum, or BSC."
            }
            AnalysisError::UpstreamUnavailable(DataSource::MarketData) => {
                "❌ Could not retrieve token data."
            }
            AnalysisError::UpstreamUnavailable(DataSource::SolanaHolders) => {
                "❌ Could not retrieve real holder data from Helius API.\n\
                 This token may not have sufficient holder data or the API is unavailable.\n\
                 Please try a different token or check back later."
            }
            AnalysisError::Internal(_) => {
                "❌ An error occurred while scanning the token. Please try again later."
            }
        }
    }
}

/// Aggregates market, holder and security data into token reports
///
/// Holds no per-request state; share it behind an `Arc` to serve
/// concurrent scans.
#[derive(Clone)]
pub struct TokenAnalyzer {
    market: Arc<dyn MarketDataSource>,
    holders: Arc<dyn HolderSource>,
    scorer: SecurityScorer,
}

impl TokenAnalyzer {
    pub fn new(
        market: Arc<dyn MarketDataSource>,
        holders: Arc<dyn HolderSource>,
        scorer: SecurityScorer,
    ) -> Self {
        Self {
            market,
            holders,
            scorer,
        }
    }

    /// Build the production pipeline (DexScreener, Helius, Moralis, stub checks)
    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        let market = DexScreenerClient::with_config(DexScreenerConfig::from(config))
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;
        let helius_config = HeliusConfig::from(config);
        if helius_config.api_key.is_none() {
            tracing::warn!("No Helius API key configured, Solana holder lookups will likely fail");
        }
        let helius = HeliusClient::with_config(helius_config)
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;
        let moralis = MoralisClient::with_config(MoralisConfig::from(config))
            .map_err(|e| AnalysisError::Internal(e.to_string()))?;

        let router = ChainHolderRouter::new()
            .with_provider(Arc::new(helius))
            .with_provider(Arc::new(moralis));

        Ok(Self::new(
            Arc::new(market),
            Arc::new(router),
            SecurityScorer::default(),
        ))
    }

    /// Analyze a token, detecting its chain from the address unless given
    ///
    /// A given chain must belong to the same address family as the address,
    /// so it can only choose between Ethereum and BSC for `0x` addresses.
    pub async fn analyze(
        &self,
        address: &str,
        chain: Option<Chain>,
    ) -> Result<TokenReport, AnalysisError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AnalysisError::InvalidAddress(address.to_string()));
        }

        let detected = detect_chain(address)
            .map_err(|_| AnalysisError::InvalidAddress(address.to_string()))?;
        // An explicit chain only picks between chains sharing the detected address family
        let chain = match chain {
            None => detected,
            Some(chain) if chain.is_evm() == detected.is_evm() => chain,
            Some(chain) => {
                tracing::warn!("Address {} is not a {} address", address, chain);
                return Err(AnalysisError::InvalidAddress(address.to_string()));
            }
        };

        let span = tracing::info_span!("analyze", %address, %chain);
        self.run(address, chain).instrument(span).await
    }

    async fn run(&self, address: &str, chain: Chain) -> Result<TokenReport, AnalysisError> {
        let market = self
            .market
            .fetch_market_data(address)
            .await
            .ok_or(AnalysisError::UpstreamUnavailable(DataSource::MarketData))?;
        tracing::debug!(
            "Market data from {}: {} ({}) on {}",
            self.market.name(),
            market.name,
            market.symbol,
            market.dex
        );

        let fetched = self
            .holders
            .fetch_holders(address, chain)
            .await
            .map(analyze_holders)
            .filter(|analysis| !analysis.is_empty());
        let holder_analysis = match fetched {
            Some(analysis) => analysis,
            None => match chain {
                Chain::Solana => {
                    tracing::warn!("No holder data for Solana token, aborting analysis");
                    return Err(AnalysisError::UpstreamUnavailable(DataSource::SolanaHolders));
                }
                Chain::Ethereum | Chain::Bsc => {
                    tracing::warn!("No holder data for {} token, using empty holder analysis", chain);
                    HolderAnalysis::default()
                }
            },
        };

        let security_analysis = self.scorer.assess(address, chain, &holder_analysis).await;
        tracing::info!(
            score = security_analysis.security_score,
            risk = %security_analysis.risk_level,
            holders = holder_analysis.total_holders,
            "Analysis complete for {}",
            market.symbol
        );

        Ok(TokenReport {
            chain,
            address: address.to_string(),
            explorer_url: chain.explorer_url(address),
            market,
            holder_analysis,
            security_analysis,
            analysis_timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HolderEntry, MarketData, PromotionInfo};
    use crate::ports::mocks::{MockHolders, MockMarketData};

    const EVM_TOKEN: &str = "0x6982508145454ce325ddbe47a25d4ec3d2311933";
    const SOLANA_MINT: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";

    fn market() -> MarketData {
        MarketData {
            name: "Pepe".to_string(),
            symbol: "PEPE".to_string(),
            price: 0.00001,
            market_cap: 4_000_000_000.0,
            fdv: 4_000_000_000.0,
            volume_24h: 500_000_000.0,
            liquidity: 30_000_000.0,
            price_change_1h: 0.0,
            price_change_6h: 0.0,
            price_change_24h: 2.0,
            dex: "uniswap".to_string(),
            pair_address: "0xpair".to_string(),
            pair_created_at: 0,
            promotion: PromotionInfo::default(),
        }
    }

    fn analyzer(market: MockMarketData, holders: MockHolders) -> TokenAnalyzer {
        TokenAnalyzer::new(Arc::new(market), Arc::new(holders), SecurityScorer::default())
    }

    #[tokio::test]
    async fn test_invalid_address_makes_no_calls() {
        let market = MockMarketData::new();
        let holders = MockHolders::new();
        let analyzer = analyzer(market.clone(), holders.clone());

        let err = analyzer.analyze("not-an-address", None).await.unwrap_err();
        assert_eq!(err, AnalysisError::InvalidAddress("not-an-address".to_string()));
        assert!(analyzer.analyze("   ", None).await.is_err());
        assert!(market.get_calls().is_empty());
        assert!(holders.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_address_is_trimmed() {
        let market = MockMarketData::new().with_response(EVM_TOKEN, market());
        let analyzer = analyzer(market.clone(), MockHolders::new());

        let report = analyzer.analyze(&format!("  {}\n", EVM_TOKEN), None).await.unwrap();
        assert_eq!(report.address, EVM_TOKEN);
        assert_eq!(market.get_calls(), vec![EVM_TOKEN.to_string()]);
    }

    #[tokio::test]
    async fn test_explicit_chain_overrides_detection() {
        let holders = MockHolders::new()
            .with_response(EVM_TOKEN, vec![HolderEntry::new("0xa", 10), HolderEntry::new("0xb", 30)]);
        let analyzer = analyzer(
            MockMarketData::new().with_response(EVM_TOKEN, market()),
            holders.clone(),
        );

        let report = analyzer.analyze(EVM_TOKEN, Some(Chain::Bsc)).await.unwrap();
        assert_eq!(report.chain, Chain::Bsc);
        assert!(report.explorer_url.starts_with("https://bscscan.com/token/"));
        assert_eq!(holders.get_calls(), vec![(EVM_TOKEN.to_string(), Chain::Bsc)]);
        assert_eq!(report.holder_analysis.total_holders, 2);
    }

    #[tokio::test]
    async fn test_explicit_chain_must_match_address_family() {
        let market = MockMarketData::new().with_response(SOLANA_MINT, market());
        let holders = MockHolders::new();
        let analyzer = analyzer(market.clone(), holders.clone());

        let err = analyzer.analyze(SOLANA_MINT, Some(Chain::Ethereum)).await.unwrap_err();
        assert_eq!(err, AnalysisError::InvalidAddress(SOLANA_MINT.to_string()));
        let err = analyzer.analyze(EVM_TOKEN, Some(Chain::Solana)).await.unwrap_err();
        assert_eq!(err, AnalysisError::InvalidAddress(EVM_TOKEN.to_string()));
        assert!(analyzer.analyze("short", Some(Chain::Bsc)).await.is_err());

        assert!(market.get_calls().is_empty());
        assert!(holders.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_solana_zero_balances_abort() {
        let holders = MockHolders::new().with_response(
            SOLANA_MINT,
            vec![HolderEntry::new("EmptyA", 0), HolderEntry::new("EmptyB", 0)],
        );
        let analyzer = analyzer(
            MockMarketData::new().with_response(SOLANA_MINT, market()),
            holders.clone(),
        );

        let err = analyzer.analyze(SOLANA_MINT, None).await.unwrap_err();
        assert_eq!(err, AnalysisError::UpstreamUnavailable(DataSource::SolanaHolders));
        assert_eq!(holders.get_calls().len(), 1);
    }

    #[test]
    fn test_user_messages() {
        assert!(AnalysisError::InvalidAddress("x".into())
            .user_message()
            .contains("Could not determine the blockchain"));
        assert!(AnalysisError::UpstreamUnavailable(DataSource::SolanaHolders)
            .user_message()
            .contains("Helius"));
        assert_eq!(
            AnalysisError::UpstreamUnavailable(DataSource::MarketData).user_message(),
            "❌ Could not retrieve token data."
        );
        assert!(AnalysisError::Internal("boom".into()).user_message().contains("try again later"));
    }

    #[test]
    fn test_from_default_config() {
        assert!(TokenAnalyzer::from_config(&Config::default()).is_ok());
    }
}
