//! DexScreener Client
//!
//! Fetches the pair listing for a token and reads market data from the
//! first (canonical) pair.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::types::TokenPairsResponse;
use crate::domain::MarketData;
use crate::ports::MarketDataSource;

/// Errors that can occur when fetching market data
#[derive(Debug, Error)]
pub enum DexScreenerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No pairs listed for token: {0}")]
    NoPairs(String),
}

/// Configuration for the DexScreenerClient
#[derive(Debug, Clone)]
pub struct DexScreenerConfig {
    /// Base URL of the DEX API
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for DexScreenerConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.dexscreener.com/latest/dex".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the DexScreener token endpoint
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    config: DexScreenerConfig,
    http: Client,
}

impl DexScreenerClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, DexScreenerError> {
        Self::with_config(DexScreenerConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: DexScreenerConfig) -> Result<Self, DexScreenerError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch market data from the token's first listed pair
    pub async fn get_market_data(&self, address: &str) -> Result<MarketData, DexScreenerError> {
        let url = format!("{}/tokens/{}", self.config.api_url.trim_end_matches('/'), address);
        tracing::debug!("Fetching DexScreener pairs: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DexScreenerError::HttpStatus(status.as_u16()));
        }

        let body: TokenPairsResponse = response
            .json()
            .await
            .map_err(|e| DexScreenerError::ParseError(format!("Failed to parse JSON: {}", e)))?;

        parse_market_data(address, body)
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }
}

/// Read market data from the canonical pair of a pairs response
pub fn parse_market_data(
    address: &str,
    response: TokenPairsResponse,
) -> Result<MarketData, DexScreenerError> {
    response
        .pairs
        .unwrap_or_default()
        .first()
        .map(|pair| pair.market_data())
        .ok_or_else(|| DexScreenerError::NoPairs(address.to_string()))
}

#[async_trait]
impl MarketDataSource for DexScreenerClient {
    fn name(&self) -> &str {
        "dexscreener"
    }

    async fn fetch_market_data(&self, address: &str) -> Option<MarketData> {
        match self.get_market_data(address).await {
            Ok(data) => Some(data),
            Err(DexScreenerError::NoPairs(_)) => {
                tracing::info!("No DEX pairs found for {}", address);
                None
            }
            Err(e) => {
                tracing::warn!("DexScreener lookup failed for {}: {}", address, e);
                None
            }
        }
    }
}
