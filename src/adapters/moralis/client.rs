//! Moralis Client
//!
//! Fetches EVM token owners (Ethereum, BSC) from the Moralis owners endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::types::OwnersResponse;
use crate::domain::{rank_holders, Chain, HolderEntry};
use crate::ports::HolderSource;

/// Errors that can occur when fetching EVM holders
#[derive(Debug, Error)]
pub enum MoralisError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Chain not served by Moralis: {0}")]
    UnsupportedChain(Chain),

    #[error("No owners with a balance for token: {0}")]
    NoOwners(String),
}

/// Configuration for the MoralisClient
#[derive(Debug, Clone)]
pub struct MoralisConfig {
    /// Base URL of the Moralis EVM API
    pub api_url: String,
    /// Sent as the `X-API-Key` header when present
    pub api_key: Option<String>,
    /// Maximum owners requested
    pub page_limit: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for MoralisConfig {
    fn default() -> Self {
        Self {
            api_url: "https://deep-index.moralis.io/api/v2.2".to_string(),
            api_key: None,
            page_limit: 100,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Client for Moralis token owner queries
#[derive(Debug, Clone)]
pub struct MoralisClient {
    config: MoralisConfig,
    http: Client,
}

impl MoralisClient {
    /// Create a new client with custom configuration
    pub fn with_config(config: MoralisConfig) -> Result<Self, MoralisError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch owners of a token on an EVM chain, largest balance first
    pub async fn get_holders(
        &self,
        address: &str,
        chain: Chain,
    ) -> Result<Vec<HolderEntry>, MoralisError> {
        let chain_code = chain
            .moralis_code()
            .ok_or(MoralisError::UnsupportedChain(chain))?;
        let url = format!("{}/{}/owners", self.config.api_url.trim_end_matches('/'), address);
        let limit = self.config.page_limit.to_string();

        let mut request = self
            .http
            .get(&url)
            .query(&[("chain", chain_code), ("limit", limit.as_str())]);
        if let Some(key) = &self.config.api_key {
            request = request.header("X-API-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MoralisError::HttpStatus(status.as_u16()));
        }

        let body: OwnersResponse = response
            .json()
            .await
            .map_err(|e| MoralisError::ParseError(format!("Failed to parse JSON: {}", e)))?;

        parse_owners(address, body)
    }
}

/// Extract ranked holders from an owners response
pub fn parse_owners(address: &str, response: OwnersResponse) -> Result<Vec<HolderEntry>, MoralisError> {
    let holders: Vec<HolderEntry> = response
        .result
        .iter()
        .filter_map(|owner| owner.to_holder())
        .collect();

    if holders.is_empty() {
        return Err(MoralisError::NoOwners(address.to_string()));
    }
    if response.has_more() {
        tracing::debug!(
            "More owners exist for {}, observed supply covers the first page only",
            address
        );
    }
    Ok(rank_holders(holders))
}

#[async_trait]
impl HolderSource for MoralisClient {
    fn name(&self) -> &str {
        "moralis"
    }

    fn supports(&self, chain: Chain) -> bool {
        chain.moralis_code().is_some()
    }

    async fn fetch_holders(&self, address: &str, chain: Chain) -> Option<Vec<HolderEntry>> {
        match self.get_holders(address, chain).await {
            Ok(holders) => {
                tracing::debug!("Moralis returned {} {} holders for {}", holders.len(), chain, address);
                Some(holders)
            }
            Err(e) => {
                tracing::warn!("Moralis holder lookup failed for {} on {}: {}", address, chain, e);
                None
            }
        }
    }
}
