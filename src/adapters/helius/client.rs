//! Helius Client
//!
//! Fetches Solana token accounts for a mint with the DAS `getTokenAccounts`
//! JSON-RPC method.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use super::types::TokenAccountsResponse;
use crate::domain::{rank_holders, Chain, HolderEntry};
use crate::ports::HolderSource;

/// Errors that can occur when fetching Solana holders
#[derive(Debug, Error)]
pub enum HeliusError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },

    #[error("No token accounts with a balance for mint: {0}")]
    NoAccounts(String),
}

/// Configuration for the HeliusClient
#[derive(Debug, Clone)]
pub struct HeliusConfig {
    /// Helius RPC endpoint URL
    pub rpc_url: String,
    /// API key, appended as the `api-key` query parameter
    pub api_key: Option<String>,
    /// Maximum token accounts requested
    pub page_limit: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HeliusConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://mainnet.helius-rpc.com/".to_string(),
            api_key: None,
            page_limit: 1000,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Client for Helius token account queries
#[derive(Debug, Clone)]
pub struct HeliusClient {
    config: HeliusConfig,
    http: Client,
}

impl HeliusClient {
    /// Create a new client with custom configuration
    pub fn with_config(config: HeliusConfig) -> Result<Self, HeliusError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    /// Fetch holders of a mint, largest balance first
    pub async fn get_holders(&self, mint: &str) -> Result<Vec<HolderEntry>, HeliusError> {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": "apescan",
            "method": "getTokenAccounts",
            "params": {
                "mint": mint,
                "limit": self.config.page_limit
            }
        });

        let mut request = self.http.post(&self.config.rpc_url).json(&request_body);
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("api-key", key)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HeliusError::HttpStatus(status.as_u16()));
        }

        let body: TokenAccountsResponse = response
            .json()
            .await
            .map_err(|e| HeliusError::ParseError(format!("Failed to parse JSON: {}", e)))?;

        parse_holders(mint, self.config.page_limit, body)
    }
}

/// Extract ranked holders from a `getTokenAccounts` response
pub fn parse_holders(
    mint: &str,
    page_limit: u32,
    response: TokenAccountsResponse,
) -> Result<Vec<HolderEntry>, HeliusError> {
    if let Some(error) = response.error {
        return Err(HeliusError::RpcError {
            code: error.code,
            message: error.message,
        });
    }

    let result = response
        .result
        .ok_or_else(|| HeliusError::ParseError("No result in response".into()))?;

    let holders: Vec<HolderEntry> = result
        .token_accounts
        .iter()
        .filter_map(|account| account.to_holder())
        .collect();

    if holders.is_empty() {
        return Err(HeliusError::NoAccounts(mint.to_string()));
    }
    if result.total.is_some_and(|total| total >= u64::from(page_limit)) {
        tracing::debug!(
            "Helius page for {} is full ({} accounts), observed supply covers this page only",
            mint,
            page_limit
        );
    }
    Ok(rank_holders(holders))
}

#[async_trait]
impl HolderSource for HeliusClient {
    fn name(&self) -> &str {
        "helius"
    }

    fn supports(&self, chain: Chain) -> bool {
        chain == Chain::Solana
    }

    async fn fetch_holders(&self, address: &str, _chain: Chain) -> Option<Vec<HolderEntry>> {
        match self.get_holders(address).await {
            Ok(holders) => {
                tracing::debug!("Helius returned {} holders for {}", holders.len(), address);
                Some(holders)
            }
            Err(e) => {
                tracing::warn!("Helius holder lookup failed for {}: {}", address, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Vec<HolderEntry>, HeliusError> {
        let response: TokenAccountsResponse = serde_json::from_str(json).unwrap();
        parse_holders("Mint111", 1000, response)
    }

    #[test]
    fn test_config_default() {
        let config = HeliusConfig::default();
        assert_eq!(config.page_limit, 1000);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_supports_only_solana() {
        let client = HeliusClient::with_config(HeliusConfig::default()).unwrap();
        assert!(client.supports(Chain::Solana));
        assert!(!client.supports(Chain::Ethereum));
        assert!(!client.supports(Chain::Bsc));
    }

    #[test]
    fn test_parse_filters_and_ranks() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "apescan",
            "result": {
                "total": 4,
                "limit": 1000,
                "token_accounts": [
                    {"address": "AccSmall", "mint": "Mint111", "owner": "WalletA", "amount": 50},
                    {"address": "AccEmpty", "mint": "Mint111", "owner": "WalletB", "amount": 0},
                    {"address": "AccBig", "mint": "Mint111", "owner": "WalletC", "amount": 9000},
                    {"address": "AccMid", "mint": "Mint111", "owner": "WalletD", "amount": "700"}
                ]
            }
        }"#;

        let holders = parse(json).unwrap();
        let addresses: Vec<&str> = holders.iter().map(|h| h.address.as_str()).collect();
        assert_eq!(addresses, vec!["AccBig", "AccMid", "AccSmall"]);
        assert_eq!(holders[0].balance, 9000);
        assert_eq!(holders[0].owner.as_deref(), Some("WalletC"));
    }

    #[test]
    fn test_parse_rpc_error() {
        let json = r#"{"jsonrpc": "2.0", "id": "apescan", "error": {"code": -32602, "message": "Invalid params"}}"#;
        assert!(matches!(parse(json), Err(HeliusError::RpcError { code: -32602, .. })));
    }

    #[test]
    fn test_parse_no_accounts() {
        let json = r#"{"jsonrpc": "2.0", "result": {"token_accounts": [{"address": "A", "amount": 0}]}}"#;
        assert!(matches!(parse(json), Err(HeliusError::NoAccounts(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_yields_none() {
        let client = HeliusClient::with_config(HeliusConfig {
            rpc_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test-key".to_string()),
            timeout: Duration::from_secs(2),
            ..Default::default()
        })
        .unwrap();

        let holders = client
            .fetch_holders("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", Chain::Solana)
            .await;
        assert!(holders.is_none());
    }
}
