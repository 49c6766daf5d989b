//! Recording fakes for the outbound ports.
//!
//! Each fake returns canned responses keyed by token address and records
//! every call, so tests can assert both outcome and traffic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Chain, HolderEntry, MarketData};
use super::holders::HolderSource;
use super::market_data::MarketDataSource;

/// Mock market data port that records calls and allows controlled responses
#[derive(Debug, Default, Clone)]
pub struct MockMarketData {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<HashMap<String, MarketData>>>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the market data returned for an address
    pub fn with_response(self, address: &str, data: MarketData) -> Self {
        self.responses.lock().unwrap().insert(address.to_string(), data);
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataSource for MockMarketData {
    fn name(&self) -> &str {
        "mock-market"
    }

    async fn fetch_market_data(&self, address: &str) -> Option<MarketData> {
        self.calls.lock().unwrap().push(address.to_string());
        self.responses.lock().unwrap().get(address).cloned()
    }
}

/// Mock holder port that records calls and allows controlled responses
#[derive(Debug, Default, Clone)]
pub struct MockHolders {
    calls: Arc<Mutex<Vec<(String, Chain)>>>,
    responses: Arc<Mutex<HashMap<String, Vec<HolderEntry>>>>,
}

impl MockHolders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the holder list returned for an address
    pub fn with_response(self, address: &str, holders: Vec<HolderEntry>) -> Self {
        self.responses.lock().unwrap().insert(address.to_string(), holders);
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<(String, Chain)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HolderSource for MockHolders {
    fn name(&self) -> &str {
        "mock-holders"
    }

    fn supports(&self, _chain: Chain) -> bool {
        true
    }

    async fn fetch_holders(&self, address: &str, chain: Chain) -> Option<Vec<HolderEntry>> {
        self.calls.lock().unwrap().push((address.to_string(), chain));
        self.responses
            .lock()
            .unwrap()
            .get(address)
            .filter(|holders| !holders.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_holders_records_calls() {
        let mock = MockHolders::new().with_response("mint", vec![HolderEntry::new("a", 10)]);

        let result = mock.fetch_holders("mint", Chain::Solana).await;
        assert_eq!(result.map(|h| h.len()), Some(1));
        assert!(mock.fetch_holders("other", Chain::Bsc).await.is_none());
        assert_eq!(
            mock.get_calls(),
            vec![("mint".to_string(), Chain::Solana), ("other".to_string(), Chain::Bsc)]
        );
    }

    #[tokio::test]
    async fn test_mock_holders_empty_is_unavailable() {
        let mock = MockHolders::new().with_response("mint", vec![]);
        assert!(mock.fetch_holders("mint", Chain::Ethereum).await.is_none());
    }

    #[tokio::test]
    async fn test_mock_market_data_unknown_address() {
        let mock = MockMarketData::new();
        assert!(mock.fetch_market_data("missing").await.is_none());
        assert_eq!(mock.get_calls(), vec!["missing".to_string()]);
    }
}
