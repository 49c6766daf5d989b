//! Holder Source Router
//!
//! Dispatches holder lookups to the first registered provider that serves
//! the requested chain.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Chain, HolderEntry};
use crate::ports::HolderSource;

/// Holder source that routes by chain
#[derive(Clone, Default)]
pub struct ChainHolderRouter {
    providers: Vec<Arc<dyn HolderSource>>,
}

impl ChainHolderRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider; earlier registrations win
    pub fn with_provider(mut self, provider: Arc<dyn HolderSource>) -> Self {
        self.providers.push(provider);
        self
    }

    fn provider_for(&self, chain: Chain) -> Option<&Arc<dyn HolderSource>> {
        self.providers.iter().find(|p| p.supports(chain))
    }
}

#[async_trait]
impl HolderSource for ChainHolderRouter {
    fn name(&self) -> &str {
        "holder-router"
    }

    fn supports(&self, chain: Chain) -> bool {
        self.provider_for(chain).is_some()
    }

    async fn fetch_holders(&self, address: &str, chain: Chain) -> Option<Vec<HolderEntry>> {
        let Some(provider) = self.provider_for(chain) else {
            tracing::warn!("No holder provider registered for {}", chain);
            return None;
        };
        tracing::debug!("Fetching {} holders via {}", chain, provider.name());
        provider.fetch_holders(address, chain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleChain {
        chain: Chain,
        balance: u128,
    }

    #[async_trait]
    impl HolderSource for SingleChain {
        fn name(&self) -> &str {
            "single"
        }

        fn supports(&self, chain: Chain) -> bool {
            chain == self.chain
        }

        async fn fetch_holders(&self, _address: &str, _chain: Chain) -> Option<Vec<HolderEntry>> {
            Some(vec![HolderEntry::new("holder", self.balance)])
        }
    }

    fn router() -> ChainHolderRouter {
        ChainHolderRouter::new()
            .with_provider(Arc::new(SingleChain { chain: Chain::Solana, balance: 1 }))
            .with_provider(Arc::new(SingleChain { chain: Chain::Ethereum, balance: 2 }))
    }

    #[tokio::test]
    async fn test_routes_by_chain() {
        let router = router();
        let sol = router.fetch_holders("addr", Chain::Solana).await.unwrap();
        let eth = router.fetch_holders("addr", Chain::Ethereum).await.unwrap();
        assert_eq!(sol[0].balance, 1);
        assert_eq!(eth[0].balance, 2);
    }

    #[tokio::test]
    async fn test_unserved_chain() {
        let router = router();
        assert!(!router.supports(Chain::Bsc));
        assert!(router.fetch_holders("addr", Chain::Bsc).await.is_none());
    }
}
