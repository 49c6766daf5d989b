//! Holder Data Port
//!
//! Source of the current holder list for a token.

use async_trait::async_trait;

use crate::domain::{Chain, HolderEntry};

/// Token holder provider
///
/// `None` means the holder list is unavailable (request failed, provider
/// error, or no accounts returned). What the caller does with that depends
/// on the chain.
#[async_trait]
pub trait HolderSource: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Whether this provider can serve the given chain
    fn supports(&self, chain: Chain) -> bool;

    /// Fetch holders with positive balances, largest first
    async fn fetch_holders(&self, address: &str, chain: Chain) -> Option<Vec<HolderEntry>>;
}
