//! Security Check Port
//!
//! Boolean contract checks (verification, honeypot, rug indicators) used by
//! the security scorer. Real analyzers can be plugged in without touching
//! the scoring rules.

use async_trait::async_trait;

use crate::domain::Chain;

/// A single yes/no check about a token contract
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecurityCheck: Send + Sync {
    async fn check(&self, address: &str, chain: Chain) -> bool;
}

/// Check that always answers the same value
///
/// Used for verification, honeypot and rug-indicator checks until real
/// analyzers exist; all three currently answer `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantCheck {
    value: bool,
}

impl ConstantCheck {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    /// Stub for checks with no analyzer behind them
    pub fn unimplemented() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl SecurityCheck for ConstantCheck {
    async fn check(&self, _address: &str, _chain: Chain) -> bool {
        self.value
    }
}
