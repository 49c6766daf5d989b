//! Security Scorer
//!
//! Runs the contract-level checks and combines them with holder metrics
//! into a `SecurityAnalysis`.

use std::sync::Arc;

use crate::domain::{score, Chain, HolderAnalysis, SecurityAnalysis, StaticChecks};
use crate::ports::{ConstantCheck, SecurityCheck};

/// Scorer with injectable check providers
#[derive(Clone)]
pub struct SecurityScorer {
    verification: Arc<dyn SecurityCheck>,
    honeypot: Arc<dyn SecurityCheck>,
    rug_indicators: Arc<dyn SecurityCheck>,
}

impl SecurityScorer {
    pub fn new(
        verification: Arc<dyn SecurityCheck>,
        honeypot: Arc<dyn SecurityCheck>,
        rug_indicators: Arc<dyn SecurityCheck>,
    ) -> Self {
        Self {
            verification,
            honeypot,
            rug_indicators,
        }
    }

    /// Scorer whose checks all answer `false`
    ///
    /// Contracts therefore always count as unverified (-20).
    pub fn with_stub_checks() -> Self {
        let stub: Arc<dyn SecurityCheck> = Arc::new(ConstantCheck::unimplemented());
        Self::new(stub.clone(), stub.clone(), stub)
    }

    /// Evaluate the checks and score the token
    pub async fn assess(
        &self,
        address: &str,
        chain: Chain,
        holders: &HolderAnalysis,
    ) -> SecurityAnalysis {
        let checks = StaticChecks {
            is_verified: self.verification.check(address, chain).await,
            is_honeypot: self.honeypot.check(address, chain).await,
            has_rug_indicators: self.rug_indicators.check(address, chain).await,
        };
        tracing::debug!(?checks, "Contract checks complete for {}", address);
        score(holders, checks)
    }
}

impl Default for SecurityScorer {
    fn default() -> Self {
        Self::with_stub_checks()
    }
}
