//! Token Report
//!
//! Market snapshot and the aggregated report returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chain::Chain;
use super::holders::HolderAnalysis;
use super::security::SecurityAnalysis;

/// A social media link listed on the DEX pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// A website link listed on the DEX pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteLink {
    pub label: String,
    pub url: String,
}

/// Whether a listing is boosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionType {
    #[default]
    Free,
    Paid,
}

impl PromotionType {
    /// `Paid` when the pair has active boosts
    pub fn for_boosts(boost_count: u32) -> Self {
        if boost_count > 0 {
            PromotionType::Paid
        } else {
            PromotionType::Free
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionType::Free => "free",
            PromotionType::Paid => "paid",
        }
    }
}

/// Paid promotion (boost) status and listing links
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromotionInfo {
    pub is_promoted: bool,
    pub boost_count: u32,
    pub promotion_type: PromotionType,
    pub socials: Vec<SocialLink>,
    pub websites: Vec<WebsiteLink>,
}

/// Market data from the canonical (first listed) DEX pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub name: String,
    pub symbol: String,
    /// USD price
    pub price: f64,
    pub market_cap: f64,
    pub fdv: f64,
    pub volume_24h: f64,
    /// USD liquidity
    pub liquidity: f64,
    pub price_change_1h: f64,
    pub price_change_6h: f64,
    pub price_change_24h: f64,
    pub dex: String,
    pub pair_address: String,
    /// Epoch millis, 0 when unknown
    pub pair_created_at: u64,
    pub promotion: PromotionInfo,
}

impl MarketData {
    /// Pair age relative to `now`, if the listing time is known
    pub fn pair_age(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        if self.pair_created_at == 0 {
            return None;
        }
        let created = DateTime::<Utc>::from_timestamp_millis(i64::try_from(self.pair_created_at).ok()?)?;
        (created <= now).then(|| now - created)
    }
}

/// Full analysis of one token, assembled fresh for every request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenReport {
    pub chain: Chain,
    pub address: String,
    #[serde(flatten)]
    pub market: MarketData,
    pub explorer_url: String,
    pub holder_analysis: HolderAnalysis,
    pub security_analysis: SecurityAnalysis,
    pub analysis_timestamp: DateTime<Utc>,
}
