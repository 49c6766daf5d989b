//! DexScreener Wire Types
//!
//! Response shape of `GET /latest/dex/tokens/{address}`. Every field is
//! optional; DexScreener omits fields freely for young pairs.

use serde::Deserialize;

use crate::adapters::wire::{number_or_zero, WireNumber};
use crate::domain::{MarketData, PromotionInfo, PromotionType, SocialLink, WebsiteLink};

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPairsResponse {
    #[serde(default)]
    pub pairs: Option<Vec<Pair>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub dex_id: Option<String>,
    pub pair_address: Option<String>,
    pub base_token: Option<BaseToken>,
    pub price_usd: Option<WireNumber>,
    pub market_cap: Option<WireNumber>,
    pub fdv: Option<WireNumber>,
    pub volume: Option<TimeWindows>,
    pub price_change: Option<TimeWindows>,
    pub liquidity: Option<Liquidity>,
    pub pair_created_at: Option<WireNumber>,
    pub boosts: Option<Boosts>,
    pub info: Option<PairInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Per-window figures (`m5`, `h1`, `h6`, `h24`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeWindows {
    pub h1: Option<WireNumber>,
    pub h6: Option<WireNumber>,
    pub h24: Option<WireNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Liquidity {
    pub usd: Option<WireNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Boosts {
    pub active: Option<WireNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PairInfo {
    #[serde(default)]
    pub socials: Vec<Social>,
    #[serde(default)]
    pub websites: Vec<Website>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Website {
    pub label: Option<String>,
    pub url: Option<String>,
}

impl Pair {
    /// Market figures of this pair
    pub fn market_data(&self) -> MarketData {
        let base = self.base_token.as_ref();
        let volume = self.volume.clone().unwrap_or_default();
        let change = self.price_change.clone().unwrap_or_default();

        MarketData {
            name: base
                .and_then(|t| t.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            symbol: base
                .and_then(|t| t.symbol.clone())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            price: number_or_zero(self.price_usd.as_ref()),
            market_cap: number_or_zero(self.market_cap.as_ref()),
            fdv: number_or_zero(self.fdv.as_ref()),
            volume_24h: number_or_zero(volume.h24.as_ref()),
            liquidity: number_or_zero(self.liquidity.as_ref().and_then(|l| l.usd.as_ref())),
            price_change_1h: number_or_zero(change.h1.as_ref()),
            price_change_6h: number_or_zero(change.h6.as_ref()),
            price_change_24h: number_or_zero(change.h24.as_ref()),
            dex: self.dex_id.clone().unwrap_or_else(|| "unknown".to_string()),
            pair_address: self.pair_address.clone().unwrap_or_default(),
            pair_created_at: self
                .pair_created_at
                .as_ref()
                .and_then(WireNumber::as_u128)
                .and_then(|ms| u64::try_from(ms).ok())
                .unwrap_or(0),
            promotion: self.promotion_info(),
        }
    }

    /// Boost status and listing links
    pub fn promotion_info(&self) -> PromotionInfo {
        let boost_count = self
            .boosts
            .as_ref()
            .and_then(|b| b.active.as_ref())
            .and_then(WireNumber::as_u128)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0);
        let info = self.info.clone().unwrap_or_default();

        PromotionInfo {
            is_promoted: boost_count > 0,
            boost_count,
            promotion_type: PromotionType::for_boosts(boost_count),
            socials: info
                .socials
                .into_iter()
                .map(|s| SocialLink {
                    kind: s.kind.unwrap_or_else(|| "unknown".to_string()),
                    url: s.url.unwrap_or_default(),
                })
                .collect(),
            websites: info
                .websites
                .into_iter()
                .map(|w| WebsiteLink {
                    label: w.label.unwrap_or_else(|| "Website".to_string()),
                    url: w.url.unwrap_or_default(),
                })
                .collect(),
        }
    }
}
