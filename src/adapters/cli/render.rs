//! Terminal rendering of token reports

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::domain::{Chain, RiskLevel, TokenReport};

/// Holders shown in the text report
const HOLDERS_SHOWN: usize = 5;

/// Format large numbers with K, M, B suffixes
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.1}B", num / 1_000_000_000.0)
    } else if num >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else {
        format!("{:.2}", num)
    }
}

/// Shorten an address to `first8...last8`
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

fn chain_label(chain: Chain) -> &'static str {
    match chain {
        Chain::Solana => "SOLANA",
        Chain::Ethereum => "ETHEREUM",
        Chain::Bsc => "BSC",
    }
}

fn risk_marker(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "[OK]",
        RiskLevel::Medium => "[!]",
        RiskLevel::High => "[!!]",
        RiskLevel::Critical => "[!!!]",
    }
}

/// Render a report as a plain-text summary
pub fn render_report(report: &TokenReport, now: DateTime<Utc>) -> String {
    let market = &report.market;
    let holders = &report.holder_analysis;
    let security = &report.security_analysis;
    let promotion = &market.promotion;

    let age = market
        .pair_age(now)
        .map(|d| format!("{}h", d.num_hours()))
        .unwrap_or_else(|| "unknown age".to_string());
    let listing = if promotion.is_promoted {
        format!("PAID PROMOTION ({} boosts)", promotion.boost_count)
    } else {
        "Free listing".to_string()
    };

    // Writing to a String cannot fail
    let mut out = String::new();
    let _ = writeln!(out, "======================================");
    let _ = writeln!(out, "    {} (${})", market.name, market.symbol);
    let _ = writeln!(out, "======================================");
    let _ = writeln!(out, "  Address:   {}", short_address(&report.address));
    let _ = writeln!(out, "  Chain:     {} | {} | {}", chain_label(report.chain), age, listing);
    let _ = writeln!(out, "  Explorer:  {}", report.explorer_url);

    let _ = writeln!(out, "\nMARKET DATA");
    let _ = writeln!(out, "  Market Cap: ${}", format_number(market.market_cap));
    let _ = writeln!(out, "  Price:      ${:.8} ({:+.2}% 24h)", market.price, market.price_change_24h);
    let _ = writeln!(out, "  Volume 24h: ${}", format_number(market.volume_24h));
    let _ = writeln!(out, "  Liquidity:  ${}", format_number(market.liquidity));
    let _ = writeln!(out, "  DEX:        {}", market.dex);

    let _ = writeln!(out, "\nHOLDER ANALYSIS");
    if holders.is_empty() {
        let _ = writeln!(out, "  No holder data available");
    } else {
        let _ = writeln!(out, "  Total:        {}", holders.total_holders);
        let _ = writeln!(out, "  Top 10:       {:.1}%", holders.top_10_percentage);
        let _ = writeln!(out, "  Dev:          {:.1}%", holders.dev_wallet_percentage);
        let _ = writeln!(out, "  Distribution: {}", holders.holder_distribution.label());
        if holders.bundle_detected {
            let _ = writeln!(out, "  BUNDLE DETECTED: {:.1}%", holders.bundle_percentage);
        }
        let _ = writeln!(out, "  Top Holders:");
        for (rank, holder) in holders.top_10_holders.iter().take(HOLDERS_SHOWN).enumerate() {
            let _ = writeln!(
                out,
                "    {}. {}: {:.2}% ({} tokens)",
                rank + 1,
                holder.address,
                holder.percentage,
                holder.balance
            );
        }
        if holders.top_10_holders.len() > HOLDERS_SHOWN {
            let _ = writeln!(
                out,
                "    ... and {} more holders",
                holders.top_10_holders.len() - HOLDERS_SHOWN
            );
        }
    }

    let _ = writeln!(out, "\nSECURITY ASSESSMENT");
    let _ = writeln!(
        out,
        "  Score: {}/100 {}",
        security.security_score,
        risk_marker(security.risk_level)
    );
    let _ = writeln!(out, "  Risk:  {}", security.risk_level.as_str().to_uppercase());
    for warning in &security.warnings {
        let _ = writeln!(out, "  - {}", warning);
    }

    if !promotion.websites.is_empty() || !promotion.socials.is_empty() {
        let _ = writeln!(out, "\nLINKS");
        for site in &promotion.websites {
            let _ = writeln!(out, "  {}: {}", site.label, site.url);
        }
        for social in &promotion.socials {
            let _ = writeln!(out, "  {}: {}", social.kind, social.url);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        analyze_holders, score, HolderAnalysis, HolderEntry, MarketData, PromotionInfo,
        PromotionType, SocialLink, StaticChecks,
    };
    use chrono::TimeZone;

    fn report(holders: HolderAnalysis) -> TokenReport {
        let address = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
        TokenReport {
            chain: Chain::Solana,
            address: address.to_string(),
            market: MarketData {
                name: "Bonk".to_string(),
                symbol: "BONK".to_string(),
                price: 0.000021,
                market_cap: 1_500_000_000.0,
                fdv: 0.0,
                volume_24h: 45_300_000.0,
                liquidity: 12_000.0,
                price_change_1h: 0.0,
                price_change_6h: 0.0,
                price_change_24h: -3.5,
                dex: "raydium".to_string(),
                pair_address: String::new(),
                pair_created_at: 1_700_000_000_000,
                promotion: PromotionInfo {
                    is_promoted: true,
                    boost_count: 3,
                    promotion_type: PromotionType::Paid,
                    socials: vec![SocialLink {
                        kind: "twitter".to_string(),
                        url: "https://x.com/bonk".to_string(),
                    }],
                    websites: vec![],
                },
            },
            explorer_url: Chain::Solana.explorer_url(address),
            security_analysis: score(&holders, StaticChecks::default()),
            holder_analysis: holders,
            analysis_timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1_500_000_000.0), "1.5B");
        assert_eq!(format_number(45_300_000.0), "45.3M");
        assert_eq!(format_number(12_000.0), "12.0K");
        assert_eq!(format_number(999.5), "999.50");
        assert_eq!(format_number(0.0), "0.00");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"),
            "DezXAZ8z...B1pPB263"
        );
        assert_eq!(short_address("short"), "short");
    }

    #[test]
    fn test_render_full_report() {
        let holders = analyze_holders(
            (1..=7u128)
                .map(|i| HolderEntry::new(format!("holder{}", i), i * 100))
                .collect(),
        );
        let now = Utc.timestamp_millis_opt(1_700_000_000_000 + 5 * 3_600_000).unwrap();
        let text = render_report(&report(holders), now);

        assert!(text.contains("Bonk ($BONK)"));
        assert!(text.contains("SOLANA | 5h | PAID PROMOTION (3 boosts)"));
        assert!(text.contains("Market Cap: $1.5B"));
        assert!(text.contains("-3.50% 24h"));
        assert!(text.contains("1. holder7: 25.00% (700 tokens)"));
        assert!(text.contains("... and 2 more holders"));
        assert!(text.contains("Contract not verified"));
        assert!(text.contains("twitter: https://x.com/bonk"));
    }

    #[test]
    fn test_render_without_holders() {
        let text = render_report(&report(HolderAnalysis::default()), Utc::now());
        assert!(text.contains("No holder data available"));
        assert!(!text.contains("Top Holders"));
    }
}
