//! Security Scoring
//!
//! Combines holder heuristics with static contract checks into a 0-100
//! security score, a risk level and an ordered list of warnings.
//!
//! Every signal category applies at most one penalty (the first threshold
//! that matches), so scores move in steps rather than accumulating within a
//! category. The score starts at [`BASE_SCORE`] and is clamped at zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::holders::HolderAnalysis;

/// Score of a token with no detected risk signals
pub const BASE_SCORE: i32 = 100;

/// Severity band of a threshold-based warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Signal present but below the risk bands (bundles only)
    Notice,
    Medium,
    High,
    Critical,
}

/// A single security finding, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", content = "severity", rename_all = "snake_case")]
pub enum SecurityWarning {
    ContractNotVerified,
    DevHolding(Severity),
    TopHolderConcentration(Severity),
    BundleManipulation(Severity),
    PotentialHoneypot,
    RugPullIndicators,
}

impl SecurityWarning {
    /// Points subtracted from the base score
    pub fn penalty(&self) -> i32 {
        match self {
            SecurityWarning::ContractNotVerified => 20,
            SecurityWarning::DevHolding(severity) => match severity {
                Severity::Critical => 60,
                Severity::High => 40,
                _ => 25,
            },
            SecurityWarning::TopHolderConcentration(severity) => match severity {
                Severity::Critical => 50,
                Severity::High => 30,
                _ => 15,
            },
            SecurityWarning::BundleManipulation(severity) => match severity {
                Severity::Critical => 40,
                Severity::High => 25,
                _ => 10,
            },
            SecurityWarning::PotentialHoneypot => 50,
            SecurityWarning::RugPullIndicators => 30,
        }
    }

    /// Human-readable message shown to users
    pub fn message(&self) -> &'static str {
        match self {
            SecurityWarning::ContractNotVerified => "Contract not verified",
            SecurityWarning::DevHolding(Severity::Critical) => {
                "CRITICAL: Dev holds >50% - Extreme rug risk"
            }
            SecurityWarning::DevHolding(Severity::High) => {
                "HIGH RISK: Dev holds >30% - High rug risk"
            }
            SecurityWarning::DevHolding(_) => "MEDIUM RISK: Dev holds >20% - Moderate rug risk",
            SecurityWarning::TopHolderConcentration(Severity::Critical) => {
                "CRITICAL: Top 10 hold >70% - Extreme concentration"
            }
            SecurityWarning::TopHolderConcentration(Severity::High) => {
                "HIGH RISK: Top 10 hold >50% - High concentration"
            }
            SecurityWarning::TopHolderConcentration(_) => {
                "MEDIUM RISK: Top 10 hold >40% - Moderate concentration"
            }
            SecurityWarning::BundleManipulation(Severity::Critical) => {
                "CRITICAL: Bundle manipulation detected"
            }
            SecurityWarning::BundleManipulation(Severity::High) => {
                "HIGH RISK: Bundle manipulation detected"
            }
            SecurityWarning::BundleManipulation(_) => "Bundle manipulation detected",
            SecurityWarning::PotentialHoneypot => "Potential honeypot detected",
            SecurityWarning::RugPullIndicators => "Rug pull indicators detected",
        }
    }
}

impl fmt::Display for SecurityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Overall risk classification derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// >=85 low, >=70 medium, >=50 high, else critical
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=255 => RiskLevel::Low,
            70..=84 => RiskLevel::Medium,
            50..=69 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of the contract-level checks (verification, honeypot, rug indicators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaticChecks {
    pub is_verified: bool,
    pub is_honeypot: bool,
    pub has_rug_indicators: bool,
}

/// Security section of a token report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAnalysis {
    /// 0-100, higher is safer
    pub security_score: u8,
    pub risk_level: RiskLevel,
    pub warnings: Vec<SecurityWarning>,
    pub is_verified: bool,
    pub is_honeypot: bool,
    pub has_rug_indicators: bool,
}

impl SecurityAnalysis {
    /// Warning messages in evaluation order
    pub fn warning_messages(&self) -> Vec<&'static str> {
        self.warnings.iter().map(SecurityWarning::message).collect()
    }
}

fn dev_holding_warning(dev_pct: f64) -> Option<SecurityWarning> {
    let severity = if dev_pct > 50.0 {
        Severity::Critical
    } else if dev_pct > 30.0 {
        Severity::High
    } else if dev_pct > 20.0 {
        Severity::Medium
    } else {
        return None;
    };
    Some(SecurityWarning::DevHolding(severity))
}

fn concentration_warning(top_10_pct: f64) -> Option<SecurityWarning> {
    let severity = if top_10_pct > 70.0 {
        Severity::Critical
    } else if top_10_pct > 50.0 {
        Severity::High
    } else if top_10_pct > 40.0 {
        Severity::Medium
    } else {
        return None;
    };
    Some(SecurityWarning::TopHolderConcentration(severity))
}

fn bundle_warning(detected: bool, bundle_pct: f64) -> Option<SecurityWarning> {
    if !detected {
        return None;
    }
    let severity = if bundle_pct > 30.0 {
        Severity::Critical
    } else if bundle_pct > 15.0 {
        Severity::High
    } else {
        Severity::Notice
    };
    Some(SecurityWarning::BundleManipulation(severity))
}

/// Evaluate all signals in order and collect the warnings they raise
pub fn collect_warnings(holders: &HolderAnalysis, checks: StaticChecks) -> Vec<SecurityWarning> {
    [
        (!checks.is_verified).then_some(SecurityWarning::ContractNotVerified),
        dev_holding_warning(holders.dev_wallet_percentage),
        concentration_warning(holders.top_10_percentage),
        bundle_warning(holders.bundle_detected, holders.bundle_percentage),
        checks.is_honeypot.then_some(SecurityWarning::PotentialHoneypot),
        checks.has_rug_indicators.then_some(SecurityWarning::RugPullIndicators),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Score a token from its holder analysis and static check results
pub fn score(holders: &HolderAnalysis, checks: StaticChecks) -> SecurityAnalysis {
    let warnings = collect_warnings(holders, checks);
    let penalty: i32 = warnings.iter().map(SecurityWarning::penalty).sum();
    let security_score = (BASE_SCORE - penalty).clamp(0, BASE_SCORE) as u8;

    SecurityAnalysis {
        security_score,
        risk_level: RiskLevel::from_score(security_score),
        warnings,
        is_verified: checks.is_verified,
        is_honeypot: checks.is_honeypot,
        has_rug_indicators: checks.has_rug_indicators,
    }
}
