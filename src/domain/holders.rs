//! Holder Analysis
//!
//! Pure heuristics over a ranked holder list: concentration shares, dev
//! wallet share, bundle (wallet cluster) detection and distribution
//! classification.
//!
//! All percentages are relative to the *observed* supply, i.e. the sum of
//! the fetched holder balances, not the token's true circulating supply.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

/// Bundle detection needs at least this many holders
pub const BUNDLE_MIN_HOLDERS: usize = 5;

/// Minimum wallets with near-equal balances to call it a bundle
pub const BUNDLE_MIN_GROUP_SIZE: usize = 3;

/// Relative balance difference (vs the group representative) still counted as "equal"
pub const BUNDLE_BALANCE_TOLERANCE: f64 = 0.05;

/// Number of holders included in the report listing
pub const TOP_HOLDERS_LISTED: usize = 10;

/// Number of holders used for distribution classification
pub const DISTRIBUTION_TOP_N: usize = 5;

/// A single token holder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolderEntry {
    /// Holding account address (token account on Solana, wallet on EVM)
    pub address: String,
    /// Owning wallet, when the provider reports one separately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Raw balance in chain-native units (no decimal adjustment)
    pub balance: u128,
    /// Share of observed supply (0-100), filled in by [`analyze_holders`]
    #[serde(default)]
    pub percentage: f64,
}

impl HolderEntry {
    pub fn new(address: impl Into<String>, balance: u128) -> Self {
        Self {
            address: address.into(),
            owner: None,
            balance,
            percentage: 0.0,
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

/// How concentrated the top of the holder list is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderDistribution {
    Distributed,
    Moderate,
    Concentrated,
    HighlyConcentrated,
    #[default]
    Unknown,
}

impl HolderDistribution {
    /// Classify from the top-5 share of observed supply (thresholds are exclusive)
    pub fn from_top_share(top_pct: f64) -> Self {
        if top_pct > 80.0 {
            HolderDistribution::HighlyConcentrated
        } else if top_pct > 50.0 {
            HolderDistribution::Concentrated
        } else if top_pct > 20.0 {
            HolderDistribution::Moderate
        } else {
            HolderDistribution::Distributed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolderDistribution::Distributed => "distributed",
            HolderDistribution::Moderate => "moderate",
            HolderDistribution::Concentrated => "concentrated",
            HolderDistribution::HighlyConcentrated => "highly_concentrated",
            HolderDistribution::Unknown => "unknown",
        }
    }
}

/// Holder distribution summary for one token
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HolderAnalysis {
    pub total_holders: usize,
    /// Sum of all fetched balances
    pub observed_supply: u128,
    pub top_10_percentage: f64,
    pub top_50_percentage: f64,
    /// Share of the largest holder, assumed to be the dev wallet
    pub dev_wallet_percentage: f64,
    pub bundle_detected: bool,
    pub bundle_percentage: f64,
    pub holder_distribution: HolderDistribution,
    pub top_10_holders: Vec<HolderEntry>,
}

impl HolderAnalysis {
    /// True for the all-zero fallback analysis
    pub fn is_empty(&self) -> bool {
        self.total_holders == 0
    }
}

/// Drop empty accounts and order by balance, largest first
pub fn rank_holders(mut holders: Vec<HolderEntry>) -> Vec<HolderEntry> {
    holders.retain(|h| h.balance > 0);
    holders.sort_by_key(|h| Reverse(h.balance));
    holders
}

/// Sum of balances across the given holders
pub fn observed_supply(holders: &[HolderEntry]) -> u128 {
    holders
        .iter()
        .fold(0u128, |acc, h| acc.saturating_add(h.balance))
}

fn share_pct(amount: u128, supply: u128) -> f64 {
    if supply == 0 {
        return 0.0;
    }
    amount as f64 / supply as f64 * 100.0
}

/// Share of observed supply held by the first `n` holders
pub fn top_n_percentage(holders: &[HolderEntry], n: usize) -> f64 {
    let top = observed_supply(&holders[..n.min(holders.len())]);
    share_pct(top, observed_supply(holders))
}

fn within_tolerance(representative: f64, balance: u128) -> bool {
    balance > 0 && ((representative - balance as f64).abs() / representative) < BUNDLE_BALANCE_TOLERANCE
}

/// Detect bundled wallets: groups of at least three holders with near-equal balances.
///
/// Holders are walked in the supplied order. Each unassigned holder becomes a
/// representative and collects every later unassigned holder whose balance is
/// within 5% of the representative's. Only groups that reach the minimum size
/// claim their members; holders gathered into an undersized group stay free to
/// join a later representative's group. Balances are always compared with the representative,
/// so a chain of wallets that drifts by small steps is only loosely grouped.
///
/// Returns `(detected, share of observed supply held by all bundles)`.
pub fn detect_bundles(holders: &[HolderEntry]) -> (bool, f64) {
    if holders.len() < BUNDLE_MIN_HOLDERS {
        return (false, 0.0);
    }

    let mut assigned = vec![false; holders.len()];
    let mut bundled: u128 = 0;
    let mut bundles = 0usize;

    for (i, representative) in holders.iter().enumerate() {
        if assigned[i] || representative.balance == 0 {
            continue;
        }
        let rep_balance = representative.balance as f64;

        let members: Vec<usize> = std::iter::once(i)
            .chain(
                (i + 1..holders.len())
                    .filter(|&j| !assigned[j] && within_tolerance(rep_balance, holders[j].balance)),
            )
            .collect();

        if members.len() >= BUNDLE_MIN_GROUP_SIZE {
            bundles += 1;
            for j in members {
                assigned[j] = true;
                bundled = bundled.saturating_add(holders[j].balance);
            }
        }
    }

    if bundles == 0 {
        return (false, 0.0);
    }

    (true, share_pct(bundled, observed_supply(holders)))
}

/// Classify the distribution from the top-5 share of observed supply
pub fn classify_concentration(holders: &[HolderEntry]) -> HolderDistribution {
    if holders.is_empty() || observed_supply(holders) == 0 {
        return HolderDistribution::Unknown;
    }

    HolderDistribution::from_top_share(top_n_percentage(holders, DISTRIBUTION_TOP_N))
}

/// Build the full holder analysis from a raw holder list.
///
/// The list is ranked first (zero balances dropped, largest first). An empty
/// list or zero observed supply yields the default analysis.
pub fn analyze_holders(holders: Vec<HolderEntry>) -> HolderAnalysis {
    let holders = rank_holders(holders);
    let supply = observed_supply(&holders);
    if holders.is_empty() || supply == 0 {
        return HolderAnalysis::default();
    }

    let (bundle_detected, bundle_percentage) = detect_bundles(&holders);

    let top_10_holders = holders
        .iter()
        .take(TOP_HOLDERS_LISTED)
        .cloned()
        .map(|mut h| {
            h.percentage = share_pct(h.balance, supply);
            h
        })
        .collect();

    HolderAnalysis {
        total_holders: holders.len(),
        observed_supply: supply,
        top_10_percentage: top_n_percentage(&holders, 10),
        top_50_percentage: top_n_percentage(&holders, 50),
        dev_wallet_percentage: share_pct(holders[0].balance, supply),
        bundle_detected,
        bundle_percentage,
        holder_distribution: classify_concentration(&holders),
        top_10_holders,
    }
}
