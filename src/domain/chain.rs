//! Chain Detection
//!
//! Supported chains and address-shape detection. Ethereum and BSC share the
//! same `0x` + 40 hex address shape, so detection alone always yields
//! `Ethereum`; callers that know better pass the chain explicitly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of an EVM address including the `0x` prefix
pub const EVM_ADDRESS_LEN: usize = 42;

/// Shortest accepted Solana (base58) address
pub const SOLANA_MIN_ADDRESS_LEN: usize = 32;

/// Longest accepted Solana (base58) address
pub const SOLANA_MAX_ADDRESS_LEN: usize = 44;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Could not determine the blockchain for address '{0}'")]
    UndetectableAddress(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),
}

/// Blockchains the scanner can analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Ethereum,
    Bsc,
}

impl Chain {
    /// Lowercase identifier used in reports and config
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
            Chain::Bsc => "bsc",
        }
    }

    /// Whether the chain uses EVM-style addresses
    pub fn is_evm(&self) -> bool {
        matches!(self, Chain::Ethereum | Chain::Bsc)
    }

    /// Chain code expected by the Moralis owners endpoint
    pub fn moralis_code(&self) -> Option<&'static str> {
        match self {
            Chain::Ethereum => Some("eth"),
            Chain::Bsc => Some("bsc"),
            Chain::Solana => None,
        }
    }

    /// Block explorer page for a token on this chain
    pub fn explorer_url(&self, address: &str) -> String {
        match self {
            Chain::Solana => format!("https://solscan.io/token/{}", address),
            Chain::Ethereum => format!("https://etherscan.io/token/{}", address),
            Chain::Bsc => format!("https://bscscan.com/token/{}", address),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solana" | "sol" => Ok(Chain::Solana),
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            "bsc" | "bnb" => Ok(Chain::Bsc),
            other => Err(ChainError::UnsupportedChain(other.to_string())),
        }
    }
}

/// Detect the chain of a token address from its shape alone.
///
/// - `0x` prefix and exactly 42 characters: Ethereum
/// - 32 to 44 characters without the `0x` prefix: Solana
/// - anything else: undetectable
pub fn detect_chain(address: &str) -> Result<Chain, ChainError> {
    let address = address.trim();
    let len = address.chars().count();

    if address.starts_with("0x") {
        if len == EVM_ADDRESS_LEN {
            return Ok(Chain::Ethereum);
        }
    } else if (SOLANA_MIN_ADDRESS_LEN..=SOLANA_MAX_ADDRESS_LEN).contains(&len) {
        return Ok(Chain::Solana);
    }

    Err(ChainError::UndetectableAddress(address.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BONK: &str = "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263";
    const PEPE: &str = "0x6982508145454Ce325dDbE47a25d4ec3d2311933";

    #[test]
    fn test_detect_solana() {
        assert_eq!(detect_chain(BONK), Ok(Chain::Solana));
        assert_eq!(detect_chain(&"1".repeat(32)), Ok(Chain::Solana));
        assert_eq!(detect_chain(&"1".repeat(44)), Ok(Chain::Solana));
    }

    #[test]
    fn test_detect_ethereum() {
        assert_eq!(detect_chain(PEPE), Ok(Chain::Ethereum));
    }

    #[test]
    fn test_detect_trims_whitespace() {
        assert_eq!(detect_chain(&format!("  {}\n", PEPE)), Ok(Chain::Ethereum));
    }

    #[test]
    fn test_detect_unknown_shapes() {
        // Too short / too long for Solana
        assert!(detect_chain(&"1".repeat(31)).is_err());
        assert!(detect_chain(&"1".repeat(45)).is_err());
        // 0x prefix with the wrong length is never Solana
        assert!(detect_chain("0x1234").is_err());
        assert!(detect_chain(&format!("0x{}", "a".repeat(41))).is_err());
        assert!(detect_chain(&format!("0x{}", "a".repeat(38))).is_err());
        assert!(detect_chain("").is_err());
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!("solana".parse::<Chain>(), Ok(Chain::Solana));
        assert_eq!("ETH".parse::<Chain>(), Ok(Chain::Ethereum));
        assert_eq!("bsc".parse::<Chain>(), Ok(Chain::Bsc));
        assert!("tron".parse::<Chain>().is_err());
    }

    #[test]
    fn test_moralis_codes() {
        assert_eq!(Chain::Ethereum.moralis_code(), Some("eth"));
        assert_eq!(Chain::Bsc.moralis_code(), Some("bsc"));
        assert_eq!(Chain::Solana.moralis_code(), None);
        assert!(Chain::Bsc.is_evm());
        assert!(!Chain::Solana.is_evm());
    }

    #[test]
    fn test_explorer_urls() {
        assert_eq!(
            Chain::Solana.explorer_url(BONK),
            format!("https://solscan.io/token/{}", BONK)
        );
        assert!(Chain::Ethereum.explorer_url(PEPE).starts_with("https://etherscan.io/token/"));
        assert!(Chain::Bsc.explorer_url(PEPE).starts_with("https://bscscan.com/token/"));
    }

    #[test]
    fn test_chain_serialization() {
        let json = serde_json::to_string(&Chain::Bsc).unwrap();
        assert_eq!(json, "\"bsc\"");
        let chain: Chain = serde_json::from_str("\"solana\"").unwrap();
        assert_eq!(chain, Chain::Solana);
    }
}
