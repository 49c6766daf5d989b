//! Configuration Loader
//!
//! Loads and validates configuration from TOML files. Every section has
//! defaults, so a missing section (or no file at all) yields a working
//! configuration against the public endpoints.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::dexscreener::DexScreenerConfig;
use crate::adapters::helius::HeliusConfig;
use crate::adapters::moralis::MoralisConfig;

/// Main configuration structure matching apescan.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dexscreener: DexScreenerSection,
    #[serde(default)]
    pub helius: HeliusSection,
    #[serde(default)]
    pub moralis: MoralisSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// DexScreener configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DexScreenerSection {
    /// Base URL of the DEX API
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DexScreenerSection {
    fn default() -> Self {
        Self {
            api_url: "https://api.dexscreener.com/latest/dex".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Helius (Solana holders) configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeliusSection {
    /// Helius RPC endpoint
    pub rpc_url: String,
    /// API key (falls back to HELIUS_API_KEY)
    pub api_key: Option<String>,
    /// Token accounts requested per lookup
    pub page_limit: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HeliusSection {
    fn default() -> Self {
        Self {
            rpc_url: "https://mainnet.helius-rpc.com/".to_string(),
            api_key: None,
            page_limit: 1000,
            timeout_secs: 15,
        }
    }
}

impl HeliusSection {
    /// Get API key with environment variable fallback
    /// Checks HELIUS_API_KEY env var if config value is empty/None
    pub fn get_api_key(&self) -> Option<String> {
        non_empty(&self.api_key).or_else(|| std::env::var("HELIUS_API_KEY").ok())
    }
}

/// Moralis (EVM holders) configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoralisSection {
    /// Base URL of the Moralis EVM API
    pub api_url: String,
    /// API key (falls back to MORALIS_API_KEY)
    pub api_key: Option<String>,
    /// Owners requested per lookup
    pub page_limit: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MoralisSection {
    fn default() -> Self {
        Self {
            api_url: "https://deep-index.moralis.io/api/v2.2".to_string(),
            api_key: None,
            page_limit: 100,
            timeout_secs: 15,
        }
    }
}

impl MoralisSection {
    /// Get API key with environment variable fallback
    /// Checks MORALIS_API_KEY env var if config value is empty/None
    pub fn get_api_key(&self) -> Option<String> {
        non_empty(&self.api_key).or_else(|| std::env::var("MORALIS_API_KEY").ok())
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let urls = [
            ("dexscreener.api_url", &self.dexscreener.api_url),
            ("helius.rpc_url", &self.helius.rpc_url),
            ("moralis.api_url", &self.moralis.api_url),
        ];
        for (name, url) in urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        let timeouts = [
            ("dexscreener.timeout_secs", self.dexscreener.timeout_secs),
            ("helius.timeout_secs", self.helius.timeout_secs),
            ("moralis.timeout_secs", self.moralis.timeout_secs),
        ];
        for (name, secs) in timeouts {
            if secs == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be > 0",
                    name
                )));
            }
        }

        if self.helius.page_limit == 0 || self.helius.page_limit > 1000 {
            return Err(ConfigError::ValidationError(format!(
                "helius.page_limit must be 1-1000, got {}",
                self.helius.page_limit
            )));
        }

        if self.moralis.page_limit == 0 || self.moralis.page_limit > 100 {
            return Err(ConfigError::ValidationError(format!(
                "moralis.page_limit must be 1-100, got {}",
                self.moralis.page_limit
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

impl From<&Config> for DexScreenerConfig {
    fn from(config: &Config) -> Self {
        DexScreenerConfig {
            api_url: config.dexscreener.api_url.clone(),
            timeout: Duration::from_secs(config.dexscreener.timeout_secs),
        }
    }
}

impl From<&Config> for HeliusConfig {
    fn from(config: &Config) -> Self {
        HeliusConfig {
            rpc_url: config.helius.rpc_url.clone(),
            api_key: config.helius.get_api_key(),
            page_limit: config.helius.page_limit,
            timeout: Duration::from_secs(config.helius.timeout_secs),
        }
    }
}

impl From<&Config> for MoralisConfig {
    fn from(config: &Config) -> Self {
        MoralisConfig {
            api_url: config.moralis.api_url.clone(),
            api_key: config.moralis.get_api_key(),
            page_limit: config.moralis.page_limit,
            timeout: Duration::from_secs(config.moralis.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_config() -> String {
        r#"
[dexscreener]
api_url = "https://api.dexscreener.com/latest/dex"
timeout_secs = 8

[helius]
rpc_url = "https://mainnet.helius-rpc.com/"
api_key = "test-helius-key"
page_limit = 500
timeout_secs = 20

[moralis]
api_url = "https://deep-index.moralis.io/api/v2.2"
page_limit = 50
timeout_secs = 12

[logging]
level = "debug"
"#
        .to_string()
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(&create_valid_config());
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.dexscreener.timeout_secs, 8);
        assert_eq!(config.helius.page_limit, 500);
        assert_eq!(config.helius.get_api_key().as_deref(), Some("test-helius-key"));
        assert_eq!(config.moralis.page_limit, 50);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("[logging]\nlevel = \"warn\"\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.dexscreener.api_url, "https://api.dexscreener.com/latest/dex");
        assert_eq!(config.dexscreener.timeout_secs, 10);
        assert_eq!(config.helius.page_limit, 1000);
        assert_eq!(config.helius.timeout_secs, 15);
        assert_eq!(config.moralis.page_limit, 100);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/apescan.toml");
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[helius\nrpc_url = ");
        assert!(matches!(load_config(file.path()).unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        let file = write_config("[dexscreener]\ntimeout_secs = 0\n");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_invalid_page_limit() {
        let file = write_config("[moralis]\npage_limit = 500\n");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_invalid_url_and_level() {
        let file = write_config("[helius]\nrpc_url = \"mainnet.helius-rpc.com\"\n");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ValidationError(_)
        ));

        let file = write_config("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_adapter_configs_from_config() {
        let file = write_config(&create_valid_config());
        let config = load_config(file.path()).unwrap();

        let dex = DexScreenerConfig::from(&config);
        assert_eq!(dex.timeout, Duration::from_secs(8));

        let helius = HeliusConfig::from(&config);
        assert_eq!(helius.api_key.as_deref(), Some("test-helius-key"));
        assert_eq!(helius.page_limit, 500);
        assert_eq!(helius.timeout, Duration::from_secs(20));

        let moralis = MoralisConfig::from(&config);
        assert_eq!(moralis.page_limit, 50);
        assert_eq!(moralis.timeout, Duration::from_secs(12));
    }
}
