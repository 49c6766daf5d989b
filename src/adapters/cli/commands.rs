//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the apescan token scanner.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use super::render::render_report;
use crate::application::TokenAnalyzer;
use crate::config::{load_config, Config};
use crate::domain::{detect_chain, Chain};

/// Config file picked up when `--config` is not given
const DEFAULT_CONFIG_PATH: &str = "config/apescan.toml";

/// apescan - Token risk scanner for Solana, Ethereum and BSC
#[derive(Parser, Debug)]
#[command(
    name = "apescan",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Token risk scanner for Solana, Ethereum and BSC",
    long_about = "apescan aggregates DEX market data, holder distribution and contract \
                  checks into a single risk report with a 0-100 security score."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a token and print its risk report
    Scan(ScanCmd),

    /// Show which chain an address belongs to
    Detect(DetectCmd),
}

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Scan a token
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Token contract / mint address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Chain override (solana, ethereum, bsc); detected from the address if omitted
    #[arg(long, value_name = "CHAIN")]
    pub chain: Option<Chain>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Detect an address's chain
#[derive(Parser, Debug)]
pub struct DetectCmd {
    /// Token contract / mint address
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    match app.command {
        Command::Scan(cmd) => {
            let config = resolve_config(cmd.config.as_deref())?;
            init_logging(app.verbose, app.debug, &config.logging.level)?;
            scan_command(cmd, &config).await
        }
        Command::Detect(cmd) => {
            init_logging(app.verbose, app.debug, "warn")?;
            detect_command(cmd)
        }
    }
}

/// Load the given config file, the default file if present, or built-in defaults
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
            load_config(&expanded)
                .with_context(|| format!("Failed to load configuration from {}", expanded))
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(DEFAULT_CONFIG_PATH).context("Failed to load default configuration")
        }
        None => Ok(Config::default()),
    }
}

/// Initialize logging system
///
/// `RUST_LOG` wins over the flags, the flags win over the configured level.
fn init_logging(verbose: bool, debug: bool, configured: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        configured
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Handle scan command
async fn scan_command(cmd: ScanCmd, config: &Config) -> Result<()> {
    let analyzer = TokenAnalyzer::from_config(config).context("Failed to build analyzer")?;

    let report = analyzer
        .analyze(&cmd.address, cmd.chain)
        .await
        .map_err(|e| {
            tracing::debug!("Scan failed: {}", e);
            anyhow::anyhow!(e.user_message())
        })?;

    match cmd.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_report(&report, Utc::now())),
    }
    Ok(())
}

/// Handle detect command
fn detect_command(cmd: DetectCmd) -> Result<()> {
    let address = cmd.address.trim();
    let chain = detect_chain(address)?;

    println!("Chain:    {}", chain);
    println!("Explorer: {}", chain.explorer_url(address));
    if chain.is_evm() {
        println!("Note:     EVM addresses default to ethereum; pass --chain bsc to scan on BSC");
    }
    Ok(())
}
