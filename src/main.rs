//! apescan - Token risk scanner
//!
//! Scans a token address on Solana, Ethereum or BSC and prints a risk report.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (API keys go here, not in apescan.toml)
    dotenvy::dotenv().ok();

    let app = apescan::adapters::cli::init();
    apescan::adapters::cli::execute(app).await
}
