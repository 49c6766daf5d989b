//! CLI Adapter
//!
//! Command-line interface for the apescan token scanner.
//! Uses clap derive macros for argument parsing.

mod commands;
mod render;

pub use commands::{CliApp, Command, DetectCmd, OutputFormat, ScanCmd};
pub use render::{format_number, render_report, short_address};

use anyhow::Result;

/// Initialize the CLI application
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    commands::execute(app).await
}
