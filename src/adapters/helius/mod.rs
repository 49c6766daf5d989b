//! Helius Adapter
//!
//! Solana holder lists from the Helius DAS API (`getTokenAccounts`).

mod client;
mod types;

pub use client::{parse_holders, HeliusClient, HeliusConfig, HeliusError};
pub use types::{TokenAccount, TokenAccountsResponse};
