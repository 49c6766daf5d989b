//! Moralis Adapter
//!
//! EVM holder lists (Ethereum, BSC) from the Moralis owners endpoint.

mod client;
mod types;

pub use client::{parse_owners, MoralisClient, MoralisConfig, MoralisError};
pub use types::{OwnersResponse, TokenOwner};
