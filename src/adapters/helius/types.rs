//! Helius JSON-RPC Types
//!
//! Response shape of the DAS `getTokenAccounts` method.

use serde::Deserialize;

use crate::adapters::wire::WireNumber;
use crate::domain::HolderEntry;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenAccountsResponse {
    pub result: Option<TokenAccountsResult>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenAccountsResult {
    /// Accounts in this page
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub token_accounts: Vec<TokenAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenAccount {
    /// Token account address
    pub address: Option<String>,
    /// Wallet owning the token account
    pub owner: Option<String>,
    pub amount: Option<WireNumber>,
}

impl TokenAccount {
    /// Holder entry for an account with a positive balance
    pub fn to_holder(&self) -> Option<HolderEntry> {
        let balance = self.amount.as_ref()?.as_u128().filter(|b| *b > 0)?;
        let address = self.address.clone().or_else(|| self.owner.clone())?;
        let entry = HolderEntry::new(address, balance);
        Some(match &self.owner {
            Some(owner) => entry.with_owner(owner.clone()),
            None => entry,
        })
    }
}
