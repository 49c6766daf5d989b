//! Moralis Wire Types
//!
//! Response shape of `GET /{address}/owners`.

use serde::Deserialize;

use crate::adapters::wire::WireNumber;
use crate::domain::HolderEntry;

#[derive(Debug, Clone, Deserialize)]
pub struct OwnersResponse {
    #[serde(default)]
    pub result: Vec<TokenOwner>,
    /// Set when more owners exist beyond this page
    pub cursor: Option<String>,
}

impl OwnersResponse {
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// One owner entry. Moralis versions differ in field names, and some
/// responses carry both spellings.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenOwner {
    pub owner: Option<String>,
    pub owner_address: Option<String>,
    /// Raw balance, usually a decimal string
    pub amount: Option<WireNumber>,
    pub balance: Option<WireNumber>,
}

impl TokenOwner {
    /// Holder entry for an owner with a positive balance
    pub fn to_holder(&self) -> Option<HolderEntry> {
        let raw = self.amount.as_ref().or(self.balance.as_ref())?;
        let balance = raw.as_u128().filter(|b| *b > 0)?;
        let owner = self.owner.as_ref().or(self.owner_address.as_ref())?;
        Some(HolderEntry::new(owner.clone(), balance))
    }
}
