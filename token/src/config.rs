//! Token construction parameters

use serde::{Deserialize, Serialize};

use governance::ProposalId;

/// Immutable parameters fixed when a token is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Human-readable token name.
    pub name: String,
    /// Short ticker symbol.
    pub symbol: String,
    /// Display decimals; balances are kept in raw units.
    pub decimals: u8,
    /// Supply credited to the owner at creation.
    pub initial_supply: u64,
    /// Id assigned to the first governance proposal.
    pub first_proposal_id: ProposalId,
}

impl TokenConfig {
    /// Config with the default proposal-id seed.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        initial_supply: u64,
    ) -> Self {
        TokenConfig {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            initial_supply,
            first_proposal_id: governance::config::DEFAULT_FIRST_PROPOSAL_ID,
        }
    }
}
