//! Ballast token
//!
//! The public surface of the governed, fee-bearing Ballast ledger. One
//! `Token` value bundles the guarded balance engine with the voting
//! engine and exposes every host-visible operation: transfers and
//! allowances, owner administration, deprecation, and the proposal
//! lifecycle. The host authenticates callers and passes their account
//! ids; each call is a single atomic unit that either fully applies or
//! leaves the machine untouched.
//!
//! Minting is deliberately absent from this surface: new supply only
//! enters through a mint proposal decided by a voter majority.

pub mod config;
pub mod error;

pub use config::TokenConfig;
pub use error::{GovernanceError, LedgerError, Result, TokenError};
pub use governance::{Proposal, ProposalAction, ProposalId, VoteReceipt};
pub use ledger::{AccountId, FeeParams};

use serde::{Deserialize, Serialize};

use governance::VotingEngine;
use ledger::TokenLedger;

/// A governed, fee-bearing token ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    name: String,
    symbol: String,
    decimals: u8,
    ledger: TokenLedger,
    governance: VotingEngine,
}

impl Token {
    /// Create a token, crediting the whole initial supply to `owner` and
    /// seeding the voter set with the owner.
    pub fn new(owner: impl Into<AccountId>, config: TokenConfig) -> Self {
        let owner = owner.into();
        log::info!(
            "token {} ({}) created: supply {} to {}",
            config.name,
            config.symbol,
            config.initial_supply,
            owner
        );
        Token {
            ledger: TokenLedger::new(owner.clone(), config.initial_supply),
            governance: VotingEngine::new(owner, config.first_proposal_id),
            name: config.name,
            symbol: config.symbol,
            decimals: config.decimals,
        }
    }

    // Transfers and allowances

    pub fn transfer(&mut self, caller: &str, to: &str, amount: u64) -> Result<()> {
        Ok(self.ledger.transfer(caller, to, amount)?)
    }

    pub fn transfer_from(&mut self, caller: &str, from: &str, to: &str, amount: u64) -> Result<()> {
        Ok(self.ledger.transfer_from(caller, from, to, amount)?)
    }

    pub fn approve(&mut self, caller: &str, spender: &str, amount: u64) -> Result<()> {
        Ok(self.ledger.approve(caller, spender, amount)?)
    }

    pub fn increase_allowance(&mut self, caller: &str, spender: &str, delta: u64) -> Result<()> {
        Ok(self.ledger.increase_allowance(caller, spender, delta)?)
    }

    pub fn decrease_allowance(&mut self, caller: &str, spender: &str, delta: u64) -> Result<()> {
        Ok(self.ledger.decrease_allowance(caller, spender, delta)?)
    }

    pub fn burn(&mut self, caller: &str, amount: u64) -> Result<()> {
        Ok(self.ledger.burn(caller, amount)?)
    }

    // Owner administration

    pub fn add_black_list(&mut self, caller: &str, account: &str) -> Result<()> {
        Ok(self.ledger.add_black_list(caller, account)?)
    }

    pub fn remove_black_list(&mut self, caller: &str, account: &str) -> Result<()> {
        Ok(self.ledger.remove_black_list(caller, account)?)
    }

    /// Destroy the entire balance of a blacklisted account. Returns the
    /// destroyed amount.
    pub fn destroy_black_funds(&mut self, caller: &str, account: &str) -> Result<u64> {
        Ok(self.ledger.destroy_black_funds(caller, account)?)
    }

    pub fn pause(&mut self, caller: &str) -> Result<()> {
        Ok(self.ledger.pause(caller)?)
    }

    pub fn unpause(&mut self, caller: &str) -> Result<()> {
        Ok(self.ledger.unpause(caller)?)
    }

    pub fn set_fee_params(&mut self, caller: &str, rate_basis_points: u64, cap: u64) -> Result<()> {
        Ok(self.ledger.set_fee_params(caller, rate_basis_points, cap)?)
    }

    pub fn update_receiving_fee_address(&mut self, caller: &str, account: &str) -> Result<()> {
        Ok(self.ledger.update_receiving_fee_address(caller, account)?)
    }

    /// Deprecate the ledger in favor of `successor`; one-way.
    pub fn deprecate(&mut self, caller: &str, successor: &str) -> Result<()> {
        Ok(self.ledger.deprecate(caller, successor)?)
    }

    // Governance

    /// Open a proposal to add `account` to the voter set. Open to anyone;
    /// creation casts no vote.
    pub fn open_add_voter_proposal(&mut self, account: &str) -> ProposalId {
        self.governance.open_add_voter(account)
    }

    /// Open a proposal to remove `account` from the voter set. Proposals
    /// targeting the owner are rejected.
    pub fn open_remove_voter_proposal(&mut self, account: &str) -> Result<ProposalId> {
        Ok(self.governance.open_remove_voter(account)?)
    }

    /// Open a proposal to mint `amount` new units to `to`.
    pub fn open_mint_proposal(&mut self, to: &str, amount: u64) -> ProposalId {
        self.governance.open_mint(to, amount)
    }

    /// Cast `caller`'s vote on a proposal. The vote that reaches a strict
    /// majority of the current voter set executes the proposal's action
    /// against the ledger in the same call.
    pub fn vote_proposal(&mut self, caller: &str, id: ProposalId) -> Result<VoteReceipt> {
        Ok(self.governance.vote(&mut self.ledger, caller, id)?)
    }

    // Views

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn owner(&self) -> &str {
        self.ledger.owner()
    }

    pub fn balance_of(&self, account: &str) -> u64 {
        self.ledger.balance_of(account)
    }

    /// Balance as it stood before deprecation; the live balance until
    /// then.
    pub fn old_balance_of(&self, account: &str) -> u64 {
        self.ledger.old_balance_of(account)
    }

    pub fn total_supply(&self) -> u64 {
        self.ledger.total_supply()
    }

    pub fn allowance(&self, owner: &str, spender: &str) -> u64 {
        self.ledger.allowance(owner, spender)
    }

    pub fn is_blacklisted(&self, account: &str) -> bool {
        self.ledger.is_blacklisted(account)
    }

    pub fn paused(&self) -> bool {
        self.ledger.paused()
    }

    pub fn deprecated(&self) -> bool {
        self.ledger.deprecated()
    }

    pub fn successor(&self) -> Option<&str> {
        self.ledger.successor()
    }

    pub fn fee_params(&self) -> &FeeParams {
        self.ledger.fee_params()
    }

    pub fn is_voter(&self, account: &str) -> bool {
        self.governance.is_voter(account)
    }

    pub fn voters_count(&self) -> usize {
        self.governance.voter_count()
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.governance.proposal(id)
    }

    pub fn has_voted(&self, id: ProposalId, account: &str) -> bool {
        self.governance.has_voted(id, account)
    }
}
