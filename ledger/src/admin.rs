//! Administrative authority state
//!
//! One struct holds the owner identity, the pause switch and the address
//! blacklist, and exposes the guard predicates the ledger operations run
//! before touching balances. The owner is fixed at construction and never
//! changes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::AccountId;

/// Owner, pause and blacklist flags for a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminState {
    owner: AccountId,
    paused: bool,
    blacklist: HashSet<AccountId>,
}

impl AdminState {
    pub fn new(owner: AccountId) -> Self {
        AdminState {
            owner,
            paused: false,
            blacklist: HashSet::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_blacklisted(&self, account: &str) -> bool {
        self.blacklist.contains(account)
    }

    /// Guard: `caller` must be the owner.
    pub fn ensure_owner(&self, caller: &str) -> Result<()> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    /// Guard: the pause switch must be off.
    pub fn ensure_not_paused(&self) -> Result<()> {
        if self.paused {
            Err(LedgerError::Paused)
        } else {
            Ok(())
        }
    }

    /// Guard: `account` must not be blacklisted.
    pub fn ensure_not_blacklisted(&self, account: &str) -> Result<()> {
        if self.blacklist.contains(account) {
            Err(LedgerError::Blacklisted(account.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Add `account` to the blacklist. Returns false if it was already
    /// listed.
    pub fn add_blacklist(&mut self, account: &str) -> bool {
        self.blacklist.insert(account.to_string())
    }

    /// Remove `account` from the blacklist. Returns false if it was not
    /// listed.
    pub fn remove_blacklist(&mut self, account: &str) -> bool {
        self.blacklist.remove(account)
    }
}
