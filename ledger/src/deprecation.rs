//! Deprecation snapshot
//!
//! Deprecating a ledger is a one-way transition: mutating operations stop
//! and point callers at a successor, while the balances captured at the
//! moment of the switch stay readable as a historical record. The
//! snapshot is an owned copy, not a view of the live map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Successor address plus the balances frozen when `deprecate` ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deprecation {
    successor: AccountId,
    frozen_balances: HashMap<AccountId, u64>,
}

impl Deprecation {
    pub fn new(successor: AccountId, frozen_balances: HashMap<AccountId, u64>) -> Self {
        Deprecation {
            successor,
            frozen_balances,
        }
    }

    pub fn successor(&self) -> &str {
        &self.successor
    }

    /// Balance of `account` at the moment of deprecation; zero for
    /// accounts that held nothing then.
    pub fn frozen_balance_of(&self, account: &str) -> u64 {
        self.frozen_balances.get(account).copied().unwrap_or(0)
    }
}
