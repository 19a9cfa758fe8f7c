//! Spending allowances
//!
//! Grants keyed by owner, then spender. A grant is set, raised or lowered
//! by the owner and consumed by `transfer_from`; reading a grant that was
//! never set yields zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::AccountId;

/// Allowance table: `grants[owner][spender]` is what `spender` may still
/// move out of `owner`'s balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Allowances {
    grants: HashMap<AccountId, HashMap<AccountId, u64>>,
}

impl Allowances {
    pub fn get(&self, owner: &str, spender: &str) -> u64 {
        self.grants
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite the grant with `amount`, regardless of its current value.
    pub fn set(&mut self, owner: &str, spender: &str, amount: u64) {
        self.grants
            .entry(owner.to_string())
            .or_default()
            .insert(spender.to_string(), amount);
    }

    /// Raise the grant by `delta`. Fails on overflow without changing the
    /// stored value.
    pub fn increase(&mut self, owner: &str, spender: &str, delta: u64) -> Result<u64> {
        let next = self
            .get(owner, spender)
            .checked_add(delta)
            .ok_or(LedgerError::AmountOverflow)?;
        self.set(owner, spender, next);
        Ok(next)
    }

    /// Lower the grant by `delta`, flooring at zero when `delta` exceeds
    /// the current value.
    pub fn decrease(&mut self, owner: &str, spender: &str, delta: u64) -> u64 {
        let next = self.get(owner, spender).saturating_sub(delta);
        self.set(owner, spender, next);
        next
    }
}
