//! The guarded token ledger
//!
//! `TokenLedger` owns every piece of mutable token state: the balance map
//! and total supply, the allowance table, the fee schedule, the
//! administrative flags and the deprecation snapshot. Each operation runs
//! its guard chain and validates amounts before the first write, so a
//! failed call never leaves partial state behind.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::admin::AdminState;
use crate::allowance::Allowances;
use crate::deprecation::Deprecation;
use crate::error::{LedgerError, Result};
use crate::fees::{FeeParams, BASIS_POINT_DENOMINATOR};
use crate::AccountId;

/// Account balances, supply and the authority state guarding them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: HashMap<AccountId, u64>,
    total_supply: u64,
    admin: AdminState,
    allowances: Allowances,
    fees: FeeParams,
    deprecation: Option<Deprecation>,
}

impl TokenLedger {
    /// Create a ledger crediting the whole initial supply to the owner.
    pub fn new(owner: impl Into<AccountId>, initial_supply: u64) -> Self {
        let owner = owner.into();
        let mut balances = HashMap::new();
        if initial_supply > 0 {
            balances.insert(owner.clone(), initial_supply);
        }
        TokenLedger {
            balances,
            total_supply: initial_supply,
            admin: AdminState::new(owner),
            allowances: Allowances::default(),
            fees: FeeParams::default(),
            deprecation: None,
        }
    }

    fn ensure_not_deprecated(&self) -> Result<()> {
        match &self.deprecation {
            Some(snapshot) => Err(LedgerError::DeprecatedRedirect {
                successor: snapshot.successor().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Move `amount` from `caller` to `to`, charging the configured fee.
    ///
    /// The fee comes out of `amount`: the recipient receives `amount - fee`
    /// and the fee receiver the rest, so the total supply is conserved.
    pub fn transfer(&mut self, caller: &str, to: &str, amount: u64) -> Result<()> {
        self.ensure_not_deprecated()?;
        self.admin.ensure_not_paused()?;
        self.admin.ensure_not_blacklisted(caller)?;
        self.move_with_fee(caller, to, amount)
    }

    /// Spend `caller`'s allowance from `from` and move the funds to `to`.
    ///
    /// The allowance is checked before the balance and decremented only
    /// when the move succeeds.
    pub fn transfer_from(&mut self, caller: &str, from: &str, to: &str, amount: u64) -> Result<()> {
        self.ensure_not_deprecated()?;
        self.admin.ensure_not_paused()?;
        self.admin.ensure_not_blacklisted(caller)?;
        self.admin.ensure_not_blacklisted(from)?;

        let allowed = self.allowances.get(from, caller);
        if allowed < amount {
            return Err(LedgerError::InsufficientAllowance {
                required: amount,
                available: allowed,
            });
        }
        self.move_with_fee(from, to, amount)?;
        self.allowances.set(from, caller, allowed - amount);
        Ok(())
    }

    fn move_with_fee(&mut self, from: &str, to: &str, amount: u64) -> Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        // No receiver configured means no fee, whatever the rate says.
        let receiver = self.fees.receiver.clone();
        let fee = match &receiver {
            Some(_) => self.fees.fee_for(amount),
            None => 0,
        };
        self.debit(from, amount);
        self.credit(to, amount - fee);
        if fee > 0 {
            if let Some(receiver) = &receiver {
                self.credit(receiver, fee);
            }
        }
        log::debug!("transfer {} -> {}: {} (fee {})", from, to, amount, fee);
        Ok(())
    }

    fn debit(&mut self, account: &str, amount: u64) {
        if let Some(balance) = self.balances.get_mut(account) {
            // Callers validate the balance before debiting.
            *balance -= amount;
        }
    }

    fn credit(&mut self, account: &str, amount: u64) {
        if amount == 0 {
            return;
        }
        *self.balances.entry(account.to_string()).or_insert(0) += amount;
    }

    /// Burn from the caller's own balance, shrinking the total supply.
    pub fn burn(&mut self, caller: &str, amount: u64) -> Result<()> {
        self.ensure_not_deprecated()?;
        self.admin.ensure_not_paused()?;
        let available = self.balance_of(caller);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        self.debit(caller, amount);
        self.total_supply -= amount;
        log::debug!("burn {}: {} (supply {})", caller, amount, self.total_supply);
        Ok(())
    }

    /// Credit newly minted supply to `to`.
    ///
    /// Not an open entry point: only a decided mint proposal reaches this,
    /// and it still honors the deprecation and pause guards so a vote
    /// decided at the wrong moment fails cleanly.
    pub fn mint(&mut self, to: &str, amount: u64) -> Result<()> {
        self.ensure_not_deprecated()?;
        self.admin.ensure_not_paused()?;
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        self.credit(to, amount);
        self.total_supply = supply;
        log::info!("minted {} to {} (supply {})", amount, to, supply);
        Ok(())
    }

    /// Set the allowance for `spender` to exactly `amount`.
    pub fn approve(&mut self, caller: &str, spender: &str, amount: u64) -> Result<()> {
        self.admin.ensure_not_blacklisted(caller)?;
        self.allowances.set(caller, spender, amount);
        log::debug!("approve {} -> {}: {}", caller, spender, amount);
        Ok(())
    }

    pub fn increase_allowance(&mut self, caller: &str, spender: &str, delta: u64) -> Result<()> {
        self.admin.ensure_not_blacklisted(caller)?;
        let next = self.allowances.increase(caller, spender, delta)?;
        log::debug!("allowance {} -> {}: {}", caller, spender, next);
        Ok(())
    }

    /// Lower the allowance, flooring at zero when `delta` exceeds it.
    pub fn decrease_allowance(&mut self, caller: &str, spender: &str, delta: u64) -> Result<()> {
        self.admin.ensure_not_blacklisted(caller)?;
        let next = self.allowances.decrease(caller, spender, delta);
        log::debug!("allowance {} -> {}: {}", caller, spender, next);
        Ok(())
    }

    pub fn add_black_list(&mut self, caller: &str, account: &str) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        if self.admin.add_blacklist(account) {
            log::info!("blacklisted {}", account);
        }
        Ok(())
    }

    pub fn remove_black_list(&mut self, caller: &str, account: &str) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        if self.admin.remove_blacklist(account) {
            log::info!("removed {} from blacklist", account);
        }
        Ok(())
    }

    /// Destroy the entire balance of a blacklisted account, shrinking the
    /// total supply by the same amount. Returns the destroyed amount.
    pub fn destroy_black_funds(&mut self, caller: &str, account: &str) -> Result<u64> {
        self.ensure_not_deprecated()?;
        self.admin.ensure_owner(caller)?;
        if !self.admin.is_blacklisted(account) {
            return Err(LedgerError::NotBlacklisted(account.to_string()));
        }
        let destroyed = self.balance_of(account);
        self.debit(account, destroyed);
        self.total_supply -= destroyed;
        log::info!("destroyed {} blacklisted funds of {}", destroyed, account);
        Ok(destroyed)
    }

    pub fn pause(&mut self, caller: &str) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        self.admin.set_paused(true);
        log::info!("ledger paused");
        Ok(())
    }

    pub fn unpause(&mut self, caller: &str) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        self.admin.set_paused(false);
        log::info!("ledger unpaused");
        Ok(())
    }

    /// Set the fee rate and cap. Rates above 100% are rejected, which also
    /// keeps `fee <= amount` for every transfer.
    pub fn set_fee_params(&mut self, caller: &str, rate_basis_points: u64, cap: u64) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        if rate_basis_points > BASIS_POINT_DENOMINATOR {
            return Err(LedgerError::InvalidFeeParams { rate_basis_points });
        }
        self.fees.rate_basis_points = rate_basis_points;
        self.fees.cap = cap;
        log::info!("fee params: {} bps, cap {}", rate_basis_points, cap);
        Ok(())
    }

    pub fn update_receiving_fee_address(&mut self, caller: &str, account: &str) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        self.fees.receiver = Some(account.to_string());
        log::info!("fee receiver: {}", account);
        Ok(())
    }

    /// Deprecate the ledger in favor of `successor`. One-way: balances are
    /// snapshotted and every later transfer, burn or mint is redirected.
    pub fn deprecate(&mut self, caller: &str, successor: &str) -> Result<()> {
        self.admin.ensure_owner(caller)?;
        if self.deprecation.is_some() {
            return Err(LedgerError::AlreadyDeprecated);
        }
        self.deprecation = Some(Deprecation::new(
            successor.to_string(),
            self.balances.clone(),
        ));
        log::info!("ledger deprecated in favor of {}", successor);
        Ok(())
    }

    pub fn balance_of(&self, account: &str) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Balance as it stood before deprecation: the frozen snapshot once
    /// deprecated, the live balance until then.
    pub fn old_balance_of(&self, account: &str) -> u64 {
        match &self.deprecation {
            Some(snapshot) => snapshot.frozen_balance_of(account),
            None => self.balance_of(account),
        }
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn allowance(&self, owner: &str, spender: &str) -> u64 {
        self.allowances.get(owner, spender)
    }

    pub fn owner(&self) -> &str {
        self.admin.owner()
    }

    pub fn paused(&self) -> bool {
        self.admin.paused()
    }

    pub fn is_blacklisted(&self, account: &str) -> bool {
        self.admin.is_blacklisted(account)
    }

    pub fn deprecated(&self) -> bool {
        self.deprecation.is_some()
    }

    pub fn successor(&self) -> Option<&str> {
        self.deprecation.as_ref().map(|snapshot| snapshot.successor())
    }

    pub fn fee_params(&self) -> &FeeParams {
        &self.fees
    }

    /// Sum of all recorded balances. Equals `total_supply` after every
    /// successful operation while the ledger is active.
    pub fn balance_sum(&self) -> u64 {
        self.balances.values().sum()
    }
}
