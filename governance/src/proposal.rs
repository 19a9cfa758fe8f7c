//! Proposal records and privileged actions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ledger::AccountId;

/// Proposal identifier, allocated sequentially from a configured seed.
pub type ProposalId = u64;

/// The privileged state change a proposal asks for. Executed exactly once,
/// in the same call as the vote that reaches majority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalAction {
    /// Add `account` to the voter set.
    AddVoter { account: AccountId },
    /// Remove `account` from the voter set.
    RemoveVoter { account: AccountId },
    /// Mint `amount` new units to `to`.
    Mint { to: AccountId, amount: u64 },
}

/// A privileged-action request accumulating voter approvals.
///
/// The action is fixed at creation. Only the vote set and the done flag
/// change afterwards, and a done proposal never reopens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub action: ProposalAction,
    pub voted_by: HashSet<AccountId>,
    pub done: bool,
}

impl Proposal {
    pub fn new(id: ProposalId, action: ProposalAction) -> Self {
        Proposal {
            id,
            action,
            voted_by: HashSet::new(),
            done: false,
        }
    }

    /// Number of votes collected so far.
    pub fn votes(&self) -> usize {
        self.voted_by.len()
    }

    pub fn has_voted(&self, account: &str) -> bool {
        self.voted_by.contains(account)
    }
}
