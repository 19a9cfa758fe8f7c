//! Voter set and voting engine

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use ledger::{AccountId, TokenLedger};

use crate::error::{GovernanceError, Result};
use crate::proposal::{Proposal, ProposalAction, ProposalId};
use crate::quorum::majority_threshold;

/// Outcome of a successfully recorded vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub proposal_id: ProposalId,
    /// Votes on the proposal, this one included.
    pub votes: usize,
    /// Majority threshold in force for this vote.
    pub threshold: usize,
    /// Whether this vote decided the proposal and executed its action.
    pub decided: bool,
}

/// Multi-voter control over the ledger's privileged state changes.
///
/// The owner is seeded as the first, permanent voter, so the set is never
/// empty. Anyone may open a proposal; only current voters may vote; the
/// vote that reaches a strict majority of the current voter set executes
/// the proposal's action in the same call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingEngine {
    owner: AccountId,
    voters: HashSet<AccountId>,
    proposals: HashMap<ProposalId, Proposal>,
    next_id: ProposalId,
}

impl VotingEngine {
    pub fn new(owner: impl Into<AccountId>, first_proposal_id: ProposalId) -> Self {
        let owner = owner.into();
        let mut voters = HashSet::new();
        voters.insert(owner.clone());
        VotingEngine {
            owner,
            voters,
            proposals: HashMap::new(),
            next_id: first_proposal_id,
        }
    }

    /// Open a proposal to add `account` to the voter set.
    pub fn open_add_voter(&mut self, account: &str) -> ProposalId {
        self.allocate(ProposalAction::AddVoter {
            account: account.to_string(),
        })
    }

    /// Open a proposal to remove `account` from the voter set.
    ///
    /// The owner is a permanent voter, so proposals targeting the owner
    /// are rejected here and the registry never holds one.
    pub fn open_remove_voter(&mut self, account: &str) -> Result<ProposalId> {
        if account == self.owner {
            return Err(GovernanceError::OwnerNotRemovable);
        }
        Ok(self.allocate(ProposalAction::RemoveVoter {
            account: account.to_string(),
        }))
    }

    /// Open a proposal to mint `amount` new units to `to`.
    pub fn open_mint(&mut self, to: &str, amount: u64) -> ProposalId {
        self.allocate(ProposalAction::Mint {
            to: to.to_string(),
            amount,
        })
    }

    fn allocate(&mut self, action: ProposalAction) -> ProposalId {
        let id = self.next_id;
        self.next_id += 1;
        log::info!("proposal {} opened: {:?}", id, action);
        self.proposals.insert(id, Proposal::new(id, action));
        id
    }

    /// Cast `voter`'s vote on proposal `id`.
    ///
    /// The vote that reaches the majority threshold executes the
    /// proposal's action immediately. A failed action aborts the whole
    /// call: the vote is not recorded and the proposal stays open, so the
    /// same voter can retry once the blocking condition clears.
    pub fn vote(
        &mut self,
        ledger: &mut TokenLedger,
        voter: &str,
        id: ProposalId,
    ) -> Result<VoteReceipt> {
        if !self.voters.contains(voter) {
            return Err(GovernanceError::NotVoter(voter.to_string()));
        }
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        if proposal.done {
            return Err(GovernanceError::ProposalAlreadyDone(id));
        }
        if proposal.has_voted(voter) {
            return Err(GovernanceError::AlreadyVoted {
                voter: voter.to_string(),
                proposal: id,
            });
        }

        // Threshold against the voter set as it stands for this vote; a
        // deciding AddVoter must not raise its own bar.
        let threshold = majority_threshold(self.voters.len());
        let votes = proposal.votes() + 1;
        let decided = votes >= threshold;

        // Execute before recording the tally, so a failed payload leaves
        // the proposal open with no trace of this vote. The entry stays
        // borrowed across execution, which touches only the voter set and
        // the ledger.
        if decided {
            Self::execute_action(&mut self.voters, ledger, &proposal.action)?;
        }

        proposal.voted_by.insert(voter.to_string());
        if decided {
            proposal.done = true;
            log::info!("proposal {} decided with {}/{} votes", id, votes, threshold);
        } else {
            log::debug!("vote on proposal {}: {}/{}", id, votes, threshold);
        }
        Ok(VoteReceipt {
            proposal_id: id,
            votes,
            threshold,
            decided,
        })
    }

    /// Execute a decided action. Voter-set edits are idempotent, so the
    /// count always matches the set; minting is delegated to the ledger
    /// and its failure aborts the deciding vote.
    fn execute_action(
        voters: &mut HashSet<AccountId>,
        ledger: &mut TokenLedger,
        action: &ProposalAction,
    ) -> Result<()> {
        match action {
            ProposalAction::AddVoter { account } => {
                if voters.insert(account.clone()) {
                    log::info!("voter added: {} ({} voters)", account, voters.len());
                }
                Ok(())
            }
            ProposalAction::RemoveVoter { account } => {
                if voters.remove(account) {
                    log::info!("voter removed: {} ({} voters)", account, voters.len());
                }
                Ok(())
            }
            ProposalAction::Mint { to, amount } => ledger
                .mint(to, *amount)
                .map_err(|e| GovernanceError::PayloadFailed(e.to_string())),
        }
    }

    pub fn is_voter(&self, account: &str) -> bool {
        self.voters.contains(account)
    }

    /// Current voter count, owner included.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Whether `account` has voted on proposal `id`; false for unknown
    /// proposals.
    pub fn has_voted(&self, id: ProposalId, account: &str) -> bool {
        self.proposals
            .get(&id)
            .map(|proposal| proposal.has_voted(account))
            .unwrap_or(false)
    }

    /// Id the next opened proposal will receive.
    pub fn next_proposal_id(&self) -> ProposalId {
        self.next_id
    }
}
