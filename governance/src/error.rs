//! Governance error types

use thiserror::Error;

use ledger::AccountId;

use crate::proposal::ProposalId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("{0} is not a voter")]
    NotVoter(AccountId),

    #[error("proposal not found: {0}")]
    ProposalNotFound(ProposalId),

    #[error("proposal {0} is already done")]
    ProposalAlreadyDone(ProposalId),

    #[error("{voter} has already voted on proposal {proposal}")]
    AlreadyVoted {
        voter: AccountId,
        proposal: ProposalId,
    },

    #[error("the owner is a permanent voter and cannot be removed")]
    OwnerNotRemovable,

    #[error("proposal payload failed: {0}")]
    PayloadFailed(String),
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
