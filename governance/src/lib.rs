//! Ballast governance module
//!
//! Multi-voter control over the token ledger's privileged state changes:
//! voter-set membership and supply minting. Proposals accumulate votes
//! until a strict majority of the current voter set approves, and the
//! deciding vote executes the requested action in the same call.

pub mod error;
pub mod proposal;
pub mod quorum;
pub mod voting;

pub use error::{GovernanceError, Result};
pub use proposal::{Proposal, ProposalAction, ProposalId};
pub use quorum::majority_threshold;
pub use voting::{VoteReceipt, VotingEngine};

/// Governance configuration constants
pub mod config {
    use crate::proposal::ProposalId;

    /// Default id for the first proposal; later proposals count up from
    /// it one by one regardless of kind.
    pub const DEFAULT_FIRST_PROPOSAL_ID: ProposalId = 10_000;
}
