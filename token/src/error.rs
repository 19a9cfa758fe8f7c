//! Token error type

use thiserror::Error;

pub use governance::GovernanceError;
pub use ledger::LedgerError;

/// Union of the failures a token operation can raise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Governance(#[from] GovernanceError),
}

pub type Result<T> = std::result::Result<T, TokenError>;
