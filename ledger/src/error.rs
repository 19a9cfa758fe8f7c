//! Ledger error types

use thiserror::Error;

use crate::AccountId;

/// Errors raised by the guarded ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("caller is not the owner")]
    Unauthorized,

    #[error("ledger is paused")]
    Paused,

    #[error("address {0} is blacklisted")]
    Blacklisted(AccountId),

    #[error("address {0} is not blacklisted")]
    NotBlacklisted(AccountId),

    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance { required: u64, available: u64 },

    #[error("insufficient allowance: required {required}, available {available}")]
    InsufficientAllowance { required: u64, available: u64 },

    #[error("ledger is deprecated, use successor {successor}")]
    DeprecatedRedirect { successor: AccountId },

    #[error("ledger is already deprecated")]
    AlreadyDeprecated,

    #[error("fee rate {rate_basis_points} exceeds the basis-point denominator")]
    InvalidFeeParams { rate_basis_points: u64 },

    #[error("amount overflow")]
    AmountOverflow,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
