//! Ballast token ledger
//!
//! The guarded account-balance engine behind the Ballast token:
//! - Balances and total supply, with mint and burn
//! - Spending allowances consumed by delegated transfers
//! - Basis-point transfer fees with a per-transfer cap
//! - Owner administration: pause switch and address blacklist
//! - One-way deprecation with a frozen balance snapshot
//!
//! Callers are plain account identifiers supplied by the host; the ledger
//! trusts the host to have authenticated them. Governance lives in the
//! `governance` crate and drives minting through this crate's public API.

pub mod admin;
pub mod allowance;
pub mod deprecation;
pub mod error;
pub mod fees;
pub mod state;

pub use admin::AdminState;
pub use allowance::Allowances;
pub use deprecation::Deprecation;
pub use error::{LedgerError, Result};
pub use fees::{FeeParams, BASIS_POINT_DENOMINATOR};
pub use state::TokenLedger;

/// Account identifier supplied by the host environment.
pub type AccountId = String;
