//! Transfer fee computation
//!
//! Fees apply to ordinary transfers only, never to mint or burn. The rate
//! is expressed in basis points of the transferred amount and the result
//! is capped at a configurable maximum per transfer.

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Basis-point denominator: 10_000 basis points = 100%.
pub const BASIS_POINT_DENOMINATOR: u64 = 10_000;

/// Fee schedule for transfers.
///
/// The default is fee-free: zero rate, zero cap, no receiver. A fee is
/// only ever charged while a receiver address is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeParams {
    /// Fee rate in basis points of the transferred amount.
    pub rate_basis_points: u64,
    /// Upper bound on the fee charged for a single transfer.
    pub cap: u64,
    /// Account credited with collected fees.
    pub receiver: Option<AccountId>,
}

impl FeeParams {
    /// Fee for a transfer of `amount`: `amount * rate / 10_000`, rounded
    /// down, then capped. Intermediate math is widened to `u128` so the
    /// product cannot overflow.
    pub fn fee_for(&self, amount: u64) -> u64 {
        let scaled =
            (amount as u128 * self.rate_basis_points as u128) / BASIS_POINT_DENOMINATOR as u128;
        scaled.min(self.cap as u128) as u64
    }
}
