//! Validated parameters of a single swap.

use tracing::debug;

use super::{Amount, Balance, Fee, Weight};
use crate::error::MathError;
use crate::math::Precision;

/// The tuple `(Bi, Wi, Bo, Wo, Ai, fee)` after validation.
///
/// # Invariants
///
/// - `Bi`, `Wi`, `Bo`, `Wo`, `Ai` are strictly positive.
/// - `fee ∈ [0, 1)`.
/// - `Ai < Bi`: a swap may not bring in as much as the whole input
///   reserve.  This is an economic bound, checked on the raw amount before
///   the fee is deducted.
///
/// # Examples
///
/// ```
/// use weighted_math::domain::SwapInput;
/// use weighted_math::math::FloatArithmetic as F;
///
/// let input = SwapInput::new(F::new(2.0), F::new(1.0), F::new(2.0), F::new(1.0), F::new(1.0), F::new(0.0));
/// assert!(input.is_ok());
///
/// let too_big = SwapInput::new(F::new(1.0), F::new(2.0), F::new(2.0), F::new(2.0), F::new(1.0), F::new(0.0));
/// assert!(too_big.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapInput<P> {
    balance_in: Balance<P>,
    weight_in: Weight<P>,
    balance_out: Balance<P>,
    weight_out: Weight<P>,
    amount_in: Amount<P>,
    fee: Fee<P>,
}

impl<P: Precision> SwapInput<P> {
    /// Validates and bundles the swap parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if any invariant listed on the type is
    /// violated.
    pub fn new(
        balance_in: P,
        weight_in: P,
        balance_out: P,
        weight_out: P,
        amount_in: P,
        fee: P,
    ) -> Result<Self, MathError> {
        let input = Self {
            balance_in: Balance::new(balance_in)?,
            weight_in: Weight::new(weight_in)?,
            balance_out: Balance::new(balance_out)?,
            weight_out: Weight::new(weight_out)?,
            amount_in: Amount::new(amount_in)?,
            fee: Fee::new(fee)?,
        };
        if input.amount_in.get() >= input.balance_in.get() {
            debug!(?amount_in, ?balance_in, "swap amount reaches input reserve");
            return Err(MathError::Domain(
                "amount in must be below the input balance",
            ));
        }
        Ok(input)
    }

    /// Input reserve `Bi`.
    #[must_use]
    pub const fn balance_in(&self) -> &Balance<P> {
        &self.balance_in
    }

    /// Input weight `Wi`.
    #[must_use]
    pub const fn weight_in(&self) -> &Weight<P> {
        &self.weight_in
    }

    /// Output reserve `Bo`.
    #[must_use]
    pub const fn balance_out(&self) -> &Balance<P> {
        &self.balance_out
    }

    /// Output weight `Wo`.
    #[must_use]
    pub const fn weight_out(&self) -> &Weight<P> {
        &self.weight_out
    }

    /// Amount in `Ai`, before fees.
    #[must_use]
    pub const fn amount_in(&self) -> &Amount<P> {
        &self.amount_in
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> &Fee<P> {
        &self.fee
    }

    /// `Ai · (1 − fee)`, the part of the input that reaches the pool.
    ///
    /// # Errors
    ///
    /// Propagates backend arithmetic errors.
    pub fn effective_amount_in(&self) -> Result<P, MathError> {
        self.amount_in.get().checked_mul(&self.fee.complement()?)
    }
}
