//! Output amount of a single-asset swap.

use tracing::debug;

use super::PowerMode;
use crate::domain::{Rounding, SwapInput};
use crate::error::MathError;
use crate::math::Precision;

/// Output amount `Ao` for selling `Ai` of the input asset, with the power
/// taken by [`Precision::checked_pow`].
///
/// ```text
/// Ai' = Ai · (1 − fee)
/// Ao  = Bo · (1 − (Bi / (Bi + Ai'))^(Wi / Wo))
/// ```
///
/// # Errors
///
/// - [`MathError::Domain`] if any of `Bi, Wi, Bo, Wo, Ai` is not strictly
///   positive, `fee ∉ [0, 1)`, or `Ai >= Bi`.
/// - Backend arithmetic errors.
///
/// # Examples
///
/// ```
/// use weighted_math::math::FloatArithmetic as F;
/// use weighted_math::pricing::swap_amount_out_exact;
///
/// let Ok(out) = swap_amount_out_exact(
///     F::new(2.0), F::new(1.0), F::new(2.0), F::new(1.0), F::new(1.0), F::new(0.0),
/// ) else {
///     panic!("valid swap");
/// };
/// assert!((out.get() - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn swap_amount_out_exact<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
    amount_in: P,
    fee: P,
) -> Result<P, MathError> {
    let input = validate(balance_in, weight_in, balance_out, weight_out, amount_in, fee)?;
    amount_out(&input, PowerMode::Exact)
}

/// [`swap_amount_out_exact`] with the power taken by
/// [`pow_approx`](crate::math::pow_approx).
///
/// Fails on exactly the same inputs as the exact variant.  Since the base
/// lies in `(0, 1]`, the series always converges and the difference to the
/// exact result is bounded by `Bo · ε`.
///
/// # Errors
///
/// As [`swap_amount_out_exact`].
pub fn swap_amount_out_approx<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
    amount_in: P,
    fee: P,
) -> Result<P, MathError> {
    let input = validate(balance_in, weight_in, balance_out, weight_out, amount_in, fee)?;
    amount_out(&input, PowerMode::Approx)
}

fn validate<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
    amount_in: P,
    fee: P,
) -> Result<SwapInput<P>, MathError> {
    SwapInput::new(balance_in, weight_in, balance_out, weight_out, amount_in, fee).map_err(
        |err| {
            debug!(%err, "swap_amount_out rejected");
            err
        },
    )
}

fn amount_out<P: Precision>(input: &SwapInput<P>, mode: PowerMode) -> Result<P, MathError> {
    let bi = input.balance_in().get();
    let effective = input.effective_amount_in()?;
    let ratio = bi.checked_div(&bi.checked_add(&effective)?, Rounding::Down)?;
    let exponent = input
        .weight_in()
        .ratio(input.weight_out())?;
    let retained = mode.raise(ratio, exponent)?;
    let released = P::one().checked_sub(&retained)?;
    input.balance_out().get().checked_mul(&released)
}
