//! Input amount that moves the pool to a target spot price.
//!
//! Holding the weighted invariant `Bi^Wi · Bo^Wo` fixed, selling `Ai` of
//! the input asset moves the spot price from `SER0` to
//!
//! ```text
//! SER1 = SER0 · (1 + Ai' / Bi)^((Wi + Wo) / Wo)
//! ```
//!
//! Solving for the pre-fee amount gives
//!
//! ```text
//! Ai = Bi · ((SER1 / SER0)^(Wo / (Wi + Wo)) − 1) / (1 − fee)
//! ```
//!
//! `SER1` is supplied by the caller.  Selling the input asset can only
//! raise its price, so a target below the current spot price is rejected.

use tracing::debug;

use super::spot_price::{spot_price_of, validate};
use super::PowerMode;
use crate::config::MAX_APPROX_BASE;
use crate::domain::{is_positive, Fee, Rounding};
use crate::error::MathError;
use crate::math::Precision;

/// Amount in that moves the spot price to `target_price`, using
/// [`Precision::checked_pow`].
///
/// # Errors
///
/// - [`MathError::Domain`] if any of `Bi, Wi, Bo, Wo, SER1` is not strictly
///   positive, `fee ∉ [0, 1)`, or `SER1` is below the current spot price.
/// - [`MathError::Domain`] if `SER1 / SER0 >= 2` and the backend has no
///   closed-form fractional power (fixed-point).
/// - Backend arithmetic errors.
///
/// # Examples
///
/// ```
/// use weighted_math::math::FloatArithmetic as F;
/// use weighted_math::pricing::spot_price_from_invariant_exact;
///
/// // balanced pool, price 1 → 1.5
/// let Ok(ai) = spot_price_from_invariant_exact(
///     F::new(10.0), F::new(0.3), F::new(10.0), F::new(0.3), F::new(1.5), F::new(0.0),
/// ) else {
///     panic!("target above current price");
/// };
/// assert!((ai.get() - 10.0 * (1.5f64.sqrt() - 1.0)).abs() < 1e-12);
/// ```
pub fn spot_price_from_invariant_exact<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
    target_price: P,
    fee: P,
) -> Result<P, MathError> {
    amount_to_target(
        balance_in,
        weight_in,
        balance_out,
        weight_out,
        target_price,
        fee,
        PowerMode::Exact,
    )
}

/// [`spot_price_from_invariant_exact`] with the power taken by
/// [`pow_approx`](crate::math::pow_approx).
///
/// # Errors
///
/// As [`spot_price_from_invariant_exact`], plus [`MathError::Domain`] on
/// every backend when `SER1 / SER0` exceeds [`MAX_APPROX_BASE`]: past it the
/// series result drifts from the exact one by more than its error bound.
pub fn spot_price_from_invariant_approx<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
    target_price: P,
    fee: P,
) -> Result<P, MathError> {
    amount_to_target(
        balance_in,
        weight_in,
        balance_out,
        weight_out,
        target_price,
        fee,
        PowerMode::Approx,
    )
}

fn amount_to_target<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
    target_price: P,
    fee: P,
    mode: PowerMode,
) -> Result<P, MathError> {
    let reject = |err: MathError| {
        debug!(%err, "spot_price_from_invariant rejected");
        err
    };
    let (bi, wi, bo, wo) = validate(balance_in, weight_in, balance_out, weight_out).map_err(reject)?;
    let fee = Fee::new(fee).map_err(reject)?;
    if !is_positive(&target_price) {
        return Err(reject(MathError::Domain("target price must be positive")));
    }

    let current = spot_price_of(&bi, &wi, &bo, &wo)?;
    if target_price < current {
        debug!(?target_price, ?current, "target below current spot price");
        return Err(MathError::Domain(
            "target price must not be below the current spot price",
        ));
    }

    let base = target_price.checked_div(&current, Rounding::Down)?;
    if mode == PowerMode::Approx && base > P::from_f64(MAX_APPROX_BASE) {
        debug!(?base, "price ratio beyond the approximate power's range");
        return Err(MathError::Domain(
            "target price ratio exceeds the approximate power's range",
        ));
    }
    let exponent = wo
        .get()
        .checked_div(&wi.get().checked_add(&wo.get())?, Rounding::Down)?;
    let growth = mode.raise(base, exponent)?.checked_sub(&P::one())?;
    bi.get()
        .checked_mul(&growth)?
        .checked_div(&fee.complement()?, Rounding::Down)
}
