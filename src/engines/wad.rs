//! Raw wad entry points for integer-only callers.
//!
//! Every function takes and returns `u128` values scaled by
//! [`SCALE`](crate::math::SCALE) = 10^18, so `1.5` is passed as
//! `1_500_000_000_000_000_000`.  They are thin shims over the generic
//! fixed-point code and fail on exactly the same inputs.
//!
//! ```
//! use weighted_math::engines::wad;
//!
//! const WAD: u128 = 1_000_000_000_000_000_000;
//!
//! let Ok(r) = wad::wpow_approx(3 * WAD / 2, 3 * WAD / 2) else {
//!     panic!("inside the series domain");
//! };
//! // 1.5^1.5 = 1.837117307...
//! assert!(r.abs_diff(1_837_117_307_087_383_600) < 1_000_000_000_000);
//! ```

use crate::domain::Rounding;
use crate::error::MathError;
use crate::math::{self, FixedPointArithmetic, Precision};
use crate::pricing;
use crate::traits::PricingEngine;

type Wad = FixedPointArithmetic;

#[inline]
fn wad(raw: u128) -> Wad {
    Wad::from_raw(raw)
}

/// `floor(a · b / 10^18)`.
///
/// # Errors
///
/// [`MathError::Overflow`] if the result exceeds `u128`.
pub fn wmul(a: u128, b: u128) -> Result<u128, MathError> {
    wad(a).checked_mul(&wad(b)).map(|v| v.raw())
}

/// `floor(a · 10^18 / b)`.
///
/// # Errors
///
/// [`MathError::DivisionByZero`] if `b == 0`; [`MathError::Overflow`] if
/// the result exceeds `u128`.
pub fn wdiv(a: u128, b: u128) -> Result<u128, MathError> {
    wad(a).checked_div(&wad(b), Rounding::Down).map(|v| v.raw())
}

/// Series approximation of `base^exponent`.
///
/// # Errors
///
/// As [`pow_approx`](crate::math::pow_approx).
pub fn wpow_approx(base: u128, exponent: u128) -> Result<u128, MathError> {
    math::pow_approx(wad(base), wad(exponent)).map(|v| v.raw())
}

/// `base^exponent`: exact squaring for whole exponents, series otherwise.
///
/// # Errors
///
/// As [`power`](crate::math::power).
pub fn wpow(base: u128, exponent: u128) -> Result<u128, MathError> {
    math::power(wad(base), wad(exponent)).map(|v| v.raw())
}

/// Wad [`spot_price`](crate::pricing::spot_price).
///
/// # Errors
///
/// [`MathError::Domain`] if any argument is zero.
pub fn wspot_price(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
) -> Result<u128, MathError> {
    pricing::spot_price(
        wad(balance_in),
        wad(weight_in),
        wad(balance_out),
        wad(weight_out),
    )
    .map(|v| v.raw())
}

/// Wad [`swap_amount_out_exact`](crate::pricing::swap_amount_out_exact).
///
/// # Errors
///
/// [`MathError::Domain`] for invalid swap parameters.
pub fn wswap_amount_out_exact(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    amount_in: u128,
    fee: u128,
) -> Result<u128, MathError> {
    pricing::swap_amount_out_exact(
        wad(balance_in),
        wad(weight_in),
        wad(balance_out),
        wad(weight_out),
        wad(amount_in),
        wad(fee),
    )
    .map(|v| v.raw())
}

/// Wad [`swap_amount_out_approx`](crate::pricing::swap_amount_out_approx).
///
/// # Errors
///
/// [`MathError::Domain`] for invalid swap parameters.
pub fn wswap_amount_out_approx(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    amount_in: u128,
    fee: u128,
) -> Result<u128, MathError> {
    pricing::swap_amount_out_approx(
        wad(balance_in),
        wad(weight_in),
        wad(balance_out),
        wad(weight_out),
        wad(amount_in),
        wad(fee),
    )
    .map(|v| v.raw())
}

/// Wad
/// [`spot_price_from_invariant_exact`](crate::pricing::spot_price_from_invariant_exact).
///
/// # Errors
///
/// [`MathError::Domain`] for invalid pool parameters or a target below the
/// current spot price.
pub fn wspot_price_from_invariant_exact(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    target_price: u128,
    fee: u128,
) -> Result<u128, MathError> {
    pricing::spot_price_from_invariant_exact(
        wad(balance_in),
        wad(weight_in),
        wad(balance_out),
        wad(weight_out),
        wad(target_price),
        wad(fee),
    )
    .map(|v| v.raw())
}

/// Wad
/// [`spot_price_from_invariant_approx`](crate::pricing::spot_price_from_invariant_approx).
///
/// # Errors
///
/// As [`wspot_price_from_invariant_exact`].
pub fn wspot_price_from_invariant_approx(
    balance_in: u128,
    weight_in: u128,
    balance_out: u128,
    weight_out: u128,
    target_price: u128,
    fee: u128,
) -> Result<u128, MathError> {
    pricing::spot_price_from_invariant_approx(
        wad(balance_in),
        wad(weight_in),
        wad(balance_out),
        wad(weight_out),
        wad(target_price),
        wad(fee),
    )
    .map(|v| v.raw())
}

/// [`PricingEngine`] over the raw entry points, with `u128` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WadEngine;

impl PricingEngine for WadEngine {
    type Value = u128;

    const NAME: &'static str = "wad";

    fn encode(&self, value: f64) -> u128 {
        Wad::from_f64(value).raw()
    }

    fn decode(&self, value: u128) -> f64 {
        wad(value).to_f64_lossy()
    }

    fn pow_approx(&self, base: u128, exponent: u128) -> Result<u128, MathError> {
        wpow_approx(base, exponent)
    }

    fn spot_price(
        &self,
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
    ) -> Result<u128, MathError> {
        wspot_price(balance_in, weight_in, balance_out, weight_out)
    }

    fn swap_amount_out_exact(
        &self,
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        amount_in: u128,
        fee: u128,
    ) -> Result<u128, MathError> {
        wswap_amount_out_exact(balance_in, weight_in, balance_out, weight_out, amount_in, fee)
    }

    fn swap_amount_out_approx(
        &self,
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        amount_in: u128,
        fee: u128,
    ) -> Result<u128, MathError> {
        wswap_amount_out_approx(balance_in, weight_in, balance_out, weight_out, amount_in, fee)
    }

    fn spot_price_from_invariant_exact(
        &self,
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        target_price: u128,
        fee: u128,
    ) -> Result<u128, MathError> {
        wspot_price_from_invariant_exact(
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            target_price,
            fee,
        )
    }

    fn spot_price_from_invariant_approx(
        &self,
        balance_in: u128,
        weight_in: u128,
        balance_out: u128,
        weight_out: u128,
        target_price: u128,
        fee: u128,
    ) -> Result<u128, MathError> {
        wspot_price_from_invariant_approx(
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            target_price,
            fee,
        )
    }
}
