//! Exponentiation built from multiplication and division only.
//!
//! [`pow_approx`] evaluates `base^exponent` for a positive base without a
//! native fractional power:
//!
//! ```text
//! n = floor(exponent)           r = exponent − n
//! base^exponent = base^n · base^r
//!
//! base^n   repeated squaring (exact up to the backend's rounding)
//! base^r   binomial series  Σ C(r, k) · (base − 1)^k
//!          term_k = term_{k−1} · (r − k + 1) / k · (base − 1)
//! ```
//!
//! The series stops after [`MAX_POW_TERMS`](crate::config::MAX_POW_TERMS)
//! terms or once a term falls below
//! [`POW_PRECISION`](crate::config::POW_PRECISION), whichever comes first.
//!
//! # Supported domain
//!
//! | Parameter | Range | Notes |
//! |-----------|-------|-------|
//! | `base` | `[0.05, 1.95]` | documented error bound holds here |
//! | `exponent` | `(0, 10]` | larger exponents scale the error by `base^n` |
//!
//! Outside that box the result is still computed while the series
//! converges (`0 < base < 2`), but the error bound is not guaranteed.
//! `base <= 0`, a negative or non-finite exponent, and `base >= 2` combined
//! with a fractional exponent are rejected with [`MathError::Domain`].

use core::cmp::Ordering;

use tracing::trace;

use crate::config::SeriesConfig;
use crate::domain::Rounding;
use crate::error::MathError;

use super::Precision;

/// Running state of the binomial series for a single `pow_approx` call.
///
/// `term` holds the magnitude of the latest term; its sign is tracked in
/// `negative` so that unsigned backends can evaluate the series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PowTerm<P> {
    sum: P,
    term: P,
    negative: bool,
    index: u32,
}

impl<P: Precision> PowTerm<P> {
    /// The zeroth term: `C(r, 0) · x⁰ = 1`.
    fn new() -> Self {
        Self {
            sum: P::one(),
            term: P::one(),
            negative: false,
            index: 0,
        }
    }

    /// Folds the next term into the partial sum.
    fn advance(&mut self, remainder: &P, x: &P, x_negative: bool) -> Result<(), MathError> {
        let k_minus_one = P::from_u128(u128::from(self.index));
        self.index += 1;
        let k = P::from_u128(u128::from(self.index));

        let (c, c_negative) = remainder.abs_diff(&k_minus_one)?;
        self.term = self
            .term
            .checked_mul(&c.checked_mul(x)?)?
            .checked_div(&k, Rounding::Down)?;

        if x_negative {
            self.negative = !self.negative;
        }
        if c_negative {
            self.negative = !self.negative;
        }

        self.sum = if self.negative {
            self.sum.checked_sub(&self.term)?
        } else {
            self.sum.checked_add(&self.term)?
        };
        Ok(())
    }
}

/// `base^exponent` for an integral exponent via repeated squaring.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if an intermediate square or the result
/// is not representable.
///
/// # Examples
///
/// ```
/// use weighted_math::math::{pow_int, FloatArithmetic};
///
/// let Ok(r) = pow_int(FloatArithmetic::new(3.0), 5) else {
///     panic!("no overflow");
/// };
/// assert_eq!(r.get(), 243.0);
/// ```
pub fn pow_int<P: Precision>(base: P, exponent: u128) -> Result<P, MathError> {
    let mut result = P::one();
    let mut square = base;
    let mut n = exponent;
    while n > 0 {
        if n & 1 == 1 {
            result = result.checked_mul(&square)?;
        }
        n >>= 1;
        if n > 0 {
            square = square.checked_mul(&square)?;
        }
    }
    Ok(result)
}

/// Approximates `base^exponent` with the default [`SeriesConfig`].
///
/// # Errors
///
/// - [`MathError::Domain`] if `base <= 0`, `exponent < 0`, `exponent` is
///   not finite, or `base >= 2` with a fractional exponent.
/// - [`MathError::Overflow`] if `base^floor(exponent)` is not representable.
///
/// # Examples
///
/// ```
/// use weighted_math::math::{pow_approx, FloatArithmetic};
///
/// let Ok(r) = pow_approx(FloatArithmetic::new(1.5), FloatArithmetic::new(1.5)) else {
///     panic!("inside the supported domain");
/// };
/// assert!((r.get() - 1.5f64.powf(1.5)).abs() < 1e-9);
/// ```
pub fn pow_approx<P: Precision>(base: P, exponent: P) -> Result<P, MathError> {
    pow_approx_with(base, exponent, &SeriesConfig::default())
}

/// Approximates `base^exponent` with an explicit series configuration.
///
/// # Errors
///
/// As [`pow_approx`], plus [`MathError::Domain`] for an invalid `config`.
pub fn pow_approx_with<P: Precision>(
    base: P,
    exponent: P,
    config: &SeriesConfig,
) -> Result<P, MathError> {
    config.validate()?;
    if base.partial_cmp(&P::zero()) != Some(Ordering::Greater) {
        return Err(MathError::Domain("power base must be positive"));
    }
    if !matches!(
        exponent.partial_cmp(&P::zero()),
        Some(Ordering::Greater | Ordering::Equal)
    ) || !exponent.to_f64_lossy().is_finite()
    {
        return Err(MathError::Domain("power exponent must be finite and non-negative"));
    }

    let whole = exponent.floor();
    let remainder = exponent.checked_sub(&whole)?;
    if !remainder.is_zero() && base >= P::from_u128(2) {
        return Err(MathError::Domain(
            "series base must be below 2 for a fractional exponent",
        ));
    }

    let whole_pow = pow_int(base, whole.to_u128())?;
    if remainder.is_zero() {
        return Ok(whole_pow);
    }

    let fraction = binomial_series(base, remainder, config)?;
    whole_pow.checked_mul(&fraction)
}

/// `base^exponent`, exact for integral exponents and approximated with the
/// default series otherwise.
///
/// # Errors
///
/// As [`pow_approx`].
pub fn power<P: Precision>(base: P, exponent: P) -> Result<P, MathError> {
    power_with(base, exponent, &SeriesConfig::default())
}

/// [`power`] with an explicit series configuration for the fractional case.
///
/// # Errors
///
/// As [`pow_approx_with`].
pub fn power_with<P: Precision>(
    base: P,
    exponent: P,
    config: &SeriesConfig,
) -> Result<P, MathError> {
    if exponent.floor() == exponent
        && exponent >= P::zero()
        && exponent.to_f64_lossy().is_finite()
    {
        if base.partial_cmp(&P::zero()) != Some(Ordering::Greater) {
            return Err(MathError::Domain("power base must be positive"));
        }
        return pow_int(base, exponent.to_u128());
    }
    pow_approx_with(base, exponent, config)
}

/// `base^remainder` for `remainder ∈ (0, 1)` and `base ∈ (0, 2)`.
fn binomial_series<P: Precision>(
    base: P,
    remainder: P,
    config: &SeriesConfig,
) -> Result<P, MathError> {
    let (x, x_negative) = base.abs_diff(&P::one())?;
    let precision = P::from_f64(config.precision());

    let mut state = PowTerm::new();
    let mut converged = false;
    while state.index < config.max_terms() {
        state.advance(&remainder, &x, x_negative)?;
        if state.term.is_zero() || state.term < precision {
            converged = true;
            break;
        }
    }
    trace!(terms = state.index, converged, "binomial series finished");
    Ok(state.sum)
}
