//! Fixed-point implementation of the [`Precision`] trait.
//!
//! This module is only available when the `fixed-point` Cargo feature is
//! enabled.  It provides [`FixedPointArithmetic`], a newtype over a `u128`
//! raw value with an implicit decimal scale of [`SCALE`] = 10^18 (the
//! "wad" convention used by integer-only virtual machines).
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Representation | `raw / 10^18`, unsigned |
//! | Precision | 10⁻¹⁸ |
//! | Range | `0 ..= (2^128 − 1) / 10^18` ≈ 3.4 × 10²⁰ |
//! | Intermediates | 256-bit ([`mul_div`](super::mul_div)) |
//! | Rounding | floor, everywhere |
//! | Determinism | 100 % bit-for-bit |

use core::fmt;

use crate::config::SeriesConfig;
use crate::domain::Rounding;
use crate::error::MathError;

use super::mul_div::mul_div;
use super::pow::power_with;
use super::Precision;

/// Number of raw units in one whole: values are stored as `v * SCALE`.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

#[allow(clippy::cast_precision_loss)]
const SCALE_F64: f64 = SCALE as f64;

/// Wad-scaled `u128` precision type for integer-only computation.
///
/// All checked arithmetic methods return [`Err`] on overflow, underflow,
/// or division by zero.  Multiplication and division go through a 256-bit
/// intermediate, so only the final result has to fit in `u128`.
///
/// # Examples
///
/// ```
/// use weighted_math::math::{FixedPointArithmetic, Precision};
///
/// let a = FixedPointArithmetic::from_u128(10);
/// let b = FixedPointArithmetic::from_u128(4);
/// let Ok(q) = a.checked_div(&b, weighted_math::domain::Rounding::Down) else {
///     panic!("non-zero divisor");
/// };
/// assert_eq!(q.raw(), 2_500_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPointArithmetic(u128);

impl FixedPointArithmetic {
    /// Wraps a raw scaled value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled value.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for FixedPointArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / SCALE, self.0 % SCALE)
    }
}

impl Precision for FixedPointArithmetic {
    #[inline]
    fn zero() -> Self {
        Self(0)
    }

    #[inline]
    fn one() -> Self {
        Self(SCALE)
    }

    // -- Conversions --------------------------------------------------------

    /// Scales an integer up by [`SCALE`], saturating at `u128::MAX`.
    #[inline]
    fn from_u128(value: u128) -> Self {
        Self(value.saturating_mul(SCALE))
    }

    #[inline]
    fn to_u128(&self) -> u128 {
        self.0 / SCALE
    }

    /// Rounds `value * SCALE` to the nearest raw unit.
    ///
    /// Negative and `NaN` inputs map to zero; values beyond the range
    /// saturate to `u128::MAX`.
    #[inline]
    fn from_f64(value: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let raw = (value * SCALE_F64).round() as u128;
        Self(raw)
    }

    /// Converts integer and fractional parts separately so that values
    /// above 2^53 raw units keep their fractional digits.
    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let whole = (self.0 / SCALE) as f64;
        #[allow(clippy::cast_precision_loss)]
        let frac = (self.0 % SCALE) as f64 / SCALE_F64;
        whole + frac
    }

    // -- Checked arithmetic -------------------------------------------------

    fn checked_add(&self, other: &Self) -> Result<Self, MathError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MathError::Overflow("fixed-point addition overflow"))
    }

    fn checked_sub(&self, other: &Self) -> Result<Self, MathError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MathError::Underflow("fixed-point subtraction underflow"))
    }

    /// `floor(a * b / SCALE)`.
    fn checked_mul(&self, other: &Self) -> Result<Self, MathError> {
        mul_div(self.0, other.0, SCALE, Rounding::Down)
            .map(Self)
            .map_err(|_| MathError::Overflow("fixed-point multiplication overflow"))
    }

    /// `a * SCALE / b` in the requested direction.
    fn checked_div(&self, other: &Self, rounding: Rounding) -> Result<Self, MathError> {
        if other.0 == 0 {
            return Err(MathError::DivisionByZero);
        }
        mul_div(self.0, SCALE, other.0, rounding)
            .map(Self)
            .map_err(|_| MathError::Overflow("fixed-point division overflow"))
    }

    /// `floor(a * b / c)` on raw values: the scales cancel, so the only
    /// intermediate is the 256-bit product.
    fn checked_mul_div(
        &self,
        mul: &Self,
        div: &Self,
        rounding: Rounding,
    ) -> Result<Self, MathError> {
        if div.0 == 0 {
            return Err(MathError::DivisionByZero);
        }
        mul_div(self.0, mul.0, div.0, rounding)
            .map(Self)
            .map_err(|_| MathError::Overflow("fixed-point mul-div overflow"))
    }

    /// Exact repeated squaring for integral exponents; otherwise the
    /// binomial series run at full wad precision
    /// ([`SeriesConfig::full_precision`]).
    fn checked_pow(&self, exponent: &Self) -> Result<Self, MathError> {
        power_with(*self, *exponent, &SeriesConfig::full_precision())
    }

    // -- Helpers ------------------------------------------------------------

    #[inline]
    fn floor(&self) -> Self {
        Self(self.0 - self.0 % SCALE)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
