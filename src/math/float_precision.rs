//! Floating-point implementation of the [`Precision`] trait.
//!
//! This module is only available when the `float` Cargo feature is enabled.
//! It provides [`FloatArithmetic`], a newtype over `f64` that implements
//! [`Precision`] using IEEE 754 double-precision arithmetic.  It is the
//! correctness oracle the fixed-point backend is measured against.
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Range | ±2^1024 |
//! | Exact power | `f64::powf` |
//! | Determinism | Subject to IEEE 754 rounding and libm |

use core::fmt;

use crate::domain::Rounding;
use crate::error::MathError;

use super::Precision;

/// IEEE 754 `f64`-backed precision type for off-chain computation.
///
/// All checked arithmetic methods return [`Err`] when the result is
/// non-finite (`NaN` or `±∞`).
///
/// # Examples
///
/// ```
/// use weighted_math::math::{FloatArithmetic, Precision};
///
/// let a = FloatArithmetic::new(10.0);
/// let b = FloatArithmetic::new(3.0);
/// let sum = a.checked_add(&b);
/// assert!(sum.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FloatArithmetic(f64);

impl FloatArithmetic {
    /// Creates a new `FloatArithmetic` from a raw `f64`.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    fn finite(value: f64, context: &'static str) -> Result<Self, MathError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(MathError::Overflow(context))
        }
    }
}

impl From<f64> for FloatArithmetic {
    #[inline]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for FloatArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Precision for FloatArithmetic {
    #[inline]
    fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    fn one() -> Self {
        Self(1.0)
    }

    // -- Conversions --------------------------------------------------------

    /// Values above 2^53 lose precision because `f64` has only 53 bits of
    /// mantissa.
    #[inline]
    fn from_u128(value: u128) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Self(value as f64)
    }

    /// Negative values and `NaN` produce `0`; values above `u128::MAX`
    /// saturate.
    #[inline]
    fn to_u128(&self) -> u128 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = self.0 as u128;
        v
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.0
    }

    // -- Checked arithmetic -------------------------------------------------

    fn checked_add(&self, other: &Self) -> Result<Self, MathError> {
        Self::finite(self.0 + other.0, "float addition overflow")
    }

    fn checked_sub(&self, other: &Self) -> Result<Self, MathError> {
        let result = self.0 - other.0;
        if result.is_finite() {
            Ok(Self(result))
        } else {
            Err(MathError::Underflow("float subtraction underflow"))
        }
    }

    fn checked_mul(&self, other: &Self) -> Result<Self, MathError> {
        Self::finite(self.0 * other.0, "float multiplication overflow")
    }

    /// Divides using IEEE 754 semantics.
    ///
    /// The `_rounding` parameter is accepted for API consistency but has no
    /// effect; `f64` division always uses round-to-nearest-even.
    fn checked_div(&self, other: &Self, _rounding: Rounding) -> Result<Self, MathError> {
        if other.0 == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Self::finite(self.0 / other.0, "float division overflow")
    }

    /// `(a * b) / c`, rounding ignored as in [`checked_div`](Self::checked_div).
    fn checked_mul_div(
        &self,
        mul: &Self,
        div: &Self,
        _rounding: Rounding,
    ) -> Result<Self, MathError> {
        if div.0 == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Self::finite(self.0 * mul.0 / div.0, "float mul-div overflow")
    }

    /// Native `powf`; this is the reference every approximation is
    /// compared against.
    fn checked_pow(&self, exponent: &Self) -> Result<Self, MathError> {
        if self.0.is_nan() || self.0 <= 0.0 {
            return Err(MathError::Domain("power base must be positive"));
        }
        Self::finite(self.0.powf(exponent.0), "float power overflow")
    }

    // -- Helpers ------------------------------------------------------------

    #[inline]
    fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    type F = FloatArithmetic;

    // -- Identity -----------------------------------------------------------

    #[test]
    fn zero_is_zero() {
        assert!(F::zero().is_zero());
        assert_eq!(F::zero().to_u128(), 0);
    }

    #[test]
    fn one_is_one() {
        assert!(!F::one().is_zero());
        assert_eq!(F::one().to_u128(), 1);
    }

    // -- Conversions --------------------------------------------------------

    #[test]
    fn to_u128_truncates() {
        assert_eq!(F::new(3.9).to_u128(), 3);
        assert_eq!(F::new(-2.0).to_u128(), 0);
        assert_eq!(F::new(f64::NAN).to_u128(), 0);
    }

    #[test]
    fn from_u128_roundtrip_small() {
        assert_eq!(F::from_u128(1_000_000).to_u128(), 1_000_000);
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn checked_add_overflow() {
        let Err(MathError::Overflow(_)) = F::new(f64::MAX).checked_add(&F::new(f64::MAX)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn checked_sub_negative_is_allowed() {
        let Ok(r) = F::new(3.0).checked_sub(&F::new(5.0)) else {
            panic!("expected Ok");
        };
        assert!((r.get() + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn checked_sub_non_finite() {
        let Err(MathError::Underflow(_)) = F::new(f64::MIN).checked_sub(&F::new(f64::MAX)) else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn checked_mul_overflow() {
        let Err(MathError::Overflow(_)) = F::new(f64::MAX).checked_mul(&F::new(2.0)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn checked_div_by_zero() {
        assert_eq!(
            F::new(1.0).checked_div(&F::zero(), Rounding::Down),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn checked_div_ignores_rounding() {
        let Ok(down) = F::new(10.0).checked_div(&F::new(3.0), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = F::new(10.0).checked_div(&F::new(3.0), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, up);
    }

    // -- Power --------------------------------------------------------------

    #[test]
    fn checked_pow_matches_powf() {
        let Ok(r) = F::new(1.5).checked_pow(&F::new(1.5)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.get(), 1.5f64.powf(1.5));
    }

    #[test]
    fn checked_pow_rejects_non_positive_base() {
        assert!(F::new(0.0).checked_pow(&F::new(0.5)).is_err_and(|e| e.is_domain()));
        assert!(F::new(-1.0).checked_pow(&F::new(2.0)).is_err_and(|e| e.is_domain()));
        assert!(F::new(f64::NAN).checked_pow(&F::new(2.0)).is_err_and(|e| e.is_domain()));
    }

    #[test]
    fn checked_pow_overflow() {
        let Err(MathError::Overflow(_)) = F::new(10.0).checked_pow(&F::new(400.0)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn checked_mul_div_by_zero() {
        assert_eq!(
            F::new(2.0).checked_mul_div(&F::new(3.0), &F::zero(), Rounding::Down),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn checked_mul_div_scales() {
        let Ok(r) = F::new(0.3).checked_mul_div(&F::new(0.8), &F::new(0.2), Rounding::Down)
        else {
            panic!("expected Ok");
        };
        assert!((r.get() - 1.2).abs() < 1e-12);
    }

    // -- Helpers ------------------------------------------------------------

    #[test]
    fn floor_rounds_down() {
        assert_eq!(F::new(2.7).floor(), F::new(2.0));
        assert_eq!(F::new(0.2).floor(), F::zero());
    }
}
