//! Precision trait for feature-gated numeric backends.
//!
//! The [`Precision`] trait abstracts over numeric types so that the power
//! series and the pricing formulas can be written once and run with either
//! floating-point or fixed-point arithmetic.
//!
//! | Feature | Backend | Type |
//! |---------|---------|------|
//! | `float` | IEEE 754 `f64` | `FloatArithmetic` |
//! | `fixed-point` | `u128` scaled by 10^18 | `FixedPointArithmetic` |

use crate::domain::Rounding;
use crate::error::MathError;

/// Abstraction over numeric types used in weighted-pool calculations.
///
/// # Contract
///
/// - All checked arithmetic methods return [`Err`] on overflow, underflow,
///   or division by zero.  They **never** panic and never wrap.
/// - Conversion helpers (`from_u128`, `from_f64`) are infallible but may
///   lose precision or saturate outside the representable range (documented
///   per implementation).
/// - `zero()` and `one()` return the additive and multiplicative identities.
pub trait Precision: Clone + Copy + core::fmt::Debug + PartialEq + PartialOrd {
    // -- Identity constants -------------------------------------------------

    /// Returns the additive identity (zero).
    #[must_use]
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    #[must_use]
    fn one() -> Self;

    // -- Conversions --------------------------------------------------------

    /// Converts the integer `value` to this precision type.
    #[must_use]
    fn from_u128(value: u128) -> Self;

    /// Extracts the integer part as `u128`, truncating toward zero.
    ///
    /// Negative values are clamped to `0`.
    #[must_use]
    fn to_u128(&self) -> u128;

    /// Converts an `f64` value to this precision type.
    #[must_use]
    fn from_f64(value: f64) -> Self;

    /// Converts this value to `f64`, potentially losing precision.
    #[must_use]
    fn to_f64_lossy(&self) -> f64;

    // -- Checked arithmetic -------------------------------------------------

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the result is not representable.
    fn checked_add(&self, other: &Self) -> Result<Self, MathError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Underflow`] if the result is not representable.
    fn checked_sub(&self, other: &Self) -> Result<Self, MathError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Overflow`] if the result is not representable.
    fn checked_mul(&self, other: &Self) -> Result<Self, MathError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `other` is zero.
    /// Returns [`MathError::Overflow`] if the result is not representable.
    fn checked_div(&self, other: &Self, rounding: Rounding) -> Result<Self, MathError>;

    /// `self * mul / div` with a single rounding step in `rounding`'s
    /// direction.
    ///
    /// The intermediate product is never materialized in `Self`, so the call
    /// succeeds whenever the final quotient is representable.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DivisionByZero`] if `div` is zero.
    /// Returns [`MathError::Overflow`] if the result is not representable.
    fn checked_mul_div(
        &self,
        mul: &Self,
        div: &Self,
        rounding: Rounding,
    ) -> Result<Self, MathError>;

    /// The most accurate exponentiation the backend offers.
    ///
    /// Used by the `*_exact` pricing operations.  Each implementation
    /// documents what "exact" means for its representation.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] for a non-positive base and
    /// [`MathError::Overflow`] if the result is not representable.
    fn checked_pow(&self, exponent: &Self) -> Result<Self, MathError>;

    // -- Helpers ------------------------------------------------------------

    /// Rounds toward negative infinity.
    #[must_use]
    fn floor(&self) -> Self;

    /// Returns `true` if the value is zero.
    #[must_use]
    fn is_zero(&self) -> bool;

    /// Returns `|self - other|` together with `true` when `self < other`.
    ///
    /// Lets unsigned backends carry a sign without a signed type.
    ///
    /// # Errors
    ///
    /// Propagates the backend's subtraction error.
    fn abs_diff(&self, other: &Self) -> Result<(Self, bool), MathError> {
        if *self >= *other {
            Ok((self.checked_sub(other)?, false))
        } else {
            Ok((other.checked_sub(self)?, true))
        }
    }
}
