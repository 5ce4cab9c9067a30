//! Swap fee as a fraction of the input amount.

use core::cmp::Ordering;

use crate::error::MathError;
use crate::math::Precision;

/// Swap fee in `[0, 1)`.
///
/// A fee of one would leave no effective input, so it is rejected along
/// with negative values.
///
/// # Examples
///
/// ```
/// use weighted_math::domain::Fee;
/// use weighted_math::math::FloatArithmetic;
///
/// assert!(Fee::new(FloatArithmetic::new(0.003)).is_ok());
/// assert!(Fee::new(FloatArithmetic::new(1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fee<P>(P);

impl<P: Precision> Fee<P> {
    /// Creates a new `Fee`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `value < 0`, `value >= 1`, or
    /// `value` is `NaN`.
    pub fn new(value: P) -> Result<Self, MathError> {
        if !matches!(
            value.partial_cmp(&P::zero()),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            return Err(MathError::Domain("fee must not be negative"));
        }
        if value >= P::one() {
            return Err(MathError::Domain("fee must be below one"));
        }
        Ok(Self(value))
    }

    /// A zero fee.
    #[must_use]
    pub fn zero() -> Self {
        Self(P::zero())
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn get(&self) -> P {
        self.0
    }

    /// `1 - fee`, the share of the input that reaches the pool.
    ///
    /// # Errors
    ///
    /// Propagates backend subtraction errors (none for a validated fee).
    pub fn complement(&self) -> Result<P, MathError> {
        P::one().checked_sub(&self.0)
    }
}
