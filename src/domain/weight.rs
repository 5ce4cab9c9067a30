//! Denormalized weight of a pool asset.

use super::is_positive;
use crate::error::MathError;
use crate::math::Precision;

/// Weight `W` of one pool asset.
///
/// Only ratios of weights enter the formulas, so weights need not sum to
/// any particular total; they must be strictly positive.
///
/// # Examples
///
/// ```
/// use weighted_math::domain::Weight;
/// use weighted_math::math::FloatArithmetic;
///
/// assert!(Weight::new(FloatArithmetic::new(0.8)).is_ok());
/// assert!(Weight::new(FloatArithmetic::new(-0.2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Weight<P>(P);

impl<P: Precision> Weight<P> {
    /// Creates a new `Weight`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `value <= 0` (or is `NaN`).
    pub fn new(value: P) -> Result<Self, MathError> {
        if !is_positive(&value) {
            return Err(MathError::Domain("weight must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn get(&self) -> P {
        self.0
    }

    /// `self / other`, the exponent of the swap formulas.
    ///
    /// # Errors
    ///
    /// Propagates backend division errors.
    pub fn ratio(&self, other: &Self) -> Result<P, MathError> {
        self.0.checked_div(&other.0, super::Rounding::Down)
    }
}
