//! Token reserve held by a pool.

use core::fmt;

use super::is_positive;
use crate::error::MathError;
use crate::math::Precision;

/// Reserve `B` of one pool asset.
///
/// Every pricing formula divides by a balance, so the constructor only
/// accepts strictly positive values.
///
/// # Examples
///
/// ```
/// use weighted_math::domain::Balance;
/// use weighted_math::math::FloatArithmetic;
///
/// assert!(Balance::new(FloatArithmetic::new(100.0)).is_ok());
/// assert!(Balance::new(FloatArithmetic::new(0.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Balance<P>(P);

impl<P: Precision> Balance<P> {
    /// Creates a new `Balance`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `value <= 0` (or is `NaN`).
    pub fn new(value: P) -> Result<Self, MathError> {
        if !is_positive(&value) {
            return Err(MathError::Domain("balance must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn get(&self) -> P {
        self.0
    }
}

impl<P: fmt::Display> fmt::Display for Balance<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
