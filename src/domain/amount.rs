//! Quantity of tokens supplied to a swap.

use super::is_positive;
use crate::error::MathError;
use crate::math::Precision;

/// Swap input `Ai`, strictly positive.
///
/// The upper bound (`Ai < Bi`) depends on the pool and is enforced by
/// [`SwapInput`](super::SwapInput).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount<P>(P);

impl<P: Precision> Amount<P> {
    /// Creates a new `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `value <= 0` (or is `NaN`).
    pub fn new(value: P) -> Result<Self, MathError> {
        if !is_positive(&value) {
            return Err(MathError::Domain("amount in must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn get(&self) -> P {
        self.0
    }
}
