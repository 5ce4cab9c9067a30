//! Full-width `a * b / c` for `u128` operands.
//!
//! The product of two `u128` values always fits in 256 bits, so the
//! intermediate is computed in [`U256`] and only the quotient has to fit
//! back into `u128`.  This is the single primitive behind fixed-point
//! multiplication (`a * b / SCALE`) and division (`a * SCALE / b`).
//!
//! # Convention
//!
//! The crate rounds **down** everywhere.  Mixing directions across
//! operations compounds pricing error asymmetrically, so [`Rounding::Up`]
//! exists for callers that need a protocol-favourable bound on a single
//! value, not for the pricing formulas.
//!
//! # Examples
//!
//! ```
//! use weighted_math::domain::Rounding;
//! use weighted_math::math::mul_div;
//!
//! assert_eq!(mul_div(10, 1, 3, Rounding::Down), Ok(3));
//! assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
//! assert!(mul_div(1, 1, 0, Rounding::Down).is_err());
//! ```

use ethnum::U256;

use crate::domain::Rounding;
use crate::error::MathError;

/// Computes `a * b / c` with a 256-bit intermediate and explicit rounding.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] if `c` is zero.
/// - [`MathError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> Result<u128, MathError> {
    if c == 0 {
        return Err(MathError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let divisor = U256::from(c);
    let mut quotient = product / divisor;
    if rounding.is_up() && product % divisor != U256::ZERO {
        quotient += U256::ONE;
    }
    if quotient > U256::from(u128::MAX) {
        return Err(MathError::Overflow("mul_div result exceeds u128"));
    }
    Ok(quotient.as_u128())
}
