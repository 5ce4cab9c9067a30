//! Weighted-pool pricing formulas.
//!
//! Every operation validates its arguments into [`domain`](crate::domain)
//! types before any arithmetic runs, then evaluates the closed-form
//! Balancer relation on the chosen [`Precision`] backend.
//!
//! | Operation | Formula |
//! |-----------|---------|
//! | [`spot_price`] | `(Bi / Wi) / (Bo / Wo)` |
//! | [`swap_amount_out_exact`] / [`swap_amount_out_approx`] | `Bo · (1 − (Bi / (Bi + Ai·(1 − fee)))^(Wi / Wo))` |
//! | [`spot_price_from_invariant_exact`] / [`spot_price_from_invariant_approx`] | `Bi · ((SER1 / SER0)^(Wo / (Wi + Wo)) − 1) / (1 − fee)` |
//!
//! The `_exact` variants raise powers with the backend's
//! [`Precision::checked_pow`]; the `_approx` variants use
//! [`pow_approx`](crate::math::pow_approx).  Both share every domain check,
//! so they fail on exactly the same inputs.
//!
//! All divisions round [`Rounding::Down`](crate::domain::Rounding::Down).

mod invariant;
mod spot_price;
mod swap;

#[cfg(all(test, feature = "float"))]
mod proptest_properties;

pub use invariant::{spot_price_from_invariant_approx, spot_price_from_invariant_exact};
pub use spot_price::spot_price;
pub use swap::{swap_amount_out_approx, swap_amount_out_exact};

use crate::error::MathError;
use crate::math::{pow_approx, Precision};

/// Which exponentiation a formula is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PowerMode {
    /// [`Precision::checked_pow`].
    Exact,
    /// [`pow_approx`] with the default series.
    Approx,
}

impl PowerMode {
    fn raise<P: Precision>(self, base: P, exponent: P) -> Result<P, MathError> {
        match self {
            Self::Exact => base.checked_pow(&exponent),
            Self::Approx => pow_approx(base, exponent),
        }
    }
}
