//! Unified error type for the weighted-math library.
//!
//! Every fallible operation in the crate returns [`MathError`], so callers
//! can tell a rejected input apart from an arithmetic failure that surfaced
//! in the middle of a computation.

/// Errors produced by pricing and arithmetic operations.
///
/// All variants are fatal to the call that produced them: nothing is
/// retried and no partial result is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MathError {
    /// An input violates a domain precondition (non-positive balance or
    /// weight, fee outside `[0, 1)`, `amount_in >= balance_in`, or a power
    /// base outside the series' convergence interval).
    ///
    /// Raised before any numeric work begins.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// A denominator evaluated to zero.
    ///
    /// Distinct from [`MathError::Domain`] because it can arise from an
    /// intermediate value even when the top-level inputs were valid.
    #[error("division by zero")]
    DivisionByZero,

    /// A result or intermediate exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction fell below the representable range.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),
}

impl MathError {
    /// Returns `true` for [`MathError::Domain`].
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, MathError>;
