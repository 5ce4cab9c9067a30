//! One pricing interface over every numeric representation.
//!
//! [`PricingEngine`] is the seam that lets a single test suite compare the
//! `f64` reference, the generic fixed-point backend and the raw wad entry
//! points against each other.  Each engine fixes its own value type and
//! knows how to move values between that type and `f64`.
//!
//! # Encoding
//!
//! [`PricingEngine::encode`] and [`PricingEngine::decode`] are lossy by
//! nature: a wad engine keeps 18 decimals, a float engine keeps ~16
//! significant digits.  They exist for fixtures and oracle comparison, not
//! for round-tripping user balances.

use crate::error::MathError;

/// Weighted-pool pricing over a concrete value representation.
///
/// Every operation validates its arguments exactly like the corresponding
/// function in [`pricing`](crate::pricing) and fails on the same inputs in
/// every implementation.
///
/// # Implementors
///
/// - `FloatEngine`: `f64` reference, exact power via `powf`
/// - `FixedPointEngine`: `u128` wad through the generic `Precision` code
/// - `WadEngine`: the raw `u128` entry points
pub trait PricingEngine {
    /// Value type accepted and returned by the engine.
    type Value: Copy + core::fmt::Debug;

    /// Short human-readable name, used in test diagnostics.
    const NAME: &'static str;

    /// Converts an `f64` into the engine's representation.
    fn encode(&self, value: f64) -> Self::Value;

    /// Converts an engine value back into `f64`.
    fn decode(&self, value: Self::Value) -> f64;

    /// Bounded-error `base^exponent`.
    ///
    /// # Errors
    ///
    /// [`MathError::Domain`] outside the series domain; arithmetic errors
    /// otherwise.
    fn pow_approx(&self, base: Self::Value, exponent: Self::Value)
        -> Result<Self::Value, MathError>;

    /// `(Bi / Wi) / (Bo / Wo)`.
    ///
    /// # Errors
    ///
    /// [`MathError::Domain`] if any argument is not strictly positive.
    fn spot_price(
        &self,
        balance_in: Self::Value,
        weight_in: Self::Value,
        balance_out: Self::Value,
        weight_out: Self::Value,
    ) -> Result<Self::Value, MathError>;

    /// Swap output with the backend's exact power.
    ///
    /// # Errors
    ///
    /// [`MathError::Domain`] for invalid swap parameters.
    fn swap_amount_out_exact(
        &self,
        balance_in: Self::Value,
        weight_in: Self::Value,
        balance_out: Self::Value,
        weight_out: Self::Value,
        amount_in: Self::Value,
        fee: Self::Value,
    ) -> Result<Self::Value, MathError>;

    /// Swap output with the series power.
    ///
    /// # Errors
    ///
    /// [`MathError::Domain`] for invalid swap parameters.
    fn swap_amount_out_approx(
        &self,
        balance_in: Self::Value,
        weight_in: Self::Value,
        balance_out: Self::Value,
        weight_out: Self::Value,
        amount_in: Self::Value,
        fee: Self::Value,
    ) -> Result<Self::Value, MathError>;

    /// Amount in that moves the spot price to `target_price`, exact power.
    ///
    /// # Errors
    ///
    /// [`MathError::Domain`] for invalid pool parameters or a target below
    /// the current spot price.
    fn spot_price_from_invariant_exact(
        &self,
        balance_in: Self::Value,
        weight_in: Self::Value,
        balance_out: Self::Value,
        weight_out: Self::Value,
        target_price: Self::Value,
        fee: Self::Value,
    ) -> Result<Self::Value, MathError>;

    /// Amount in that moves the spot price to `target_price`, series power.
    ///
    /// # Errors
    ///
    /// As [`PricingEngine::spot_price_from_invariant_exact`].
    fn spot_price_from_invariant_approx(
        &self,
        balance_in: Self::Value,
        weight_in: Self::Value,
        balance_out: Self::Value,
        weight_out: Self::Value,
        target_price: Self::Value,
        fee: Self::Value,
    ) -> Result<Self::Value, MathError>;
}
