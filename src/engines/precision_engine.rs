//! Generic engine over any [`Precision`] backend.

use core::marker::PhantomData;

use crate::error::MathError;
use crate::math::{self, Precision};
use crate::pricing;
use crate::traits::PricingEngine;

#[cfg(feature = "fixed-point")]
use crate::math::FixedPointArithmetic;
#[cfg(feature = "float")]
use crate::math::FloatArithmetic;

/// Routes every [`PricingEngine`] operation to the generic
/// [`pricing`] functions on backend `P`.
///
/// Stateless; construct it with [`PrecisionEngine::new`] or `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrecisionEngine<P> {
    backend: PhantomData<P>,
}

impl<P> PrecisionEngine<P> {
    /// Creates the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            backend: PhantomData,
        }
    }
}

/// `f64` reference engine.
#[cfg(feature = "float")]
pub type FloatEngine = PrecisionEngine<FloatArithmetic>;

/// Wad fixed-point engine.
#[cfg(feature = "fixed-point")]
pub type FixedPointEngine = PrecisionEngine<FixedPointArithmetic>;

/// Engine names per backend, for test diagnostics.
pub trait BackendName {
    /// The name.
    const NAME: &'static str;
}

#[cfg(feature = "float")]
impl BackendName for FloatArithmetic {
    const NAME: &'static str = "float";
}

#[cfg(feature = "fixed-point")]
impl BackendName for FixedPointArithmetic {
    const NAME: &'static str = "fixed-point";
}

impl<P: Precision + BackendName> PricingEngine for PrecisionEngine<P> {
    type Value = P;

    const NAME: &'static str = P::NAME;

    fn encode(&self, value: f64) -> P {
        P::from_f64(value)
    }

    fn decode(&self, value: P) -> f64 {
        value.to_f64_lossy()
    }

    fn pow_approx(&self, base: P, exponent: P) -> Result<P, MathError> {
        math::pow_approx(base, exponent)
    }

    fn spot_price(
        &self,
        balance_in: P,
        weight_in: P,
        balance_out: P,
        weight_out: P,
    ) -> Result<P, MathError> {
        pricing::spot_price(balance_in, weight_in, balance_out, weight_out)
    }

    fn swap_amount_out_exact(
        &self,
        balance_in: P,
        weight_in: P,
        balance_out: P,
        weight_out: P,
        amount_in: P,
        fee: P,
    ) -> Result<P, MathError> {
        pricing::swap_amount_out_exact(
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            amount_in,
            fee,
        )
    }

    fn swap_amount_out_approx(
        &self,
        balance_in: P,
        weight_in: P,
        balance_out: P,
        weight_out: P,
        amount_in: P,
        fee: P,
    ) -> Result<P, MathError> {
        pricing::swap_amount_out_approx(
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            amount_in,
            fee,
        )
    }

    fn spot_price_from_invariant_exact(
        &self,
        balance_in: P,
        weight_in: P,
        balance_out: P,
        weight_out: P,
        target_price: P,
        fee: P,
    ) -> Result<P, MathError> {
        pricing::spot_price_from_invariant_exact(
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            target_price,
            fee,
        )
    }

    fn spot_price_from_invariant_approx(
        &self,
        balance_in: P,
        weight_in: P,
        balance_out: P,
        weight_out: P,
        target_price: P,
        fee: P,
    ) -> Result<P, MathError> {
        pricing::spot_price_from_invariant_approx(
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            target_price,
            fee,
        )
    }
}
