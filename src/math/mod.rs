//! Arithmetic and precision utilities for weighted-pool calculations.
//!
//! This module provides the [`Precision`] trait for feature-gated numeric
//! backends, the multiplication/division-only power functions built on it,
//! and the 256-bit [`mul_div`] primitive behind the fixed-point backend.
//!
//! # Feature-gated backends
//!
//! | Feature | Type | Use case |
//! |---------|------|----------|
//! | `float` | `FloatArithmetic` | Reference oracle, off-chain simulation |
//! | `fixed-point` | `FixedPointArithmetic` | Integer-only, deterministic callers |

mod pow;
mod precision;

#[cfg(feature = "fixed-point")]
mod fixed_precision;
#[cfg(feature = "float")]
mod float_precision;
#[cfg(feature = "fixed-point")]
mod mul_div;

pub use pow::{pow_approx, pow_approx_with, pow_int, power, power_with};
pub use precision::Precision;

#[cfg(feature = "fixed-point")]
pub use fixed_precision::{FixedPointArithmetic, SCALE};
#[cfg(feature = "float")]
pub use float_precision::FloatArithmetic;
#[cfg(feature = "fixed-point")]
pub use mul_div::mul_div;
