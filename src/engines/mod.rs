//! [`PricingEngine`](crate::traits::PricingEngine) implementations.
//!
//! | Engine | Value | Backend |
//! |--------|-------|---------|
//! | [`FloatEngine`] | [`FloatArithmetic`](crate::math::FloatArithmetic) | `f64`, the reference oracle |
//! | [`FixedPointEngine`] | [`FixedPointArithmetic`](crate::math::FixedPointArithmetic) | wad through the generic formulas |
//! | [`WadEngine`] | `u128` | raw wad entry points in [`wad`] |
//!
//! The first two are the same generic [`PrecisionEngine`] instantiated over
//! different backends.

mod precision_engine;

#[cfg(feature = "fixed-point")]
pub mod wad;

pub use precision_engine::{BackendName, PrecisionEngine};

#[cfg(feature = "fixed-point")]
pub use precision_engine::FixedPointEngine;
#[cfg(feature = "float")]
pub use precision_engine::FloatEngine;
#[cfg(feature = "fixed-point")]
pub use wad::WadEngine;
