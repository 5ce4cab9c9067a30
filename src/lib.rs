//! # Weighted Math
//!
//! Pricing for constant-weighted (Balancer-style) AMM pools, with a
//! bounded-error fractional power built from multiplication and division
//! only.
//!
//! Every formula is written once, generically over a numeric backend, and
//! runs on two representations that must agree within documented
//! tolerances:
//!
//! - **Float**: `f64`, exact power via `powf`; the reference oracle.
//! - **Fixed point**: `u128` scaled by 10^18 ("wad"), 256-bit
//!   intermediates, floor rounding, no floating point anywhere on the
//!   approximate path.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `float` | yes | `f64` backend and `FloatEngine` |
//! | `fixed-point` | yes | wad backend, `FixedPointEngine`, raw `u128` entry points |
//!
//! # Quick Start
//!
//! ```rust
//! use weighted_math::prelude::*;
//!
//! // 20 units in, weights 0.8 / 0.2, 0.3 % fee
//! let engine = FloatEngine::new();
//! let [bi, wi, bo, wo, ai, fee] = [100.0, 0.8, 400.0, 0.2, 20.0, 0.003].map(|v| engine.encode(v));
//!
//! let Ok(exact) = engine.swap_amount_out_exact(bi, wi, bo, wo, ai, fee) else {
//!     panic!("valid swap");
//! };
//! let Ok(approx) = engine.swap_amount_out_approx(bi, wi, bo, wo, ai, fee) else {
//!     panic!("valid swap");
//! };
//! assert!((exact.get() - approx.get()).abs() < 1e-6);
//!
//! // the same swap on integer-only wad values
//! let wad = WadEngine;
//! let args = [100.0, 0.8, 400.0, 0.2, 20.0, 0.003].map(|v| wad.encode(v));
//! let Ok(out) = wad.swap_amount_out_approx(args[0], args[1], args[2], args[3], args[4], args[5])
//! else {
//!     panic!("valid swap");
//! };
//! assert!((wad.decode(out) - exact.get()).abs() < 1e-6);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  f64, Precision values, or raw u128 wads
//! └──────┬───────┘
//!        │ PricingEngine
//!        ▼
//! ┌──────────────┐
//! │   Engines     │  FloatEngine, FixedPointEngine, WadEngine
//! └──────┬───────┘
//!        │ generic over P: Precision
//!        ▼
//! ┌──────────────┐
//! │   Pricing     │  validates into domain types, evaluates formulas
//! └──────┬───────┘
//!        │ checked_pow / pow_approx
//!        ▼
//! ┌──────────────┐
//! │    Math       │  pow series, Precision backends, 256-bit mul_div
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Balance`](domain::Balance), [`Weight`](domain::Weight), [`Fee`](domain::Fee), [`SwapInput`](domain::SwapInput) |
//! | [`pricing`] | Generic pricing formulas |
//! | [`traits`] | [`PricingEngine`](traits::PricingEngine) |
//! | [`engines`] | Engine implementations and raw wad entry points |
//! | [`math`] | [`Precision`](math::Precision) backends, power series, `mul_div` |
//! | [`config`] | [`SeriesConfig`](config::SeriesConfig) and the series constants |
//! | [`error`] | [`MathError`](error::MathError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` for rejected inputs, `trace`
//! for series termination) and never installs a subscriber.

pub mod config;
pub mod domain;
pub mod engines;
pub mod error;
pub mod math;
pub mod pricing;
pub mod prelude;
pub mod traits;
