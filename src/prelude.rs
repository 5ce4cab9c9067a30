//! Convenience re-exports for common types and traits.
//!
//! The glob import leaves `std`'s two-parameter `Result` in scope; the
//! crate's alias lives at [`crate::error::Result`].
//!
//! ```rust
//! use weighted_math::prelude::*;
//!
//! fn parse_fee(text: &str) -> Result<f64, std::num::ParseFloatError> {
//!     text.parse()
//! }
//!
//! assert_eq!(parse_fee("0.003"), Ok(0.003));
//! let err: MathError = MathError::DivisionByZero;
//! assert!(!err.is_domain());
//! ```

pub use crate::config::{SeriesConfig, MAX_APPROX_BASE, MAX_POW_TERMS, POW_PRECISION};
pub use crate::domain::{Amount, Balance, Fee, Rounding, SwapInput, Weight};
pub use crate::error::MathError;
pub use crate::math::{pow_approx, power, Precision};
pub use crate::pricing::{
    spot_price, spot_price_from_invariant_approx, spot_price_from_invariant_exact,
    swap_amount_out_approx, swap_amount_out_exact,
};
pub use crate::traits::PricingEngine;

#[cfg(feature = "fixed-point")]
pub use crate::engines::{FixedPointEngine, WadEngine};
#[cfg(feature = "float")]
pub use crate::engines::FloatEngine;
#[cfg(feature = "fixed-point")]
pub use crate::math::FixedPointArithmetic;
#[cfg(feature = "float")]
pub use crate::math::FloatArithmetic;
