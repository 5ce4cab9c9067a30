//! Configuration for the binomial power series used by `pow_approx`.

use crate::error::MathError;

/// Maximum number of series terms evaluated by `pow_approx`.
///
/// This cap is the binding error control.  Error is non-increasing in the
/// cap; with the default profile the worst absolute error measured over
/// `base ∈ [0.05, 1.95]`, `exponent ∈ (0.1, 10]` is ≈ 4.7 × 10⁻⁸ (at
/// `base = 1.95`, `exponent ≈ 8.15`, where `base^floor(exponent)` amplifies
/// the series remainder).  Smaller caps degrade quickly near the edges of
/// the interval:
///
/// | Cap | Worst absolute error |
/// |-----|----------------------|
/// | 64  | ≈ 4.2 × 10⁻³ |
/// | 128 | ≈ 7.2 × 10⁻⁵ |
/// | 256 | ≈ 4.7 × 10⁻⁸ |
pub const MAX_POW_TERMS: u32 = 256;

/// Largest base for which the [`MAX_POW_TERMS`] error bound is measured.
///
/// The series still converges up to 2, but the remainder at the cap grows
/// quickly past this point (≈ 8 × 10⁻³ on a pool-sized result at 1.99).
/// Callers that feed `pow_approx` a caller-controlled ratio reject bases
/// above it.
pub const MAX_APPROX_BASE: f64 = 1.95;

/// Term magnitude below which the series stops early.
///
/// Equals 10^8 raw units at the fixed-point scale of 10^18.
pub const POW_PRECISION: f64 = 1e-10;

/// Term cap of the full-precision profile.
const FULL_PRECISION_TERMS: u32 = 2_048;

/// One raw unit at the fixed-point scale.
const FULL_PRECISION_THRESHOLD: f64 = 1e-18;

/// Parameters of the binomial series `(1 + x)^r = Σ C(r, k) xᵏ`.
///
/// # Validation
///
/// - `max_terms` must be at least 1.
/// - `precision` must be finite and strictly positive.
///
/// # Examples
///
/// ```
/// use weighted_math::config::{SeriesConfig, MAX_POW_TERMS};
///
/// let cfg = SeriesConfig::default();
/// assert_eq!(cfg.max_terms(), MAX_POW_TERMS);
///
/// let Ok(coarse) = SeriesConfig::new(8, 1e-6) else {
///     panic!("valid config");
/// };
/// assert_eq!(coarse.max_terms(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    max_terms: u32,
    precision: f64,
}

impl SeriesConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `max_terms` is zero or `precision`
    /// is not a finite positive number.
    pub fn new(max_terms: u32, precision: f64) -> Result<Self, MathError> {
        let config = Self {
            max_terms,
            precision,
        };
        config.validate()?;
        Ok(config)
    }

    /// Profile used where the fixed-point backend stands in for an exact
    /// power: runs until a term drops below one raw unit.
    #[must_use]
    pub const fn full_precision() -> Self {
        Self {
            max_terms: FULL_PRECISION_TERMS,
            precision: FULL_PRECISION_THRESHOLD,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::Domain`] if `max_terms` is zero or `precision`
    /// is not a finite positive number.
    pub fn validate(&self) -> Result<(), MathError> {
        if self.max_terms == 0 {
            return Err(MathError::Domain("series term cap must be at least 1"));
        }
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(MathError::Domain(
                "series precision must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Returns the term cap.
    #[must_use]
    pub const fn max_terms(&self) -> u32 {
        self.max_terms
    }

    /// Returns the early-exit threshold.
    #[must_use]
    pub const fn precision(&self) -> f64 {
        self.precision
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            max_terms: MAX_POW_TERMS,
            precision: POW_PRECISION,
        }
    }
}
