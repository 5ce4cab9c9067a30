//! Tunable parameters for the numeric algorithms.
//!
//! This module contains [`SeriesConfig`], the declarative blueprint for the
//! binomial power series, together with the named constants that make up
//! its default profile.

mod series;

pub use series::{SeriesConfig, MAX_APPROX_BASE, MAX_POW_TERMS, POW_PRECISION};
