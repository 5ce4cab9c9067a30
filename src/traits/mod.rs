//! Core trait abstractions.
//!
//! [`PricingEngine`] is the single interface every numeric representation
//! implements; see [`engines`](crate::engines) for the implementations.

mod pricing_engine;

pub use pricing_engine::PricingEngine;
