//! Core types for valuation computations.
//!
//! This module provides:
//! - `ValuationInputs`: Immutable scalar inputs for one computation request
//! - `ValuationResult`: Derived valuation and return metrics
//! - `PropertyProfile`: Display-only property metadata
//! - `ValuationError`: Structured computation errors

pub mod error;
pub mod inputs;

pub use error::ValuationError;
pub use inputs::{PropertyProfile, ValuationInputs, ValuationResult};
