//! Error types for grid generation.
//!
//! This module provides:
//! - `GridError`: Errors from range validation, per-cell valuation, and
//!   cancellation

use thiserror::Error;
use valuer_core::types::ValuationError;

use crate::grid::GridDimension;

/// Grid generation errors.
///
/// Range and step problems are reported upfront, before any row is
/// computed. Per-cell valuation failures (a zero cap rate landing inside a
/// stepped range) surface here only under the halt-on-first-error policy;
/// the skip policy drops the offending row instead.
///
/// # Examples
/// ```
/// use valuer_sensitivity::error::GridError;
/// use valuer_sensitivity::grid::GridDimension;
///
/// let err = GridError::InvalidRange {
///     dimension: GridDimension::Adr,
///     min: 95.0,
///     max: 70.0,
/// };
/// assert!(format!("{}", err).contains("ADR"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// Range upper bound below its lower bound.
    #[error("Invalid {dimension} range: max {max} is less than min {min}")]
    InvalidRange {
        /// The dimension with the invalid range.
        dimension: GridDimension,
        /// Lower bound supplied by the caller.
        min: f64,
        /// Upper bound supplied by the caller.
        max: f64,
    },

    /// Step size zero, negative, or non-finite.
    #[error("Invalid {dimension} step: {step} (must be positive and finite)")]
    InvalidStep {
        /// The dimension with the invalid step.
        dimension: GridDimension,
        /// The invalid step size.
        step: f64,
    },

    /// Range bound is NaN or infinite.
    #[error("Invalid {dimension} bound: {value} is not finite")]
    NonFiniteBound {
        /// The dimension with the non-finite bound.
        dimension: GridDimension,
        /// The non-finite bound value.
        value: f64,
    },

    /// A per-cell valuation failed (halt policy) or the fixed inputs were
    /// structurally invalid.
    #[error("Valuation failed for grid cell: {0}")]
    Valuation(#[from] ValuationError),

    /// Generation was cancelled between outer-loop iterations.
    #[error("Grid generation cancelled")]
    Cancelled,
}
