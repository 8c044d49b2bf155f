//! Error types for valuation operations.
//!
//! This module provides:
//! - `ValuationError`: Errors from valuation computations and input validation

use thiserror::Error;

/// Valuation computation errors.
///
/// Provides structured error handling for the valuation operations with
/// the offending value attached to each failure mode. Operations fail fast
/// and surface the error to the immediate caller; there is no silent
/// zero-fill and no retry, since the computations are deterministic.
///
/// # Variants
/// - `DivisionByZero`: A divisor (cap rate, property value, equity) is zero
/// - `NonFiniteInput`: A numeric input field is NaN or infinite
/// - `InvalidRoomCount`: Room count below one
///
/// # Examples
/// ```
/// use valuer_core::types::ValuationError;
///
/// let err = ValuationError::DivisionByZero { quantity: "cap rate" };
/// assert_eq!(format!("{}", err), "Division by zero: cap rate must be non-zero");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValuationError {
    /// A divisor was exactly zero.
    #[error("Division by zero: {quantity} must be non-zero")]
    DivisionByZero {
        /// Name of the zero-valued divisor.
        quantity: &'static str,
    },

    /// A numeric input field was NaN or infinite.
    #[error("Invalid input: {field} = {value} is not finite")]
    NonFiniteInput {
        /// Name of the offending field.
        field: &'static str,
        /// The non-finite value.
        value: f64,
    },

    /// Room count below the minimum of one.
    #[error("Invalid input: room count must be at least 1, got {room_count}")]
    InvalidRoomCount {
        /// The invalid room count.
        room_count: u32,
    },
}
