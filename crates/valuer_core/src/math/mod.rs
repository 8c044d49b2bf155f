//! Numeric helpers shared by the valuation operations.

pub mod rounding;

pub use rounding::round2;
