//! # valuer_core: Valuation Foundation for hotelval
//!
//! ## Foundation Layer Role
//!
//! valuer_core is the bottom layer of the hotelval workspace, providing:
//! - Immutable input and result types (`types::inputs`)
//! - Structured error types: `ValuationError` (`types::error`)
//! - Display rounding at two decimal places (`math::rounding`)
//! - The valuation operations themselves (`engine`)
//!
//! ## Purity Principle
//!
//! Every operation in this crate is a referentially transparent computation
//! over in-memory scalars: no I/O, no logging, no hidden state. Identical
//! inputs produce bit-identical outputs, so callers may recompute freely
//! instead of caching.
//!
//! ## Usage Examples
//!
//! ```rust
//! use valuer_core::engine::{income_approach, adr_multiplier_approach};
//!
//! // Direct capitalization: NOI / cap rate
//! let value = income_approach(230_000.0, 0.085).unwrap();
//! assert_eq!(value, 2_705_882.35);
//!
//! // Rule-of-thumb value: ADR x rooms x multiplier
//! let value = adr_multiplier_approach(175.0, 18, 7.6);
//! assert_eq!(value, 23_940.00);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod math;
pub mod types;

pub use engine::compute_valuation;
pub use types::{PropertyProfile, ValuationError, ValuationInputs, ValuationResult};
