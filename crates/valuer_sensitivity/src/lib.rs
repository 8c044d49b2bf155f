//! # valuer_sensitivity: Sensitivity Grid Generation
//!
//! Materializes the Cartesian product of stepped ranges over three
//! assumptions (ADR, occupancy, cap rate) into an ordered table of
//! valuation rows, recomputing revenue and NOI per cell from that cell's
//! own assumptions.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           valuer_sensitivity                │
//! ├─────────────────────────────────────────────┤
//! │  grid/    - ranges, steps, row, generator   │
//! │  export/  - CSV serialization               │
//! │  cancel   - cooperative cancellation token  │
//! │  error    - GridError                       │
//! └─────────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────────┐
//! │              valuer_core                    │
//! │  valuation formulas, rounding, input types  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Contract
//!
//! Rows are enumerated with ADR as the outermost loop, occupancy in the
//! middle, and cap rate innermost. This total order is observable: table
//! consumers may slice or page against it, and both the lazy iterator and
//! the Rayon-parallel path produce it exactly.
//!
//! ## Example
//!
//! ```
//! use valuer_core::types::ValuationInputs;
//! use valuer_sensitivity::grid::{generate, GridConfig};
//!
//! let inputs = ValuationInputs {
//!     noi: 230_000.0,
//!     cap_rate: 0.085,
//!     adr: 175.0,
//!     room_count: 18,
//!     adr_multiplier: 7.6,
//!     equity_invested: 10_000.0,
//!     opex: 480_000.0,
//! };
//! // Literal dashboard defaults: ADR 70-95 step 25, occupancy 55-85%
//! // step 5 points, cap rate 7-11% step 1 point.
//! let rows = generate(&inputs, &GridConfig::default()).unwrap();
//! assert_eq!(rows.len(), 2 * 7 * 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod cancel;
pub mod error;
pub mod export;
pub mod grid;

pub use cancel::CancelToken;
pub use error::GridError;
pub use grid::{
    generate, generate_parallel, AssumptionRange, ErrorPolicy, GridConfig, GridIter, GridSteps,
    SensitivityRow,
};
