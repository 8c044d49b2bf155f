//! Sensitivity grid construction.
//!
//! This module provides:
//! - `AssumptionRange`, `GridSteps`, `ErrorPolicy`, `GridConfig`: grid
//!   specification (`config`)
//! - `SensitivityRow`: one grid cell (`row`)
//! - `GridIter`, `generate`, `generate_parallel`: enumeration surfaces
//!   (`generator`)

pub mod config;
pub mod generator;
pub mod row;

mod steps;

pub use config::{AssumptionRange, ErrorPolicy, GridConfig, GridDimension, GridSteps};
pub use generator::{
    generate, generate_parallel, generate_parallel_with_cancel, generate_with_cancel, GridIter,
};
pub use row::SensitivityRow;
