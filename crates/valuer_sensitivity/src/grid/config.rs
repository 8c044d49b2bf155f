//! Grid specification: assumption ranges, step sizes, and error policy.

use serde::{Deserialize, Serialize};

use super::steps::{step_values, ADR_STEP_EPSILON, FRACTION_STEP_EPSILON};
use crate::error::GridError;

/// The three swept assumption dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridDimension {
    /// Average daily rate (dollars).
    Adr,
    /// Occupancy rate (percent bounds, fractional steps).
    Occupancy,
    /// Capitalization rate (percent bounds, fractional steps).
    CapRate,
}

impl std::fmt::Display for GridDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GridDimension::Adr => "ADR",
            GridDimension::Occupancy => "occupancy",
            GridDimension::CapRate => "cap rate",
        };
        write!(f, "{}", name)
    }
}

/// Closed interval of assumption values.
///
/// ADR bounds are in dollars; occupancy and cap-rate bounds are in percent
/// (55 means 55%) and are converted to fractions during enumeration. The
/// upper bound is inclusive via a small epsilon tolerance that counters
/// floating-point step accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssumptionRange {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive (within the step epsilon).
    pub max: f64,
}

impl AssumptionRange {
    /// Creates a range from its bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, dimension: GridDimension) -> Result<(), GridError> {
        for bound in [self.min, self.max] {
            if !bound.is_finite() {
                return Err(GridError::NonFiniteBound {
                    dimension,
                    value: bound,
                });
            }
        }
        if self.max < self.min {
            return Err(GridError::InvalidRange {
                dimension,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Step sizes for the three dimensions.
///
/// Defaults are the literal dashboard constants: ADR advances 25 dollars
/// per step, occupancy 0.05 (five points) per step, cap rate 0.01 (one
/// point) per step. Fully configurable rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSteps {
    /// ADR step in dollars.
    pub adr: f64,
    /// Occupancy step as a fraction (0.05 = five percentage points).
    pub occupancy: f64,
    /// Cap-rate step as a fraction (0.01 = one percentage point).
    pub cap_rate: f64,
}

impl Default for GridSteps {
    fn default() -> Self {
        Self {
            adr: 25.0,
            occupancy: 0.05,
            cap_rate: 0.01,
        }
    }
}

impl GridSteps {
    fn validate(&self) -> Result<(), GridError> {
        for (dimension, step) in [
            (GridDimension::Adr, self.adr),
            (GridDimension::Occupancy, self.occupancy),
            (GridDimension::CapRate, self.cap_rate),
        ] {
            if !step.is_finite() || step <= 0.0 {
                return Err(GridError::InvalidStep { dimension, step });
            }
        }
        Ok(())
    }
}

/// Policy for per-row valuation failures (a zero cap rate landing inside a
/// stepped range).
///
/// `Halt` reproduces the legacy behavior: the first failing row aborts the
/// whole generation. `Skip` is the hardened default: the offending row is
/// dropped and generation continues, which changes the output row count —
/// a deliberate, documented deviation from the legacy behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort generation on the first failing row (legacy-compatible).
    Halt,
    /// Drop failing rows and continue (recommended).
    #[default]
    Skip,
}

/// Full grid specification.
///
/// The default configuration reproduces the dashboard's initial sliders:
/// ADR 70–95, occupancy 55–85%, cap rate 7–11%, default steps and the
/// skip-on-error policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// ADR range in dollars.
    pub adr_range: AssumptionRange,
    /// Occupancy range in percent.
    pub occupancy_range: AssumptionRange,
    /// Cap-rate range in percent.
    pub cap_rate_range: AssumptionRange,
    /// Step sizes.
    pub steps: GridSteps,
    /// Per-row failure policy.
    pub error_policy: ErrorPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(
            AssumptionRange::new(70.0, 95.0),
            AssumptionRange::new(55.0, 85.0),
            AssumptionRange::new(7.0, 11.0),
        )
    }
}

impl GridConfig {
    /// Creates a configuration with default steps and error policy.
    pub fn new(
        adr_range: AssumptionRange,
        occupancy_range: AssumptionRange,
        cap_rate_range: AssumptionRange,
    ) -> Self {
        Self {
            adr_range,
            occupancy_range,
            cap_rate_range,
            steps: GridSteps::default(),
            error_policy: ErrorPolicy::default(),
        }
    }

    /// Replaces the step sizes.
    pub fn with_steps(mut self, steps: GridSteps) -> Self {
        self.steps = steps;
        self
    }

    /// Replaces the per-row failure policy.
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Validates ranges and steps upfront, before any row is computed.
    ///
    /// # Errors
    /// - `GridError::NonFiniteBound` for NaN/infinite bounds
    /// - `GridError::InvalidRange` if any max < min
    /// - `GridError::InvalidStep` if any step is non-positive or non-finite
    pub fn validate(&self) -> Result<(), GridError> {
        self.adr_range.validate(GridDimension::Adr)?;
        self.occupancy_range.validate(GridDimension::Occupancy)?;
        self.cap_rate_range.validate(GridDimension::CapRate)?;
        self.steps.validate()
    }

    /// ADR grid values in dollars.
    pub(crate) fn adr_values(&self) -> Vec<f64> {
        step_values(
            self.adr_range.min,
            self.adr_range.max,
            self.steps.adr,
            ADR_STEP_EPSILON,
        )
    }

    /// Occupancy grid values as fractions.
    pub(crate) fn occupancy_values(&self) -> Vec<f64> {
        step_values(
            self.occupancy_range.min / 100.0,
            self.occupancy_range.max / 100.0,
            self.steps.occupancy,
            FRACTION_STEP_EPSILON,
        )
    }

    /// Cap-rate grid values as fractions.
    pub(crate) fn cap_rate_values(&self) -> Vec<f64> {
        step_values(
            self.cap_rate_range.min / 100.0,
            self.cap_rate_range.max / 100.0,
            self.steps.cap_rate,
            FRACTION_STEP_EPSILON,
        )
    }
}
