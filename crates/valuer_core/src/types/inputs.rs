//! Input and result types for a single valuation request.
//!
//! The original dashboard drove the valuation formulas from mutable
//! module-level widget state. Here the inputs are an explicit immutable
//! struct constructed once per computation request, so there is no hidden
//! coupling between presentation state and the math.

use serde::{Deserialize, Serialize};

use super::error::ValuationError;

/// Display-only property metadata.
///
/// Carried through configuration and report headers; never enters the
/// valuation math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyProfile {
    /// Hotel name.
    pub name: String,
    /// Location, free-form (e.g. "Asheville, NC").
    pub location: String,
}

impl Default for PropertyProfile {
    fn default() -> Self {
        Self {
            name: "Maple Grove Inn".to_string(),
            location: "Asheville, NC".to_string(),
        }
    }
}

/// Immutable scalar inputs for one valuation request.
///
/// All fields are plain scalars; the struct is cheap to clone and is never
/// mutated after construction. `validate` checks structural validity
/// (finite numbers, room count of at least one). Division-by-zero is
/// reported by the operation that divides, not here, since a zero cap rate
/// or equity is only an error when actually used as a divisor.
///
/// Negative values for economically non-negative fields (ADR, multiplier)
/// are not rejected: the formulas are defined for them and the original
/// behavior passes them through.
///
/// # Examples
/// ```
/// use valuer_core::types::ValuationInputs;
///
/// let inputs = ValuationInputs {
///     noi: 230_000.0,
///     cap_rate: 0.085,
///     adr: 175.0,
///     room_count: 18,
///     adr_multiplier: 7.6,
///     equity_invested: 10_000.0,
///     opex: 480_000.0,
/// };
/// assert!(inputs.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInputs {
    /// Net operating income. May be negative; no enforced bound.
    pub noi: f64,
    /// Capitalization rate as a fraction, conceptually in (0, 1].
    pub cap_rate: f64,
    /// Average daily rate.
    pub adr: f64,
    /// Number of rooms, at least 1.
    pub room_count: u32,
    /// Empirical ADR multiplier constant.
    pub adr_multiplier: f64,
    /// Equity invested; must be non-zero when used as a divisor.
    pub equity_invested: f64,
    /// Annual operating expenses; used only in grid revenue recomputation.
    pub opex: f64,
}

impl ValuationInputs {
    /// Validates structural invariants of the inputs.
    ///
    /// # Errors
    /// - `ValuationError::InvalidRoomCount` if `room_count < 1`
    /// - `ValuationError::NonFiniteInput` if any float field is NaN or infinite
    pub fn validate(&self) -> Result<(), ValuationError> {
        if self.room_count < 1 {
            return Err(ValuationError::InvalidRoomCount {
                room_count: self.room_count,
            });
        }
        for (field, value) in [
            ("noi", self.noi),
            ("cap_rate", self.cap_rate),
            ("adr", self.adr),
            ("adr_multiplier", self.adr_multiplier),
            ("equity_invested", self.equity_invested),
            ("opex", self.opex),
        ] {
            if !value.is_finite() {
                return Err(ValuationError::NonFiniteInput { field, value });
            }
        }
        Ok(())
    }
}

/// Derived valuation and return metrics for a single request.
///
/// Purely derived data with no independent lifecycle: recomputed on every
/// input change, never cached or invalidated. All values are rounded to
/// two decimal places (see [`crate::math::rounding::round2`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Property value under the income (direct capitalization) approach.
    pub income_value: f64,
    /// Property value under the ADR multiplier approach.
    pub adr_value: f64,
    /// NOI over the income-approach value.
    pub cash_on_cash_income: f64,
    /// NOI over the ADR-approach value.
    pub cash_on_cash_adr: f64,
    /// NOI over equity invested.
    pub cash_on_cash_return: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_inputs() -> ValuationInputs {
        ValuationInputs {
            noi: 230_000.0,
            cap_rate: 0.085,
            adr: 175.0,
            room_count: 18,
            adr_multiplier: 7.6,
            equity_invested: 10_000.0,
            opex: 480_000.0,
        }
    }

    #[test]
    fn test_validate_accepts_base_case() {
        assert!(base_inputs().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_rooms() {
        let mut inputs = base_inputs();
        inputs.room_count = 0;
        assert_eq!(
            inputs.validate(),
            Err(ValuationError::InvalidRoomCount { room_count: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_nan_noi() {
        let mut inputs = base_inputs();
        inputs.noi = f64::NAN;
        match inputs.validate() {
            Err(ValuationError::NonFiniteInput { field, .. }) => assert_eq!(field, "noi"),
            other => panic!("Expected NonFiniteInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_infinite_opex() {
        let mut inputs = base_inputs();
        inputs.opex = f64::INFINITY;
        match inputs.validate() {
            Err(ValuationError::NonFiniteInput { field, value }) => {
                assert_eq!(field, "opex");
                assert!(value.is_infinite());
            }
            other => panic!("Expected NonFiniteInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_allows_zero_cap_rate() {
        // Zero cap rate is only an error when used as a divisor.
        let mut inputs = base_inputs();
        inputs.cap_rate = 0.0;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_negative_noi() {
        let mut inputs = base_inputs();
        inputs.noi = -50_000.0;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_result_serialization_field_names() {
        let result = ValuationResult {
            income_value: 1.0,
            adr_value: 2.0,
            cash_on_cash_income: 3.0,
            cash_on_cash_adr: 4.0,
            cash_on_cash_return: 5.0,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"incomeValue\""));
        assert!(json.contains("\"cashOnCashReturn\""));
    }

    #[test]
    fn test_property_profile_default() {
        let profile = PropertyProfile::default();
        assert_eq!(profile.name, "Maple Grove Inn");
        assert_eq!(profile.location, "Asheville, NC");
    }
}
