//! Hotel valuation operations.
//!
//! Two independent valuation methods plus simple return ratios:
//!
//! **Income approach** (direct capitalization): V = NOI / cap rate
//! **ADR multiplier approach**: V = ADR × rooms × multiplier
//!
//! All operations are pure functions over scalars; every output is rounded
//! to two decimal places with round-half-even (see
//! [`crate::math::rounding::round2`]). Divisions fail fast with
//! [`ValuationError::DivisionByZero`] rather than producing infinities.

use crate::math::rounding::round2;
use crate::types::{ValuationError, ValuationInputs, ValuationResult};

/// Values a property by direct capitalization: `noi / cap_rate`.
///
/// A negative cap rate is mathematically defined but economically
/// nonsensical; it is passed through rather than rejected, matching the
/// original behavior.
///
/// # Errors
/// - `ValuationError::DivisionByZero` if `cap_rate == 0.0`
///
/// # Examples
/// ```
/// use valuer_core::engine::income_approach;
///
/// assert_eq!(income_approach(230_000.0, 0.085).unwrap(), 2_705_882.35);
/// assert!(income_approach(230_000.0, 0.0).is_err());
/// ```
pub fn income_approach(noi: f64, cap_rate: f64) -> Result<f64, ValuationError> {
    if cap_rate == 0.0 {
        return Err(ValuationError::DivisionByZero {
            quantity: "cap rate",
        });
    }
    Ok(round2(noi / cap_rate))
}

/// Values a property by the rule-of-thumb multiplier:
/// `adr * room_count * multiplier`.
///
/// Infallible: pure multiplication, and `room_count` widens to `f64`
/// losslessly. Linear in each argument (up to the final rounding).
///
/// # Examples
/// ```
/// use valuer_core::engine::adr_multiplier_approach;
///
/// assert_eq!(adr_multiplier_approach(175.0, 18, 7.6), 23_940.00);
/// ```
pub fn adr_multiplier_approach(adr: f64, room_count: u32, multiplier: f64) -> f64 {
    round2(adr * f64::from(room_count) * multiplier)
}

/// Computes `noi / value`, the yield of NOI on a property value.
///
/// Despite the name, this is NOI-over-value (a rate of return on value),
/// not a true cash-on-cash return: the original implementation accepted an
/// equity-percentage argument here and ignored it, dividing by the value
/// instead. The literal behavior is preserved; for the NOI-over-equity
/// ratio use [`cash_on_cash_return`].
///
/// # Errors
/// - `ValuationError::DivisionByZero` if `value == 0.0`
pub fn cash_on_cash_ratio(noi: f64, value: f64) -> Result<f64, ValuationError> {
    if value == 0.0 {
        return Err(ValuationError::DivisionByZero {
            quantity: "property value",
        });
    }
    Ok(round2(noi / value))
}

/// Computes the cash-on-cash return: `noi / equity_invested`.
///
/// # Errors
/// - `ValuationError::DivisionByZero` if `equity_invested == 0.0`
///
/// # Examples
/// ```
/// use valuer_core::engine::cash_on_cash_return;
/// use valuer_core::types::ValuationError;
///
/// assert_eq!(cash_on_cash_return(230_000.0, 10_000.0).unwrap(), 23.0);
/// assert_eq!(
///     cash_on_cash_return(230_000.0, 0.0),
///     Err(ValuationError::DivisionByZero { quantity: "equity invested" })
/// );
/// ```
pub fn cash_on_cash_return(noi: f64, equity_invested: f64) -> Result<f64, ValuationError> {
    if equity_invested == 0.0 {
        return Err(ValuationError::DivisionByZero {
            quantity: "equity invested",
        });
    }
    Ok(round2(noi / equity_invested))
}

/// Computes the full set of single-point valuation metrics.
///
/// Validates the inputs, then derives both property values and the three
/// return ratios the dashboard displays: NOI yield on the income value,
/// NOI yield on the ADR value, and NOI over equity invested.
///
/// Referentially transparent: identical inputs yield bit-identical results.
///
/// # Errors
/// - `ValuationError::InvalidRoomCount` / `NonFiniteInput` from validation
/// - `ValuationError::DivisionByZero` if the cap rate, either derived
///   value, or the equity invested is zero; no partial result is returned
pub fn compute_valuation(inputs: &ValuationInputs) -> Result<ValuationResult, ValuationError> {
    inputs.validate()?;

    let income_value = income_approach(inputs.noi, inputs.cap_rate)?;
    let adr_value = adr_multiplier_approach(inputs.adr, inputs.room_count, inputs.adr_multiplier);

    Ok(ValuationResult {
        income_value,
        adr_value,
        cash_on_cash_income: cash_on_cash_ratio(inputs.noi, income_value)?,
        cash_on_cash_adr: cash_on_cash_ratio(inputs.noi, adr_value)?,
        cash_on_cash_return: cash_on_cash_return(inputs.noi, inputs.equity_invested)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

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

    // ==========================================================
    // income_approach
    // ==========================================================

    #[test]
    fn test_income_approach_base_case() {
        assert_eq!(income_approach(230_000.0, 0.085).unwrap(), 2_705_882.35);
    }

    #[test]
    fn test_income_approach_zero_cap_rate() {
        assert_eq!(
            income_approach(230_000.0, 0.0),
            Err(ValuationError::DivisionByZero {
                quantity: "cap rate"
            })
        );
    }

    #[test]
    fn test_income_approach_negative_noi_passes_through() {
        assert_eq!(income_approach(-85_000.0, 0.085).unwrap(), -1_000_000.0);
    }

    #[test]
    fn test_income_approach_negative_cap_rate_passes_through() {
        // Economically nonsensical but mathematically defined.
        assert_eq!(income_approach(100_000.0, -0.05).unwrap(), -2_000_000.0);
    }

    // ==========================================================
    // adr_multiplier_approach
    // ==========================================================

    #[test]
    fn test_adr_multiplier_base_case() {
        assert_eq!(adr_multiplier_approach(175.0, 18, 7.6), 23_940.00);
    }

    #[test]
    fn test_adr_multiplier_zero_adr() {
        assert_eq!(adr_multiplier_approach(0.0, 18, 7.6), 0.0);
    }

    #[test]
    fn test_adr_multiplier_single_room() {
        assert_eq!(adr_multiplier_approach(175.0, 1, 7.6), 1_330.0);
    }

    // ==========================================================
    // cash_on_cash_ratio / cash_on_cash_return
    // ==========================================================

    #[test]
    fn test_cash_on_cash_ratio_is_noi_over_value() {
        // Literal behavior of the original: NOI / value, equity ignored.
        assert_eq!(cash_on_cash_ratio(230_000.0, 2_705_882.35).unwrap(), 0.09);
    }

    #[test]
    fn test_cash_on_cash_ratio_zero_value() {
        assert_eq!(
            cash_on_cash_ratio(230_000.0, 0.0),
            Err(ValuationError::DivisionByZero {
                quantity: "property value"
            })
        );
    }

    #[test]
    fn test_cash_on_cash_return_base_case() {
        assert_eq!(cash_on_cash_return(230_000.0, 10_000.0).unwrap(), 23.0);
    }

    #[test]
    fn test_cash_on_cash_return_zero_equity() {
        assert_eq!(
            cash_on_cash_return(230_000.0, 0.0),
            Err(ValuationError::DivisionByZero {
                quantity: "equity invested"
            })
        );
    }

    // ==========================================================
    // compute_valuation
    // ==========================================================

    #[test]
    fn test_compute_valuation_base_case() {
        let result = compute_valuation(&base_inputs()).unwrap();
        assert_eq!(result.income_value, 2_705_882.35);
        assert_eq!(result.adr_value, 23_940.00);
        assert_eq!(result.cash_on_cash_income, 0.09);
        assert_relative_eq!(result.cash_on_cash_adr, 9.61, max_relative = 1e-12);
        assert_eq!(result.cash_on_cash_return, 23.0);
    }

    #[test]
    fn test_compute_valuation_idempotent() {
        let inputs = base_inputs();
        let first = compute_valuation(&inputs).unwrap();
        let second = compute_valuation(&inputs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_valuation_zero_equity_no_partial_result() {
        let mut inputs = base_inputs();
        inputs.equity_invested = 0.0;
        assert_eq!(
            compute_valuation(&inputs),
            Err(ValuationError::DivisionByZero {
                quantity: "equity invested"
            })
        );
    }

    #[test]
    fn test_compute_valuation_rejects_invalid_inputs() {
        let mut inputs = base_inputs();
        inputs.room_count = 0;
        assert!(matches!(
            compute_valuation(&inputs),
            Err(ValuationError::InvalidRoomCount { room_count: 0 })
        ));
    }
}
