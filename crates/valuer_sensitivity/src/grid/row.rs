//! A single sensitivity grid cell.

use serde::{Deserialize, Serialize};
use valuer_core::engine::income_approach;
use valuer_core::math::rounding::round2;
use valuer_core::types::ValuationError;

/// One cell of the sensitivity grid.
///
/// Every field is derived strictly from this cell's own ADR, occupancy,
/// and cap rate plus the caller-fixed room count, operating expenses, and
/// ADR multiplier — no cross-row dependency, which is what makes rows
/// independently (and in parallel) computable.
///
/// Unlike the single-point dashboard values, NOI here is derived from the
/// cell's own ADR and occupancy rather than supplied by the caller.
///
/// Serialization uses camelCase field names; the CSV column order is an
/// external contract (see [`crate::export`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityRow {
    /// Average daily rate for this cell (dollars).
    pub adr: f64,
    /// Occupancy rate for this cell (fraction).
    pub occupancy: f64,
    /// Cap rate for this cell (fraction).
    pub cap_rate: f64,
    /// Annual revenue: ADR × rooms × occupancy × 365, rounded.
    pub revenue: f64,
    /// Net operating income: revenue − operating expenses, rounded.
    pub noi: f64,
    /// Income-approach value from this cell's NOI and cap rate.
    pub income_value: f64,
    /// ADR-multiplier value; varies only with this cell's ADR.
    pub adr_value: f64,
}

impl SensitivityRow {
    /// Computes one cell, in the contract order: revenue, then NOI, then
    /// the income-approach value.
    ///
    /// `adr_value` is supplied by the caller because it depends only on
    /// the ADR dimension; the generator memoizes it per ADR step without
    /// changing the observable output.
    ///
    /// # Errors
    /// - `ValuationError::DivisionByZero` if `cap_rate` is exactly zero
    pub(crate) fn compute(
        adr: f64,
        occupancy: f64,
        cap_rate: f64,
        room_count: u32,
        opex: f64,
        adr_value: f64,
    ) -> Result<Self, ValuationError> {
        let revenue = round2(adr * f64::from(room_count) * occupancy * 365.0);
        let noi = round2(revenue - opex);
        let income_value = income_approach(noi, cap_rate)?;
        Ok(Self {
            adr,
            occupancy,
            cap_rate,
            revenue,
            noi,
            income_value,
            adr_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_base_cell() {
        // ADR 70, occupancy 55%, cap 10%, 18 rooms, 480k opex.
        let row = SensitivityRow::compute(70.0, 0.55, 0.10, 18, 480_000.0, 9_576.0).unwrap();
        assert_eq!(row.revenue, 252_945.0);
        assert_eq!(row.noi, -227_055.0);
        assert_eq!(row.income_value, -2_270_550.0);
        assert_eq!(row.adr_value, 9_576.0);
    }

    #[test]
    fn test_compute_zero_cap_rate_fails() {
        let result = SensitivityRow::compute(70.0, 0.55, 0.0, 18, 480_000.0, 9_576.0);
        assert_eq!(
            result,
            Err(ValuationError::DivisionByZero {
                quantity: "cap rate"
            })
        );
    }

    #[test]
    fn test_noi_derived_from_cell_revenue() {
        let row = SensitivityRow::compute(95.0, 0.85, 0.07, 18, 100_000.0, 13_110.0).unwrap();
        assert_eq!(row.revenue, 530_527.5);
        assert_eq!(row.noi, 430_527.5);
    }
}
