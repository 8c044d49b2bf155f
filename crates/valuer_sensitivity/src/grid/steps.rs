//! Stepped value enumeration with inclusive upper bounds.

/// Tolerance for the ADR dimension (dollars): bounds within a cent of the
/// maximum are still included.
pub(crate) const ADR_STEP_EPSILON: f64 = 1e-2;

/// Tolerance for fractional dimensions (occupancy, cap rate).
pub(crate) const FRACTION_STEP_EPSILON: f64 = 1e-4;

/// Enumerates `min + i * step` for i = 0, 1, ... while the value stays
/// below `max + epsilon`.
///
/// Each value is computed from the index rather than by repeated addition,
/// so there is no accumulation drift; the epsilon makes the upper bound
/// inclusive despite binary representation of decimal steps.
///
/// Callers must validate `step > 0` first; the sequence always contains at
/// least one value when `min <= max`.
pub(crate) fn step_values(min: f64, max: f64, step: f64, epsilon: f64) -> Vec<f64> {
    let stop = max + epsilon;
    let mut values = Vec::new();
    let mut i = 0usize;
    loop {
        let value = min + (i as f64) * step;
        if value >= stop {
            break;
        }
        values.push(value);
        i += 1;
    }
    values
}
