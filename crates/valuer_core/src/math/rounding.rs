//! Display rounding at two decimal places.
//!
//! Every value the engine exposes is rounded to two decimal places, and the
//! rounding mode is an observable contract for display and tests.

/// Rounds to two decimal places using round-half-even (banker's rounding).
///
/// Implemented by scaling to cents and applying [`f64::round_ties_even`],
/// so a scaled value landing exactly on `.5` rounds to the even cent. This
/// matches the rounding used for every exposed value in the engine and the
/// sensitivity grid.
///
/// Non-finite inputs pass through unchanged.
///
/// # Examples
/// ```
/// use valuer_core::math::rounding::round2;
///
/// assert_eq!(round2(1.0 / 3.0), 0.33);
/// assert_eq!(round2(0.125), 0.12); // ties to even
/// assert_eq!(round2(0.375), 0.38);
/// ```
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_plain_cases() {
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.346), 2.35);
        assert_eq!(round2(-2.346), -2.35);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        // 0.125 and 0.375 scale to exactly 12.5 and 37.5
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn test_round2_idempotent() {
        let x = round2(123.456_789);
        assert_eq!(round2(x), x);
    }

    #[test]
    fn test_round2_preserves_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round2_large_magnitude() {
        assert_eq!(round2(2_705_882.352_941_176_4), 2_705_882.35);
    }
}
