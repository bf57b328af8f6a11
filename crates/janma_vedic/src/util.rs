//! Shared numeric helpers.

/// Round to 2 decimal places.
///
/// Rounds the exact decimal expansion of `value`, ties to even: `0.125`
/// becomes `0.12`, `0.375` becomes `0.38`, and `0.645` (stored as
/// 0.64500000000000001...) becomes `0.65`. Values just below a whole degree
/// can round up to it, so `29.996` gives `30.0`.
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_to_hundredths(0.125), 0.12);
        assert_eq!(round_to_hundredths(0.375), 0.38);
        assert_eq!(round_to_hundredths(12.625), 12.62);
    }

    #[test]
    fn rounds_stored_value_not_scaled_value() {
        // 0.645 is stored slightly above the tie, 20.235 slightly below.
        assert_eq!(round_to_hundredths(0.645), 0.65);
        assert_eq!(round_to_hundredths(20.235), 20.23);
        assert_eq!(round_to_hundredths(-1.005), -1.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_to_hundredths(f64::NAN).is_nan());
        assert_eq!(round_to_hundredths(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn ordinary_values() {
        assert_eq!(round_to_hundredths(5.75), 5.75);
        assert_eq!(round_to_hundredths(29.996), 30.0);
        assert_eq!(round_to_hundredths(0.0), 0.0);
        assert_eq!(round_to_hundredths(15.854_166), 15.85);
    }
}
