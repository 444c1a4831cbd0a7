//! Display rounding for grades.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places grades are shown with.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Rounds a grade to [`DISPLAY_DECIMALS`] places, midpoints away from zero.
///
/// Only reported values are rounded; threshold and tolerance comparisons
/// use the exact value.
///
/// # Example
///
/// ```
/// use grade_engine::calculation::round_display;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_display(Decimal::new(16125, 3)), Decimal::new(1613, 2));
/// ```
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_display(dec("10.125")), dec("10.13"));
        assert_eq!(round_display(dec("10.135")), dec("10.14"));
    }

    #[test]
    fn test_short_values_are_unchanged() {
        assert_eq!(round_display(dec("16.3")), dec("16.3"));
        assert_eq!(round_display(dec("20")), dec("20"));
    }

    #[test]
    fn test_long_values_are_truncated_to_two_places() {
        assert_eq!(round_display(dec("15.6666")), dec("15.67"));
        assert_eq!(round_display(dec("15.6644")), dec("15.66"));
    }
}
