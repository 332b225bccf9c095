//! Currency rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places used for every monetary output.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a value to exactly two decimal places, half away from zero.
///
/// Values at exactly 0.005 round to 0.01 (and -0.005 to -0.01). The result
/// always carries a scale of two, so `7144.5` renders as `7144.50`.
///
/// # Examples
///
/// ```
/// use income_tax::calculation::round_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_currency(dec!(485.845)), dec!(485.85));
/// assert_eq!(round_currency(dec!(485.844)), dec!(485.84));
/// assert_eq!(round_currency(dec!(7144.5)).to_string(), "7144.50");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_currency(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn test_rounds_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec!(123.455)), dec!(123.46));
        assert_eq!(round_currency(dec!(0.005)), dec!(0.01));
        assert_eq!(round_currency(dec!(2.125)), dec!(2.13));
    }

    #[test]
    fn test_even_neighbour_midpoint_does_not_round_to_even() {
        // Banker's rounding would give 2.12 here.
        assert_eq!(round_currency(dec!(2.125)).to_string(), "2.13");
        assert_eq!(round_currency(dec!(2.135)).to_string(), "2.14");
    }

    #[test]
    fn test_negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn test_pads_to_two_decimal_places() {
        assert_eq!(round_currency(dec!(7144.5)).to_string(), "7144.50");
        assert_eq!(round_currency(dec!(0)).to_string(), "0.00");
        assert_eq!(round_currency(dec!(15)).to_string(), "15.00");
    }

    #[test]
    fn test_large_values_keep_cent_precision() {
        assert_eq!(
            round_currency(dec!(1979930577.565)).to_string(),
            "1979930577.57"
        );
    }
}
