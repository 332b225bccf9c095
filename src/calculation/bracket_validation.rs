//! Bracket table validation.
//!
//! A well-formed table partitions `[0, ∞)`: it starts at zero, each bracket
//! begins where the previous one ends, and only the last bracket is
//! unbounded. Rates must lie in `[0, 1]`. Rates are expected to rise from
//! band to band, but real tables are not required to, so a falling rate is
//! only logged.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{TaxError, TaxResult};
use crate::models::TaxBracket;

/// Checks that `brackets` form a contiguous partition of `[0, ∞)`.
///
/// # Errors
///
/// Returns `InvalidBracketTable` describing the first broken invariant.
///
/// # Examples
///
/// ```
/// use income_tax::calculation::validate_brackets;
/// use income_tax::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     TaxBracket::new("band1", dec!(0), Some(dec!(47630)), dec!(0.15)),
///     TaxBracket::new("band2", dec!(47630), None, dec!(0.205)),
/// ];
/// assert!(validate_brackets(&brackets).is_ok());
/// ```
pub fn validate_brackets(brackets: &[TaxBracket]) -> TaxResult<()> {
    let invalid = |message: String| -> TaxResult<()> {
        Err(TaxError::InvalidBracketTable { message })
    };

    let Some(first) = brackets.first() else {
        return invalid("table contains no brackets".to_string());
    };

    if !first.min.is_zero() {
        return invalid(format!(
            "first bracket '{}' starts at {} instead of 0",
            first.band, first.min
        ));
    }

    let last_index = brackets.len() - 1;
    let mut previous: Option<&TaxBracket> = None;
    let mut seen_bands = HashSet::with_capacity(brackets.len());

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return invalid(format!(
                "bracket '{}' has rate {} outside [0, 1]",
                bracket.band, bracket.rate
            ));
        }

        match (index == last_index, bracket.max) {
            (true, Some(max)) => {
                return invalid(format!(
                    "last bracket '{}' is bounded at {}",
                    bracket.band, max
                ));
            }
            (false, None) => {
                return invalid(format!(
                    "bracket '{}' is unbounded but is not the last bracket",
                    bracket.band
                ));
            }
            (false, Some(max)) if max <= bracket.min => {
                return invalid(format!(
                    "bracket '{}' has max {} not above min {}",
                    bracket.band, max, bracket.min
                ));
            }
            _ => {}
        }

        if !seen_bands.insert(bracket.band.as_str()) {
            return invalid(format!("band '{}' appears more than once", bracket.band));
        }

        if let Some(previous) = previous {
            if previous.max != Some(bracket.min) {
                return invalid(format!(
                    "bracket '{}' starts at {} but '{}' ends at {}",
                    bracket.band,
                    bracket.min,
                    previous.band,
                    previous
                        .max
                        .map_or_else(|| "infinity".to_string(), |max| max.to_string())
                ));
            }

            if bracket.rate < previous.rate {
                warn!(
                    band = %bracket.band,
                    rate = %bracket.rate,
                    previous_rate = %previous.rate,
                    "Bracket rate is lower than the preceding band"
                );
            }
        }

        previous = Some(bracket);
    }

    Ok(())
}
