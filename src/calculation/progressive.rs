//! Progressive per-band tax calculation.
//!
//! Each band taxes only the part of the salary that falls inside it. The
//! amount owed in a band is rounded to cents as soon as it is computed, and
//! the total is the sum of those rounded amounts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::error::{TaxError, TaxResult};
use crate::models::{TaxBracket, TaxCalculationResult};

/// Calculates tax owed per band and in total for `salary`.
///
/// Brackets are walked in ascending order:
///
/// - the last bracket taxes `salary - min` (never below zero), whatever its
///   upper bound says;
/// - a bracket the salary exceeds is taxed in full (`max - min`);
/// - the bracket containing the salary taxes `salary - min`;
/// - brackets above the salary contribute nothing.
///
/// A salary exactly equal to a bracket's `max` is taxed entirely within that
/// bracket. Every band appears in the result, with `0.00` for bands the
/// salary does not reach.
///
/// # Errors
///
/// - `InvalidSalary` if `salary` is negative
/// - `BracketNotFound` if `brackets` is empty
/// - `NegativeTaxAmount` if the total comes out negative (only possible with
///   a malformed table, such as a negative rate)
/// - `ArithmeticOverflow` if an amount exceeds the decimal range
///
/// # Examples
///
/// ```
/// use income_tax::calculation::calculate_tax_per_band;
/// use income_tax::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     TaxBracket::new("band1", dec!(0), Some(dec!(47630)), dec!(0.15)),
///     TaxBracket::new("band2", dec!(47630), Some(dec!(95259)), dec!(0.205)),
///     TaxBracket::new("band3", dec!(95259), None, dec!(0.26)),
/// ];
///
/// let result = calculate_tax_per_band(&brackets, dec!(50000)).unwrap();
/// assert_eq!(result.amount_for_band("band1"), Some(dec!(7144.50)));
/// assert_eq!(result.amount_for_band("band2"), Some(dec!(485.85)));
/// assert_eq!(result.amount_for_band("band3"), Some(dec!(0.00)));
/// assert_eq!(result.total_tax_amount, dec!(7630.35));
/// ```
pub fn calculate_tax_per_band(
    brackets: &[TaxBracket],
    salary: Decimal,
) -> TaxResult<TaxCalculationResult> {
    if salary < Decimal::ZERO {
        return Err(TaxError::InvalidSalary {
            value: salary.to_string(),
            message: "salary cannot be negative".to_string(),
        });
    }

    if brackets.is_empty() {
        return Err(TaxError::BracketNotFound { salary });
    }

    let last_index = brackets.len() - 1;
    let mut tax_amount_per_band: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        let taxable = taxable_portion(bracket, salary, index == last_index)?;
        let owed = taxable
            .checked_mul(bracket.rate)
            .map(round_currency)
            .ok_or_else(|| overflow(format!("taxing band '{}'", bracket.band)))?;

        total = total
            .checked_add(owed)
            .ok_or_else(|| overflow("summing band amounts".to_string()))?;

        // Repeated band identifiers accumulate so the map still sums to the total.
        let entry = tax_amount_per_band
            .entry(bracket.band.clone())
            .or_insert(Decimal::ZERO);
        *entry = entry
            .checked_add(owed)
            .map(round_currency)
            .ok_or_else(|| overflow(format!("accumulating band '{}'", bracket.band)))?;
    }

    if total < Decimal::ZERO {
        return Err(TaxError::NegativeTaxAmount { total });
    }

    Ok(TaxCalculationResult {
        tax_amount_per_band,
        total_tax_amount: round_currency(total),
    })
}

/// Returns the part of `salary` that falls inside `bracket`.
fn taxable_portion(bracket: &TaxBracket, salary: Decimal, is_last: bool) -> TaxResult<Decimal> {
    let portion = match bracket.max {
        Some(max) if !is_last => {
            if salary > max {
                max.checked_sub(bracket.min)
            } else if salary > bracket.min {
                salary.checked_sub(bracket.min)
            } else {
                Some(Decimal::ZERO)
            }
        }
        _ => salary
            .checked_sub(bracket.min)
            .map(|portion| portion.max(Decimal::ZERO)),
    };

    portion.ok_or_else(|| overflow(format!("measuring band '{}'", bracket.band)))
}

fn overflow(operation: String) -> TaxError {
    TaxError::ArithmeticOverflow { operation }
}
