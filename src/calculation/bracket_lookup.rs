//! Bracket lookup functionality.
//!
//! This module finds the single bracket that contains a salary. The
//! progressive calculator walks every bracket instead; lookup is used to
//! determine the marginal rate and by the legacy flat-rate computation.

use rust_decimal::Decimal;

use crate::error::{TaxError, TaxResult};
use crate::models::TaxBracket;

/// Finds the bracket containing `salary`.
///
/// A salary matches a bracket when `salary >= min` and either the bracket is
/// unbounded or `salary <= max`. Brackets are assumed sorted ascending by
/// `min`; the first match wins, so a salary sitting exactly on a shared
/// boundary resolves to the lower bracket.
///
/// # Errors
///
/// Returns `BracketNotFound` if the salary is negative, the list is empty, or
/// no bracket covers the salary.
///
/// # Examples
///
/// ```
/// use income_tax::calculation::find_bracket_for_salary;
/// use income_tax::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     TaxBracket::new("band1", dec!(0), Some(dec!(47630)), dec!(0.15)),
///     TaxBracket::new("band2", dec!(47630), None, dec!(0.205)),
/// ];
///
/// let bracket = find_bracket_for_salary(&brackets, dec!(50000)).unwrap();
/// assert_eq!(bracket.band, "band2");
/// ```
pub fn find_bracket_for_salary(brackets: &[TaxBracket], salary: Decimal) -> TaxResult<&TaxBracket> {
    if salary < Decimal::ZERO {
        return Err(TaxError::BracketNotFound { salary });
    }

    brackets
        .iter()
        .find(|bracket| bracket.contains(salary))
        .ok_or(TaxError::BracketNotFound { salary })
}

/// Returns the marginal rate applied to the last unit of `salary`.
pub fn marginal_rate(brackets: &[TaxBracket], salary: Decimal) -> TaxResult<Decimal> {
    find_bracket_for_salary(brackets, salary).map(|bracket| bracket.rate)
}
