//! Total tax for a salary.
//!
//! The progressive total from [`calculate_tax_per_band`](super::calculate_tax_per_band)
//! is the correct figure. The flat marginal-rate computation is kept only for
//! callers that still depend on the older response.

use rust_decimal::Decimal;

use super::bracket_lookup::find_bracket_for_salary;
use super::rounding::round_currency;
use crate::error::{TaxError, TaxResult};
use crate::models::TaxBracket;

/// Returns the total tax owed for `salary`.
///
/// A bracket must cover the salary. When `precomputed_total` is supplied it
/// is returned rounded to cents, including a zero total; this is how the
/// progressive total computed per band is passed through. Only `None` falls
/// back to the legacy flat amount.
///
/// # Errors
///
/// - `BracketNotFound` if no bracket covers the salary
/// - `NegativeTaxAmount` if the precomputed total is negative
///
/// # Examples
///
/// ```
/// use income_tax::calculation::{calculate_tax_for_salary, calculate_tax_per_band};
/// use income_tax::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     TaxBracket::new("band1", dec!(0), Some(dec!(47630)), dec!(0.15)),
///     TaxBracket::new("band2", dec!(47630), None, dec!(0.205)),
/// ];
///
/// let per_band = calculate_tax_per_band(&brackets, dec!(50000)).unwrap();
/// let total = calculate_tax_for_salary(&brackets, dec!(50000), Some(per_band.total_tax_amount)).unwrap();
/// assert_eq!(total, dec!(7630.35));
/// ```
pub fn calculate_tax_for_salary(
    brackets: &[TaxBracket],
    salary: Decimal,
    precomputed_total: Option<Decimal>,
) -> TaxResult<Decimal> {
    let bracket = find_bracket_for_salary(brackets, salary)?;

    match precomputed_total {
        Some(total) if total < Decimal::ZERO => Err(TaxError::NegativeTaxAmount { total }),
        Some(total) => Ok(round_currency(total)),
        None => flat_tax(bracket, salary),
    }
}

/// Taxes the whole salary at the rate of the bracket containing it.
///
/// This ignores lower bands entirely and overstates tax for every salary
/// above the first bracket.
///
/// # Examples
///
/// ```
/// #![allow(deprecated)]
/// use income_tax::calculation::calculate_flat_tax;
/// use income_tax::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let brackets = vec![
///     TaxBracket::new("band1", dec!(0), Some(dec!(47630)), dec!(0.15)),
///     TaxBracket::new("band2", dec!(47630), None, dec!(0.205)),
/// ];
/// assert_eq!(calculate_flat_tax(&brackets, dec!(50000)).unwrap(), dec!(10250.00));
/// ```
#[deprecated(note = "flat marginal-rate tax ignores lower bands; use calculate_tax_per_band")]
pub fn calculate_flat_tax(brackets: &[TaxBracket], salary: Decimal) -> TaxResult<Decimal> {
    let bracket = find_bracket_for_salary(brackets, salary)?;
    flat_tax(bracket, salary)
}

fn flat_tax(bracket: &TaxBracket, salary: Decimal) -> TaxResult<Decimal> {
    salary
        .checked_mul(bracket.rate)
        .map(round_currency)
        .ok_or_else(|| TaxError::ArithmeticOverflow {
            operation: format!("applying flat rate of band '{}'", bracket.band),
        })
}
