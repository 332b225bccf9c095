//! Effective tax rate calculation.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::error::{TaxError, TaxResult};

/// Returns total tax as a percentage of salary, rounded to 2 decimal places.
///
/// # Errors
///
/// Returns `DivisionByZero` when `salary` is zero. A zero salary is valid
/// input to the rest of the calculator, so callers must expect this.
///
/// # Examples
///
/// ```
/// use income_tax::calculation::calculate_effective_rate;
/// use rust_decimal_macros::dec;
///
/// let rate = calculate_effective_rate(dec!(7630.35), dec!(50000)).unwrap();
/// assert_eq!(rate, dec!(15.26));
/// ```
pub fn calculate_effective_rate(tax_amount: Decimal, salary: Decimal) -> TaxResult<Decimal> {
    if salary.is_zero() {
        return Err(TaxError::DivisionByZero);
    }

    tax_amount
        .checked_div(salary)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_currency)
        .ok_or_else(|| TaxError::ArithmeticOverflow {
            operation: "calculating effective rate".to_string(),
        })
}
