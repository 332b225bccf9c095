//! Calculation logic for the income tax calculator.
//!
//! This module contains the pure tax functions: bracket lookup, bracket table
//! validation, progressive per-band tax, total tax, effective rate and the
//! currency rounding they share. None of them touch shared state, so they are
//! safe to call concurrently on the same bracket slice.

mod bracket_lookup;
mod bracket_validation;
mod effective_rate;
mod progressive;
mod rounding;
mod total_tax;

pub use bracket_lookup::{find_bracket_for_salary, marginal_rate};
pub use bracket_validation::validate_brackets;
pub use effective_rate::calculate_effective_rate;
pub use progressive::calculate_tax_per_band;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
#[allow(deprecated)]
pub use total_tax::calculate_flat_tax;
pub use total_tax::calculate_tax_for_salary;
