//! Core data models for the income tax calculator.
//!
//! This module contains the domain models shared by the calculator, the
//! bracket providers and the HTTP API.

mod tax_bracket;
mod tax_result;
mod tax_year;

pub use tax_bracket::{TaxBracket, TaxBrackets};
pub use tax_result::TaxCalculationResult;
pub use tax_year::TaxYear;
