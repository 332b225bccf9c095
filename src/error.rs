//! Error types for the income tax calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving brackets and
//! computing tax.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the income tax calculator.
///
/// Every calculation, provider and configuration operation returns this
/// error type, so the API layer can translate failures in one place.
///
/// # Example
///
/// ```
/// use income_tax::error::TaxError;
///
/// let error = TaxError::ConfigNotFound {
///     path: "/missing/app.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/app.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TaxError {
    /// No bracket covers the salary, or the bracket list is empty.
    #[error("Tax bracket not found for salary {salary}")]
    BracketNotFound {
        /// The salary that could not be placed in a bracket.
        salary: Decimal,
    },

    /// The computed total tax went negative.
    #[error("Total tax amount cannot be negative: {total}")]
    NegativeTaxAmount {
        /// The offending total.
        total: Decimal,
    },

    /// An effective rate was requested for a zero salary.
    #[error("Salary cannot be zero when calculating an effective rate")]
    DivisionByZero,

    /// A decimal operation exceeded the representable range.
    #[error("Arithmetic overflow while {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// The bracket provider could not supply brackets for the year.
    #[error("Tax brackets unavailable for year {year}: {message}")]
    BracketsUnavailable {
        /// The requested tax year.
        year: String,
        /// What went wrong upstream.
        message: String,
    },

    /// A bracket table does not partition `[0, ∞)`.
    #[error("Invalid tax bracket table: {message}")]
    InvalidBracketTable {
        /// A description of the broken invariant.
        message: String,
    },

    /// A salary value could not be accepted.
    #[error("Invalid salary '{value}': {message}")]
    InvalidSalary {
        /// The salary as supplied.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// A tax year was not a four digit year.
    #[error("Invalid tax year '{value}': expected a four digit year")]
    InvalidYear {
        /// The year as supplied.
        value: String,
    },

    /// Configuration file or directory was not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return TaxError.
pub type TaxResult<T> = Result<T, TaxError>;
