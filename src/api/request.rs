//! Request types for the income tax API.
//!
//! This module defines the query parameters of the
//! `/income-tax/calculate-tax` endpoint and their validation.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TaxError, TaxResult};
use crate::models::TaxYear;

/// Raw query parameters for `GET /income-tax/calculate-tax`.
///
/// Both fields are kept as text so that missing and malformed values are
/// reported with the same validation error shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateTaxQuery {
    /// The annual salary, as a decimal string.
    pub salary: Option<String>,
    /// The four digit tax year.
    pub year: Option<String>,
}

/// Validated query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxQuery {
    /// The non-negative salary.
    pub salary: Decimal,
    /// The tax year.
    pub year: TaxYear,
}

impl CalculateTaxQuery {
    /// Validates the raw parameters.
    ///
    /// # Errors
    ///
    /// - `InvalidSalary` if the salary is missing, not a decimal, or negative
    /// - `InvalidYear` if the year is missing or not a four digit year
    pub fn validate(&self) -> TaxResult<TaxQuery> {
        let salary = parse_salary(self.salary.as_deref())?;
        let year = match self.year.as_deref() {
            Some(year) => year.parse::<TaxYear>()?,
            None => {
                return Err(TaxError::InvalidYear {
                    value: String::new(),
                });
            }
        };

        Ok(TaxQuery { salary, year })
    }
}

fn parse_salary(raw: Option<&str>) -> TaxResult<Decimal> {
    let raw = raw.map(str::trim).unwrap_or_default();
    let invalid = |message: &str| TaxError::InvalidSalary {
        value: raw.to_string(),
        message: message.to_string(),
    };

    if raw.is_empty() {
        return Err(invalid("salary is required"));
    }

    let salary = Decimal::from_str(raw).map_err(|_| invalid("salary must be a decimal number"))?;

    if salary < Decimal::ZERO {
        return Err(invalid("salary cannot be negative"));
    }

    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn query(salary: Option<&str>, year: Option<&str>) -> CalculateTaxQuery {
        CalculateTaxQuery {
            salary: salary.map(str::to_string),
            year: year.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_query() {
        let params = query(Some("50000"), Some("2019")).validate().unwrap();
        assert_eq!(params.salary, dec!(50000));
        assert_eq!(params.year.value(), 2019);
    }

    #[test]
    fn test_salary_with_cents() {
        let params = query(Some("50000.55"), Some("2019")).validate().unwrap();
        assert_eq!(params.salary, dec!(50000.55));
    }

    #[test]
    fn test_zero_salary_is_valid() {
        let params = query(Some("0"), Some("2019")).validate().unwrap();
        assert!(params.salary.is_zero());
    }

    #[test]
    fn test_missing_salary() {
        let err = query(None, Some("2019")).validate().unwrap_err();
        assert!(matches!(err, TaxError::InvalidSalary { message, .. } if message == "salary is required"));
    }

    #[test]
    fn test_non_numeric_salary() {
        let err = query(Some("abc"), Some("2019")).validate().unwrap_err();
        assert!(matches!(err, TaxError::InvalidSalary { value, .. } if value == "abc"));
    }

    #[test]
    fn test_negative_salary() {
        let err = query(Some("-50000"), Some("2019")).validate().unwrap_err();
        assert!(
            matches!(err, TaxError::InvalidSalary { message, .. } if message.contains("negative"))
        );
    }

    #[test]
    fn test_missing_year() {
        let err = query(Some("50000"), None).validate().unwrap_err();
        assert!(matches!(err, TaxError::InvalidYear { .. }));
    }

    #[test]
    fn test_invalid_year() {
        let err = query(Some("50000"), Some("invalid")).validate().unwrap_err();
        assert!(matches!(err, TaxError::InvalidYear { value } if value == "invalid"));
    }

    #[test]
    fn test_deserialize_from_query_string() {
        let parsed: CalculateTaxQuery =
            serde_json::from_str(r#"{"salary": "1", "year": "2019"}"#).unwrap();
        assert_eq!(parsed.salary.as_deref(), Some("1"));
        assert_eq!(parsed.year.as_deref(), Some("2019"));
    }
}
