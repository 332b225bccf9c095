//! Response types for the income tax API.
//!
//! This module defines the success body of the calculate-tax endpoint, the
//! error response structure, and the mapping from [`TaxError`] to HTTP
//! status codes.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TaxError;
use crate::models::TaxYear;

/// Success body for `GET /income-tax/calculate-tax`.
///
/// Monetary values and rates are serialized as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAmountResponse {
    /// Total tax owed across all bands.
    pub total_tax_amount: Decimal,
    /// Tax owed in each band; every band is present.
    pub tax_amount_per_band: BTreeMap<String, Decimal>,
    /// Total tax as a percentage of salary.
    pub effective_rate: Decimal,
    /// Rate of the bracket containing the salary.
    pub marginal_rate: Decimal,
    /// The salary the tax was computed for.
    pub salary: Decimal,
    /// The tax year whose brackets were applied.
    pub year: TaxYear,
    /// Identifier of this calculation, also logged as the correlation id.
    pub calculation_id: Uuid,
    /// When the calculation completed.
    pub calculated_at: DateTime<Utc>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<TaxError> for ApiErrorResponse {
    fn from(error: TaxError) -> Self {
        let message = error.to_string();
        match error {
            TaxError::InvalidSalary { .. } | TaxError::InvalidYear { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            TaxError::DivisionByZero => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "ZERO_SALARY",
                    message,
                    "The effective rate is undefined for a salary of zero",
                ),
            },
            TaxError::BracketsUnavailable { year, .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "BRACKETS_UNAVAILABLE",
                    format!("Failed to get tax brackets for year {}", year),
                    message,
                ),
            },
            TaxError::BracketNotFound { .. }
            | TaxError::NegativeTaxAmount { .. }
            | TaxError::InvalidBracketTable { .. }
            | TaxError::ArithmeticOverflow { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            TaxError::ConfigNotFound { .. } | TaxError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_salary_is_bad_request() {
        let response: ApiErrorResponse = TaxError::InvalidSalary {
            value: "abc".to_string(),
            message: "salary must be a decimal number".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.message.contains("abc"));
    }

    #[test]
    fn test_invalid_year_is_bad_request() {
        let response: ApiErrorResponse = TaxError::InvalidYear {
            value: "19".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_division_by_zero_is_unprocessable() {
        let response: ApiErrorResponse = TaxError::DivisionByZero.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "ZERO_SALARY");
    }

    #[test]
    fn test_brackets_unavailable_is_bad_gateway() {
        let response: ApiErrorResponse = TaxError::BracketsUnavailable {
            year: "2019".to_string(),
            message: "received non-OK status code: 503".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.message, "Failed to get tax brackets for year 2019");
        assert!(response.error.details.unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_error_response_body_and_headers() {
        let response = ApiErrorResponse::from(TaxError::InvalidYear {
            value: "19".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_calculation_failures_are_internal_errors() {
        let errors = vec![
            TaxError::BracketNotFound { salary: dec!(10) },
            TaxError::NegativeTaxAmount { total: dec!(-1) },
            TaxError::InvalidBracketTable {
                message: "gap".to_string(),
            },
            TaxError::ArithmeticOverflow {
                operation: "summing band amounts".to_string(),
            },
        ];

        for error in errors {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(response.error.code, "CALCULATION_ERROR");
        }
    }

    #[test]
    fn test_response_uses_camel_case_and_decimal_strings() {
        let mut per_band = BTreeMap::new();
        per_band.insert("band1".to_string(), dec!(7144.50));
        per_band.insert("band2".to_string(), dec!(485.85));

        let response = TaxAmountResponse {
            total_tax_amount: dec!(7630.35),
            tax_amount_per_band: per_band,
            effective_rate: dec!(15.26),
            marginal_rate: dec!(0.205),
            salary: dec!(50000),
            year: TaxYear::new(2019).unwrap(),
            calculation_id: Uuid::nil(),
            calculated_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalTaxAmount"], "7630.35");
        assert_eq!(json["taxAmountPerBand"]["band2"], "485.85");
        assert_eq!(json["effectiveRate"], "15.26");
        assert_eq!(json["year"], 2019);
        assert!(json.get("calculationId").is_some());
    }
}
