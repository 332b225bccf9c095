//! HTTP request handlers for the income tax API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_effective_rate, calculate_tax_for_salary, calculate_tax_per_band, marginal_rate,
};
use crate::error::TaxResult;
use crate::models::TaxBracket;

use super::request::CalculateTaxQuery;
use super::response::{ApiError, ApiErrorResponse, TaxAmountResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/income-tax/calculate-tax", get(calculate_tax_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for GET /income-tax/calculate-tax.
///
/// Validates `salary` and `year`, resolves the year's brackets and returns
/// the progressive tax breakdown.
async fn calculate_tax_handler(
    State(state): State<AppState>,
    query: Result<Query<CalculateTaxQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax calculation request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string rejected"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let params = match query.validate() {
        Ok(params) => params,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid query parameters");
            return error_response(err.into());
        }
    };

    let brackets = match state.provider().brackets_for_year(params.year).await {
        Ok(brackets) => brackets,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = %params.year,
                error = %err,
                "Failed to get tax brackets"
            );
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    match perform_calculation(brackets.as_slice(), params.salary) {
        Ok(breakdown) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                year = %params.year,
                bands = brackets.tax_brackets.len(),
                total_tax_amount = %breakdown.total_tax_amount,
                duration_us = duration.as_micros() as u64,
                "Tax calculation completed successfully"
            );

            let response = TaxAmountResponse {
                total_tax_amount: breakdown.total_tax_amount,
                tax_amount_per_band: breakdown.tax_amount_per_band,
                effective_rate: breakdown.effective_rate,
                marginal_rate: breakdown.marginal_rate,
                salary: params.salary,
                year: params.year,
                calculation_id: correlation_id,
                calculated_at: Utc::now(),
            };
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = %params.year,
                error = %err,
                "Tax calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Figures produced for one salary against one bracket table.
#[derive(Debug)]
struct TaxBreakdown {
    tax_amount_per_band: BTreeMap<String, Decimal>,
    total_tax_amount: Decimal,
    effective_rate: Decimal,
    marginal_rate: Decimal,
}

/// Runs the progressive calculation and derives the summary rates.
fn perform_calculation(brackets: &[TaxBracket], salary: Decimal) -> TaxResult<TaxBreakdown> {
    let per_band = calculate_tax_per_band(brackets, salary)?;
    let total_tax_amount =
        calculate_tax_for_salary(brackets, salary, Some(per_band.total_tax_amount))?;
    let effective_rate = calculate_effective_rate(total_tax_amount, salary)?;
    let marginal = marginal_rate(brackets, salary)?;

    Ok(TaxBreakdown {
        tax_amount_per_band: per_band.tax_amount_per_band,
        total_tax_amount,
        effective_rate,
        marginal_rate: marginal,
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    api_error.into_response()
}
