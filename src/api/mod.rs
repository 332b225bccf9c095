//! HTTP API module for the income tax calculator.
//!
//! This module provides the REST API endpoints for calculating income tax
//! for a salary and tax year.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateTaxQuery, TaxQuery};
pub use response::{ApiError, ApiErrorResponse, TaxAmountResponse};
pub use state::AppState;
