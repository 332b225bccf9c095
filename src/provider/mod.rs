//! Bracket providers.
//!
//! A provider resolves the ordered bracket table for a tax year. The
//! calculator never talks to a provider directly; the API layer fetches a
//! table and hands the calculator a read-only slice.
//!
//! Every failure to obtain a usable table (transport error, non-success
//! status, malformed payload, unknown year, broken table) surfaces as
//! [`TaxError::BracketsUnavailable`](crate::error::TaxError::BracketsUnavailable).

mod http;
mod static_table;

use std::sync::Arc;

use async_trait::async_trait;

use crate::calculation::validate_brackets;
use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{TaxError, TaxResult};
use crate::models::{TaxBrackets, TaxYear};

pub use http::HttpBracketProvider;
pub use static_table::{BracketTableFile, StaticBracketProvider};

/// Source of bracket tables keyed by tax year.
#[async_trait]
pub trait BracketProvider: Send + Sync {
    /// Returns the validated bracket table for `year`.
    async fn brackets_for_year(&self, year: TaxYear) -> TaxResult<TaxBrackets>;
}

/// Builds the provider selected by `config`.
///
/// # Errors
///
/// - `ConfigNotFound` if a static provider has no tables directory
/// - any error from loading the tables or building the HTTP client
pub fn provider_from_config(config: &ProviderConfig) -> TaxResult<Arc<dyn BracketProvider>> {
    match config.kind {
        ProviderKind::Http => Ok(Arc::new(HttpBracketProvider::new(config)?)),
        ProviderKind::Static => {
            let dir = config
                .tables_dir
                .as_ref()
                .ok_or_else(|| TaxError::ConfigNotFound {
                    path: "provider.tables_dir".to_string(),
                })?;
            Ok(Arc::new(StaticBracketProvider::load_dir(dir)?))
        }
    }
}

/// Rejects a fetched table that does not partition `[0, ∞)`.
fn ensure_usable(year: TaxYear, brackets: TaxBrackets) -> TaxResult<TaxBrackets> {
    validate_brackets(brackets.as_slice()).map_err(|err| unavailable(year, err.to_string()))?;
    Ok(brackets)
}

fn unavailable(year: TaxYear, message: impl Into<String>) -> TaxError {
    TaxError::BracketsUnavailable {
        year: year.to_string(),
        message: message.into(),
    }
}
