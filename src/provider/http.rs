//! HTTP bracket provider.
//!
//! Fetches `GET {base_url}/{year}` from the upstream tax-bracket service.
//! Transport failures, `429` and `5xx` responses are retried a bounded number
//! of times with a fixed pause between attempts; other statuses and malformed
//! payloads fail immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::time::sleep;
use tracing::{debug, warn};

use super::{BracketProvider, ensure_usable, unavailable};
use crate::config::ProviderConfig;
use crate::error::{TaxError, TaxResult};
use crate::models::{TaxBrackets, TaxYear};

/// Outcome of a single failed request.
#[derive(Debug)]
enum FetchFailure {
    /// Worth trying again after the retry interval.
    Transient(String),
    /// Retrying cannot help.
    Permanent(String),
}

/// Bracket provider backed by the upstream tax-bracket HTTP service.
///
/// # Example
///
/// ```no_run
/// use income_tax::config::ProviderConfig;
/// use income_tax::models::TaxYear;
/// use income_tax::provider::{BracketProvider, HttpBracketProvider};
///
/// # async fn run() -> Result<(), income_tax::error::TaxError> {
/// let provider = HttpBracketProvider::new(&ProviderConfig::default())?;
/// let brackets = provider.brackets_for_year(TaxYear::new(2019)?).await?;
/// println!("{} bands", brackets.tax_brackets.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpBracketProvider {
    client: Client,
    base_url: String,
    max_retries: u32,
    retry_interval: Duration,
}

impl HttpBracketProvider {
    /// Creates a provider from the provider configuration section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> TaxResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TaxError::ConfigParseError {
                path: "provider".to_string(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            retry_interval: Duration::from_millis(config.retry_interval_ms),
        })
    }

    /// Returns the URL requested for `year`.
    pub fn year_url(&self, year: TaxYear) -> String {
        format!("{}/{}", self.base_url, year)
    }

    async fn fetch_once(&self, url: &str) -> Result<TaxBrackets, FetchFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transient(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = format!("received non-OK status code: {}", status.as_u16());
            return if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                Err(FetchFailure::Transient(message))
            } else {
                Err(FetchFailure::Permanent(message))
            };
        }

        response
            .json::<TaxBrackets>()
            .await
            .map_err(|e| FetchFailure::Permanent(format!("failed to decode JSON response: {}", e)))
    }
}

#[async_trait]
impl BracketProvider for HttpBracketProvider {
    async fn brackets_for_year(&self, year: TaxYear) -> TaxResult<TaxBrackets> {
        let url = self.year_url(year);
        let attempts = self.max_retries + 1;

        for attempt in 1..=attempts {
            debug!(%url, attempt, "Fetching tax brackets");

            match self.fetch_once(&url).await {
                Ok(brackets) => return ensure_usable(year, brackets),
                Err(FetchFailure::Permanent(message)) => {
                    warn!(%url, attempt, error = %message, "Tax bracket fetch failed");
                    return Err(unavailable(year, message));
                }
                Err(FetchFailure::Transient(message)) if attempt == attempts => {
                    warn!(%url, attempt, error = %message, "Tax bracket fetch failed, giving up");
                    return Err(unavailable(
                        year,
                        format!("{} (after {} attempts)", message, attempts),
                    ));
                }
                Err(FetchFailure::Transient(message)) => {
                    warn!(
                        %url,
                        attempt,
                        error = %message,
                        retry_in_ms = self.retry_interval.as_millis() as u64,
                        "Tax bracket fetch failed, retrying"
                    );
                    sleep(self.retry_interval).await;
                }
            }
        }

        Err(unavailable(year, "no fetch attempts were made"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_base(base_url: &str) -> HttpBracketProvider {
        let config = ProviderConfig {
            base_url: base_url.to_string(),
            ..ProviderConfig::default()
        };
        HttpBracketProvider::new(&config).unwrap()
    }

    #[test]
    fn test_year_url_appends_year() {
        let provider = provider_with_base("http://localhost:7070/tax-calculator/tax-year");
        assert_eq!(
            provider.year_url(TaxYear::new(2019).unwrap()),
            "http://localhost:7070/tax-calculator/tax-year/2019"
        );
    }

    #[test]
    fn test_year_url_strips_trailing_slash() {
        let provider = provider_with_base("http://localhost:7070/tax-calculator/tax-year/");
        assert_eq!(
            provider.year_url(TaxYear::new(2022).unwrap()),
            "http://localhost:7070/tax-calculator/tax-year/2022"
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_unavailable_after_retries() {
        let config = ProviderConfig {
            // Port 9 (discard) on loopback is closed on test machines.
            base_url: "http://127.0.0.1:9/tax-year".to_string(),
            max_retries: 1,
            retry_interval_ms: 1,
            timeout_secs: 2,
            ..ProviderConfig::default()
        };
        let provider = HttpBracketProvider::new(&config).unwrap();

        let err = provider
            .brackets_for_year(TaxYear::new(2019).unwrap())
            .await
            .unwrap_err();

        match err {
            TaxError::BracketsUnavailable { year, message } => {
                assert_eq!(year, "2019");
                assert!(message.contains("after 2 attempts"));
            }
            other => panic!("expected BracketsUnavailable, got {:?}", other),
        }
    }
}
