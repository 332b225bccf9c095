//! Application state for the income tax API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::provider::BracketProvider;

/// Shared application state.
///
/// Holds the bracket provider used to resolve tables per request.
#[derive(Clone)]
pub struct AppState {
    /// The bracket provider.
    provider: Arc<dyn BracketProvider>,
}

impl AppState {
    /// Creates a new application state owning `provider`.
    pub fn new<P>(provider: P) -> Self
    where
        P: BracketProvider + 'static,
    {
        Self::from_provider(Arc::new(provider))
    }

    /// Creates a new application state from a shared provider.
    pub fn from_provider(provider: Arc<dyn BracketProvider>) -> Self {
        Self { provider }
    }

    /// Returns the bracket provider.
    pub fn provider(&self) -> &dyn BracketProvider {
        self.provider.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }
}
