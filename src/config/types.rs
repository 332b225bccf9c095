//! Configuration types for the income tax service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file (or no file at all) yields a runnable setup.

use std::path::PathBuf;

use serde::Deserialize;

/// Default port the API listens on.
pub const DEFAULT_APP_PORT: u16 = 8080;

/// Default upstream bracket service URL, without the trailing year.
pub const DEFAULT_BRACKET_SERVICE_URL: &str = "http://localhost:7070/tax-calculator/tax-year";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The interface to bind.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_APP_PORT,
        }
    }
}

/// Which bracket provider implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Fetch tables from the upstream HTTP service.
    #[default]
    Http,
    /// Serve tables from YAML files on disk.
    Static,
}

/// Bracket provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// The provider implementation.
    pub kind: ProviderKind,
    /// Base URL of the upstream service; the year is appended as a path segment.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    /// Pause between attempts in milliseconds.
    pub retry_interval_ms: u64,
    /// Directory of YAML bracket tables for the static provider.
    pub tables_dir: Option<PathBuf>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Http,
            base_url: DEFAULT_BRACKET_SERVICE_URL.to_string(),
            timeout_secs: 10,
            max_retries: 3,
            retry_interval_ms: 500,
            tables_dir: None,
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Bracket provider settings.
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
