//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type, which reads the service
//! configuration from an optional YAML file and applies environment variable
//! overrides on top.

use std::fs;
use std::path::Path;

use crate::error::{TaxError, TaxResult};

use super::types::{AppConfig, ProviderKind};

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "INCOME_TAX_CONFIG";
/// Environment variable overriding the listen port.
pub const APP_PORT_VAR: &str = "PORT_APP";
/// Environment variable overriding the upstream bracket service URL.
pub const BRACKET_SERVICE_URL_VAR: &str = "TAX_CALCULATOR_URL";
/// Environment variable selecting the static provider and its tables directory.
pub const TABLES_DIR_VAR: &str = "BRACKET_TABLES_DIR";

/// Loads and provides access to the service configuration.
///
/// Resolution order, later steps winning:
///
/// 1. built-in defaults
/// 2. the YAML file named by `INCOME_TAX_CONFIG`, if set
/// 3. `PORT_APP`, `TAX_CALCULATOR_URL` and `BRACKET_TABLES_DIR`
///
/// Setting `BRACKET_TABLES_DIR` also switches the provider to `static`.
///
/// # Example
///
/// ```no_run
/// use income_tax::config::ConfigLoader;
///
/// let loader = ConfigLoader::from_env()?;
/// println!("Listening on {}", loader.config().bind_address());
/// # Ok::<(), income_tax::error::TaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or
    /// `ConfigParseError` if it is not valid YAML for [`AppConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> TaxResult<Self> {
        let config = Self::load_yaml(path.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration using the process environment.
    pub fn from_env() -> TaxResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns the file errors of [`ConfigLoader::load`], or
    /// `ConfigParseError` if an override has an invalid value.
    pub fn from_lookup<F>(lookup: F) -> TaxResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match non_empty(&lookup, CONFIG_PATH_VAR) {
            Some(path) => Self::load_yaml(Path::new(&path))?,
            None => AppConfig::default(),
        };

        if let Some(port) = non_empty(&lookup, APP_PORT_VAR) {
            config.server.port = port.parse().map_err(|_| TaxError::ConfigParseError {
                path: APP_PORT_VAR.to_string(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(url) = non_empty(&lookup, BRACKET_SERVICE_URL_VAR) {
            config.provider.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(dir) = non_empty(&lookup, TABLES_DIR_VAR) {
            config.provider.kind = ProviderKind::Static;
            config.provider.tables_dir = Some(dir.into());
        }

        Ok(Self { config })
    }

    fn load_yaml(path: &Path) -> TaxResult<AppConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TaxError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|e| TaxError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}
