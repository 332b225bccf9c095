//! Service configuration.
//!
//! This module provides types and functionality for loading the server and
//! bracket provider settings from YAML and the environment.

mod loader;
mod types;

pub use loader::{
    APP_PORT_VAR, BRACKET_SERVICE_URL_VAR, CONFIG_PATH_VAR, ConfigLoader, TABLES_DIR_VAR,
};
pub use types::{
    AppConfig, DEFAULT_APP_PORT, DEFAULT_BRACKET_SERVICE_URL, ProviderConfig, ProviderKind,
    ServerConfig,
};
