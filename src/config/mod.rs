//! Configuration module for the sales prediction server.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server and Model.

mod model_config;
mod server_config;

pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_env().context("Failed to load server config")?,
            model: ModelEnvConfig::from_env(),
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            server: ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?,
            model: ModelEnvConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [("APP_PORT", "8080"), ("MODEL_PATH", "m.json")]
            .into_iter()
            .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.model.path.to_str(), Some("m.json"));
    }

    #[test]
    fn test_config_error_has_context() {
        let err = Config::from_lookup(|key| (key == "APP_HOST").then(|| "nowhere".to_string()))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load server config"));
        assert!(format!("{:#}", err).contains("Invalid APP_HOST"));
    }
}
