//! Model artifact location.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "models/sgd_pipeline.json";

/// Model environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEnvConfig {
    /// Resolved against the working directory when relative
    pub path: PathBuf,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            path: lookup("MODEL_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_defaults() {
        let config = ModelEnvConfig::from_lookup(|_| None);
        assert_eq!(config.path, PathBuf::from("models/sgd_pipeline.json"));

        let config = ModelEnvConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ModelEnvConfig::default());
    }

    #[test]
    fn test_model_config_override() {
        let config = ModelEnvConfig::from_lookup(|_| Some("/srv/models/rf.json".to_string()));
        assert_eq!(config.path, PathBuf::from("/srv/models/rf.json"));
    }
}
