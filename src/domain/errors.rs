use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a request into a feature record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("time data '{input}' does not match format '%Y-%m-%d': {reason}")]
    InvalidDateFormat { input: String, reason: String },

    #[error("{field} must not be empty")]
    EmptyIdentifier { field: &'static str },
}

/// Errors raised by the scoring artifact while scoring a record
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Found unknown category '{value}' in column '{column}' during transform")]
    UnknownCategory { column: String, value: String },

    #[error("Column '{column}' is not a known feature")]
    UnknownColumn { column: String },

    #[error("Column '{column}' is expected to be {expected}")]
    ColumnTypeMismatch {
        column: String,
        expected: &'static str,
    },

    #[error("Model returned no prediction")]
    EmptyOutput,

    #[error("Model returned {len} predictions for a single row")]
    AmbiguousOutput { len: usize },

    #[error("Model returned a non-finite prediction: {value}")]
    NonFinite { value: f64 },

    #[error("Prediction failed: {0}")]
    Backend(String),
}

/// Errors raised while loading the model artifact at startup
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Model artifact not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model artifact {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {reason}")]
    Invalid { reason: String },
}

/// Every way a prediction request can fail. All variants surface as a
/// JSON error body at the HTTP boundary.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("{0}")]
    Request(String),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_formatting() {
        let err = FeatureError::InvalidDateFormat {
            input: "2023/10/15".to_string(),
            reason: "input contains invalid characters".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("2023/10/15"));
        assert!(msg.contains("%Y-%m-%d"));
    }

    #[test]
    fn test_unknown_category_formatting() {
        let err = ModelError::UnknownCategory {
            column: "store_id".to_string(),
            value: "ZZ_9".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("store_id"));
        assert!(msg.contains("ZZ_9"));
    }

    #[test]
    fn test_prediction_error_is_transparent() {
        let err: PredictionError = FeatureError::EmptyIdentifier { field: "item_id" }.into();
        assert_eq!(err.to_string(), "item_id must not be empty");

        let err: PredictionError = ModelError::EmptyOutput.into();
        assert_eq!(err.to_string(), "Model returned no prediction");
    }
}
