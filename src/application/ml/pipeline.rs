//! File-backed scoring pipeline: column preprocessing followed by a regressor.

use super::preprocessor::ColumnPreprocessor;
use super::smartcore_predictor::{ForestModel, predict_forest};
use crate::domain::errors::{ArtifactError, ModelError};
use crate::domain::ports::SalesModel;
use crate::domain::sales::{FeatureRecord, ModelOutput};
use serde::{Deserialize, Serialize};

/// Coefficients of a fitted linear model (SGD or ordinary least squares).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegressor {
    fn predict(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Regressor {
    Linear(LinearRegressor),
    RandomForest(ForestModel),
}

impl Regressor {
    fn kind(&self) -> &'static str {
        match self {
            Regressor::Linear(_) => "linear",
            Regressor::RandomForest(_) => "random_forest",
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct SalesPipeline {
    pub name: String,
    pub version: String,
    pub preprocessor: ColumnPreprocessor,
    pub regressor: Regressor,
}

impl SalesPipeline {
    /// Reject artifacts that could never score a record.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        self.preprocessor.validate()?;

        if let Regressor::Linear(linear) = &self.regressor {
            let width = self.preprocessor.width();
            if linear.coefficients.len() != width {
                return Err(ArtifactError::Invalid {
                    reason: format!(
                        "linear regressor has {} coefficients for {} encoded features",
                        linear.coefficients.len(),
                        width
                    ),
                });
            }
            if !linear.intercept.is_finite() || linear.coefficients.iter().any(|w| !w.is_finite()) {
                return Err(ArtifactError::Invalid {
                    reason: "linear regressor has non-finite weights".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn regressor_kind(&self) -> &'static str {
        self.regressor.kind()
    }
}

impl SalesModel for SalesPipeline {
    fn predict(&self, record: &FeatureRecord) -> Result<ModelOutput, ModelError> {
        let row = self.preprocessor.transform(record)?;

        match &self.regressor {
            Regressor::Linear(linear) => Ok(ModelOutput::Scalar(linear.predict(&row))),
            Regressor::RandomForest(forest) => {
                predict_forest(forest, row).map(ModelOutput::Sequence)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}
