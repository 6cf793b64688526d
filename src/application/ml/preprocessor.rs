//! Column preprocessing in front of the regressor.
//!
//! Mirrors the column transformer the model was trained behind: categorical
//! columns are one-hot encoded, numeric columns are optionally standardized.
//! Encoded layout is all categorical blocks first (declared order), then the
//! numeric columns (declared order).

use crate::domain::errors::{ArtifactError, ModelError};
use crate::domain::ml::feature_registry::{FeatureKind, FeatureValue, feature_kind, feature_value};
use crate::domain::sales::FeatureRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do with a category that was not seen during training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    /// Encode as all zeros
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub column: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub column: String,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPreprocessor {
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
    #[serde(default)]
    pub categorical: Vec<CategoricalColumn>,
    #[serde(default)]
    pub numeric: Vec<NumericColumn>,
}

impl ColumnPreprocessor {
    /// Number of values in an encoded row.
    pub fn width(&self) -> usize {
        self.categorical
            .iter()
            .map(|c| c.categories.len())
            .sum::<usize>()
            + self.numeric.len()
    }

    /// Check the column declarations against the feature registry.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let mut seen = HashSet::new();

        for cat in &self.categorical {
            check_column(&cat.column, FeatureKind::Categorical, &mut seen)?;
            if cat.categories.is_empty() {
                return Err(invalid(format!(
                    "categorical column '{}' has no categories",
                    cat.column
                )));
            }
            let mut unique = HashSet::new();
            for category in &cat.categories {
                if !unique.insert(category.as_str()) {
                    return Err(invalid(format!(
                        "categorical column '{}' lists '{}' twice",
                        cat.column, category
                    )));
                }
            }
        }

        for num in &self.numeric {
            check_column(&num.column, FeatureKind::Numeric, &mut seen)?;
            if !num.mean.is_finite() {
                return Err(invalid(format!("numeric column '{}' has a non-finite mean", num.column)));
            }
            if !num.scale.is_finite() || num.scale == 0.0 {
                return Err(invalid(format!(
                    "numeric column '{}' has an unusable scale {}",
                    num.column, num.scale
                )));
            }
        }

        if self.width() == 0 {
            return Err(invalid("preprocessor produces no features".to_string()));
        }
        Ok(())
    }

    /// Encode one record into the regressor's input row.
    pub fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>, ModelError> {
        let mut row = Vec::with_capacity(self.width());

        for cat in &self.categorical {
            let value = text_value(record, &cat.column)?;
            let hit = cat.categories.iter().position(|c| c == value);
            if hit.is_none() && self.handle_unknown == HandleUnknown::Error {
                return Err(ModelError::UnknownCategory {
                    column: cat.column.clone(),
                    value: value.to_string(),
                });
            }
            row.extend((0..cat.categories.len()).map(|i| if hit == Some(i) { 1.0 } else { 0.0 }));
        }

        for num in &self.numeric {
            let value = number_value(record, &num.column)?;
            row.push((value - num.mean) / num.scale);
        }

        Ok(row)
    }
}

fn check_column<'a>(
    column: &'a str,
    expected: FeatureKind,
    seen: &mut HashSet<&'a str>,
) -> Result<(), ArtifactError> {
    match feature_kind(column) {
        None => Err(invalid(format!("column '{}' is not a known feature", column))),
        Some(kind) if kind != expected => Err(invalid(format!(
            "column '{}' is declared {:?} but the feature is {:?}",
            column, expected, kind
        ))),
        Some(_) if !seen.insert(column) => {
            Err(invalid(format!("column '{}' is declared twice", column)))
        }
        Some(_) => Ok(()),
    }
}

fn text_value<'a>(record: &'a FeatureRecord, column: &str) -> Result<&'a str, ModelError> {
    match feature_value(record, column) {
        Some(FeatureValue::Text(value)) => Ok(value),
        Some(FeatureValue::Number(_)) => Err(ModelError::ColumnTypeMismatch {
            column: column.to_string(),
            expected: "text",
        }),
        None => Err(ModelError::UnknownColumn {
            column: column.to_string(),
        }),
    }
}

fn number_value(record: &FeatureRecord, column: &str) -> Result<f64, ModelError> {
    match feature_value(record, column) {
        Some(FeatureValue::Number(value)) => Ok(value),
        Some(FeatureValue::Text(_)) => Err(ModelError::ColumnTypeMismatch {
            column: column.to_string(),
            expected: "numeric",
        }),
        None => Err(ModelError::UnknownColumn {
            column: column.to_string(),
        }),
    }
}

fn invalid(reason: String) -> ArtifactError {
    ArtifactError::Invalid { reason }
}
