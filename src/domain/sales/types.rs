use crate::domain::errors::ModelError;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /sales/stores/items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub item_id: String,
    pub store_id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// One row of model input, derived from a [`PredictionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub item_id: String,
    pub store_id: String,
    pub year: i32,
    /// 1..=4
    pub quarter: u32,
    /// 1..=12
    pub month: u32,
    /// Monday = 0 .. Sunday = 6
    pub day_of_week: u32,
}

/// Raw output of a scoring call.
///
/// Some backends return a bare number, others a column of predictions with
/// one entry per input row. The endpoint only ever scores one row.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl ModelOutput {
    /// Unwrap to the single prediction for the scored row.
    pub fn into_scalar(self) -> Result<f64, ModelError> {
        let value = match self {
            ModelOutput::Scalar(value) => value,
            ModelOutput::Sequence(values) => match values.as_slice() {
                [] => return Err(ModelError::EmptyOutput),
                [value] => *value,
                _ => return Err(ModelError::AmbiguousOutput { len: values.len() }),
            },
        };

        if !value.is_finite() {
            return Err(ModelError::NonFinite { value });
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: f64,
}
