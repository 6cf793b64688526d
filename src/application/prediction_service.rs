use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::record_to_row;
use crate::domain::ports::SalesModel;
use crate::domain::sales::{PredictionRequest, PredictionResult, derive};
use std::sync::Arc;
use tracing::debug;

/// Derive features and score them as one fallible step.
///
/// Cheap to clone; every clone shares the same loaded model.
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn SalesModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn SalesModel>) -> Self {
        Self { model }
    }

    /// Runs synchronously on the calling thread.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictionError> {
        let record = derive(&request.item_id, &request.store_id, &request.date)?;
        debug!(row = ?record_to_row(&record), "Scoring feature record");

        let prediction = self.model.predict(&record)?.into_scalar()?;
        Ok(PredictionResult { prediction })
    }

    /// Same as [`predict`](Self::predict) but on tokio's blocking pool, so a
    /// slow model stalls only this request and a panicking one becomes an error.
    pub async fn predict_blocking(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.predict(&request))
            .await
            .map_err(|e| PredictionError::Internal(join_error_message(e)))?
    }
}

fn join_error_message(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("model panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("model panicked: {}", msg)
    } else {
        "model panicked".to_string()
    }
}
