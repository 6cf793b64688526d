use super::AppState;
use super::metadata::{HEALTH_MESSAGE, project_info};
use crate::domain::errors::PredictionError;
use crate::domain::sales::PredictionRequest;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

pub async fn read_root() -> impl IntoResponse {
    Json(project_info())
}

pub async fn healthcheck() -> impl IntoResponse {
    (StatusCode::OK, Json(HEALTH_MESSAGE))
}

/// `GET /sales/stores/items`
///
/// Every failure, including a malformed or incomplete query string, ends as
/// a 500 with `{"error": ...}`.
pub async fn predict(
    State(state): State<AppState>,
    query: Result<Query<PredictionRequest>, QueryRejection>,
) -> Response {
    let result = match query {
        Ok(Query(request)) => state.service.predict_blocking(request).await,
        Err(rejection) => Err(PredictionError::Request(rejection.body_text())),
    };

    match result {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(e) => {
            warn!("Prediction failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
