//! HTTP surface: info endpoints and the prediction endpoint.

pub mod handlers;
pub mod metadata;
pub mod request_tracing;

use crate::application::prediction_service::PredictionService;
use crate::domain::ports::SalesModel;
use axum::routing::get;
use axum::{Router, middleware};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(model: Arc<dyn SalesModel>) -> Self {
        Self {
            service: PredictionService::new(model),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route("/health", get(handlers::healthcheck))
        .route("/sales/stores/items", get(handlers::predict))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(request_tracing::request_tracing_middleware))
        .with_state(state)
}
