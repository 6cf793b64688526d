use sales_predictor::application::ml::pipeline::SalesPipeline;
use sales_predictor::domain::errors::ModelError;
use sales_predictor::domain::ports::SalesModel;
use sales_predictor::domain::sales::{ModelOutput, derive};
use sales_predictor::infrastructure::load_pipeline;
use sales_predictor::interfaces::{AppState, build_router};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

fn shipped_pipeline() -> SalesPipeline {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/sgd_pipeline.json");
    match load_pipeline(&path) {
        Ok(pipeline) => pipeline,
        Err(e) => panic!("shipped artifact failed to load: {}", e),
    }
}

#[test]
fn test_shipped_artifact_scores_scenario() {
    let pipeline = shipped_pipeline();
    assert_eq!(pipeline.name(), "sgd_pipeline");
    assert_eq!(pipeline.regressor_kind(), "linear");

    let record = derive("FOODS_1_001", "CA_1", "2023-10-15").unwrap();
    let value = pipeline.predict(&record).unwrap().into_scalar().unwrap();
    assert!(value.is_finite());
}

#[test]
fn test_shipped_artifact_rejects_unseen_store() {
    let pipeline = shipped_pipeline();

    let record = derive("FOODS_1_001", "NY_7", "2023-10-15").unwrap();
    let err = pipeline.predict(&record).unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownCategory {
            column: "store_id".to_string(),
            value: "NY_7".to_string(),
        }
    );
}

#[test]
fn test_weekday_changes_prediction() {
    let pipeline = shipped_pipeline();

    let sunday = derive("FOODS_1_001", "CA_1", "2023-10-15").unwrap();
    let monday = derive("FOODS_1_001", "CA_1", "2023-10-16").unwrap();

    let (ModelOutput::Scalar(a), ModelOutput::Scalar(b)) = (
        pipeline.predict(&sunday).unwrap(),
        pipeline.predict(&monday).unwrap(),
    ) else {
        panic!("linear pipeline should return scalars");
    };
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_shipped_artifact_over_http() {
    let pipeline = shipped_pipeline();
    let record = derive("HOBBIES_1_001", "TX_1", "2024-02-29").unwrap();
    let expected = pipeline.predict(&record).unwrap().into_scalar().unwrap();

    let app = build_router(AppState::new(Arc::new(pipeline)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/sales/stores/items"))
        .query(&[
            ("item_id", "HOBBIES_1_001"),
            ("store_id", "TX_1"),
            ("date", "2024-02-29"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let got = body["prediction"].as_f64().unwrap();
    assert!((got - expected).abs() < 1e-9);
}
