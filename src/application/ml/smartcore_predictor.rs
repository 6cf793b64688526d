use crate::domain::errors::ModelError;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Random forest as serialized by smartcore (serde feature).
pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Score one encoded row with a smartcore random forest.
///
/// Returns smartcore's prediction column untouched; the caller unwraps it.
pub fn predict_forest(model: &ForestModel, row: Vec<f64>) -> Result<Vec<f64>, ModelError> {
    let input_matrix = DenseMatrix::from_2d_vec(&vec![row])
        .map_err(|e| ModelError::Backend(format!("Matrix creation failed: {}", e)))?;

    model
        .predict(&input_matrix)
        .map_err(|e| ModelError::Backend(e.to_string()))
}

#[cfg(test)]
pub(crate) fn tiny_forest() -> ForestModel {
    use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;

    let x = DenseMatrix::from_2d_vec(&vec![
        vec![1.0, 0.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 0.0, 2.0],
        vec![1.0, 0.0, 3.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 1.0, 1.0],
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 3.0],
    ])
    .unwrap();
    let y = vec![10.0, 11.0, 12.0, 13.0, 40.0, 41.0, 42.0, 43.0];

    RandomForestRegressor::fit(&x, &y, RandomForestRegressorParameters::default()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_predicts_one_value_per_row() {
        let model = tiny_forest();
        let out = predict_forest(&model, vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].is_finite());
    }

    #[test]
    fn test_forest_survives_serde() {
        let model = tiny_forest();
        let json = serde_json::to_string(&model).unwrap();
        let restored: ForestModel = serde_json::from_str(&json).unwrap();

        let row = vec![1.0, 0.0, 1.0];
        let before = predict_forest(&model, row.clone()).unwrap();
        let after = predict_forest(&restored, row).unwrap();
        assert!((before[0] - after[0]).abs() < 1e-9);
    }
}
