pub mod pipeline;
pub mod preprocessor;
pub mod smartcore_predictor;
