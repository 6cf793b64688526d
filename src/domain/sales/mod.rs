// Feature derivation for (item, store, date) requests
pub mod features;
pub mod types;

pub use features::derive;
pub use types::{FeatureRecord, ModelOutput, PredictionRequest, PredictionResult};
