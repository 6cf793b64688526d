use crate::domain::errors::ModelError;
use crate::domain::sales::{FeatureRecord, ModelOutput};

/// Interface for the pre-fit scoring artifact.
///
/// Implementations are loaded once and shared read-only between requests,
/// so `predict` takes `&self` and must not rely on interior mutation.
pub trait SalesModel: Send + Sync {
    /// Score a single feature record.
    fn predict(&self, record: &FeatureRecord) -> Result<ModelOutput, ModelError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
