use crate::application::ml::pipeline::SalesPipeline;
use crate::domain::errors::ArtifactError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load and validate the scoring pipeline from a JSON artifact.
///
/// Called once at startup. Any failure here is fatal for the server, so
/// unlike per-request errors nothing is swallowed.
pub fn load_pipeline(path: &Path) -> Result<SalesPipeline, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pipeline: SalesPipeline = serde_json::from_reader(BufReader::new(file))?;
    pipeline.validate()?;

    info!(
        "Successfully loaded model '{}' {} ({}) from {:?}",
        pipeline.name,
        pipeline.version,
        pipeline.regressor_kind(),
        path
    );
    Ok(pipeline)
}
