// Scoring pipeline backed by the model artifact
pub mod ml;

// Feature derivation + scoring as one fallible step
pub mod prediction_service;
