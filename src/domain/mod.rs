// Sales prediction domain: requests, feature records, model output
pub mod sales;

// Feature column contract with the training side
pub mod ml;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
