//! Error types for the estimation engine

use std::fmt;

/// Errors that can occur while loading artifacts or producing an estimate
#[derive(Debug, Clone)]
pub enum EstimatorError {
    /// Invalid request parameters (out-of-bounds or non-finite inputs)
    InvalidInput(String),

    /// Catalog artifact could not be read or parsed
    DataError(String),

    /// Model artifact could not be read or parsed
    ModelError(String),

    /// Model artifact feature schema diverges from the engine's fixed row schema
    SchemaMismatch(String),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            EstimatorError::DataError(msg) => write!(f, "Catalog error: {}", msg),
            EstimatorError::ModelError(msg) => write!(f, "Model error: {}", msg),
            EstimatorError::SchemaMismatch(msg) => write!(f, "Schema mismatch: {}", msg),
        }
    }
}

impl std::error::Error for EstimatorError {}
