//! Error types for aqisense-core.

use std::path::PathBuf;

/// Result type for aqisense-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in aqisense-core.
///
/// All variants are model-artifact failures surfaced at startup; once a
/// model is loaded and validated, the prediction pipeline is infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the model artifact from disk.
    #[error("Failed to read model artifact {path}: {source}")]
    ModelLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The model artifact was not valid JSON for the expected format.
    #[error("Failed to parse model artifact {path}: {source}")]
    ModelParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The model artifact parsed but does not fit the feature contract.
    #[error("Invalid model shape: {0}")]
    ModelShape(String),
}
