//! Error types for aqisense-store.

/// Result type for aqisense-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in aqisense-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSV writer error during export.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Date formatting failed while exporting a record.
    #[error("Date format error: {0}")]
    DateFormat(#[from] time::error::Format),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
