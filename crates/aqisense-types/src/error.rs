//! Error types for data validation in aqisense-types.

use thiserror::Error;

/// Errors that can occur when constructing or parsing AQI data.
///
/// This error type is UI-agnostic: it covers range validation performed by
/// the input-collection layer and label parsing, not model or I/O failures
/// (those belong in aqisense-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A field value was outside its documented range.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A string did not match any known category label.
    #[error("Unknown category label: {0}")]
    UnknownCategory(String),
}

/// Result type alias using aqisense-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
