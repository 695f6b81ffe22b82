//! Platform-agnostic types for AQI prediction.
//!
//! This crate provides the shared data model used by the prediction core,
//! the session history store, and the interactive surfaces.
//!
//! # Features
//!
//! - Raw measurement readings with per-field ranges and form defaults
//! - The six-tier AQI severity category with labels and display colors
//! - The immutable per-submission prediction record
//! - Error types for input validation
//!
//! # Example
//!
//! ```
//! use aqisense_types::{AqiCategory, Measurement};
//!
//! let m = Measurement::builder().pm25(80.0).try_build().unwrap();
//! assert_eq!(m.pm10, 35.0); // unset fields keep the form defaults
//! assert_eq!(AqiCategory::Good.label(), "Bonne");
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{AqiCategory, Measurement, MeasurementBuilder, PredictionRecord};
