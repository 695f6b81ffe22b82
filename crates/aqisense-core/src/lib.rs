//! Core prediction logic for the AQI estimation toolkit.
//!
//! This crate turns raw environmental readings into a classified AQI
//! estimate:
//!
//! - **Feature encoding**: fixed 17-value positional layout the model expects
//! - **Model inference**: JSON artifacts (linear or tree forest), validated
//!   once at startup, infallible afterwards
//! - **Severity scale**: six tiers with inclusive upper bounds
//! - **Gauge description**: declarative spec consumed by any renderer
//!
//! # Quick Start
//!
//! ```
//! use aqisense_core::{AqiModel, Predictor, Submission};
//! use aqisense_types::Measurement;
//! use time::macros::date;
//!
//! let predictor = Predictor::new(AqiModel::demo());
//! let prediction = predictor.predict(&Submission {
//!     measurement: Measurement::default(),
//!     date: date!(2024 - 01 - 10),
//!     hour: 12,
//! });
//! println!("AQI {:.1} ({})", prediction.aqi, prediction.category);
//! ```

pub mod error;
pub mod features;
pub mod gauge;
pub mod model;
pub mod predictor;
pub mod scale;

pub use error::{Error, Result};
pub use features::{FEATURE_COUNT, FeatureVector};
pub use gauge::{AXIS_MAX, GaugeBand, GaugeSpec};
pub use model::{AqiModel, ModelArtifact, Regressor, Tree, TreeNode};
pub use predictor::{Prediction, Predictor, Submission};
pub use scale::{AqiScale, ScaleConfig, classify};

// Re-export from aqisense-types
pub use aqisense_types::{AqiCategory, Measurement, MeasurementBuilder, PredictionRecord};
