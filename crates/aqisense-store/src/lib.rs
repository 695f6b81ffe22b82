//! Session history for AQI predictions.
//!
//! This crate holds the session-scoped record of past predictions and its
//! export surface:
//!
//! - Append-only in-memory history, one record per successful submission
//! - Ordered snapshots for table display
//! - CSV export (`Date,Heure,AQI,Qualité`) as a downloadable artifact
//!
//! History is deliberately not persisted: it is created with the session
//! and destroyed with it.
//!
//! # Example
//!
//! ```
//! use aqisense_store::{HistoryStore, export_csv_string};
//! use aqisense_types::{AqiCategory, PredictionRecord};
//! use time::macros::date;
//!
//! let mut history = HistoryStore::new();
//! history.append(PredictionRecord::new(
//!     date!(2024 - 01 - 10), 12, 87.6, AqiCategory::Moderate,
//! ));
//! let csv = export_csv_string(history.records())?;
//! assert!(csv.starts_with("Date,Heure,AQI,Qualité"));
//! # Ok::<(), aqisense_store::Error>(())
//! ```

mod error;
mod export;
mod history;

pub use error::{Error, Result};
pub use export::{DEFAULT_EXPORT_FILENAME, export_csv, export_csv_file, export_csv_string};
pub use history::HistoryStore;
