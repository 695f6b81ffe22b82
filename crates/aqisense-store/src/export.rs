//! CSV export of the session history.
//!
//! The export surface is a UTF-8 delimited table with the columns
//! `Date,Heure,AQI,Qualité`, offered for download under a fixed filename.

use std::io::Write;
use std::path::Path;

use tracing::info;

use aqisense_types::PredictionRecord;

use crate::error::Result;

/// Fixed filename for the downloadable history artifact.
pub const DEFAULT_EXPORT_FILENAME: &str = "historique_aqi.csv";

/// Write the history as CSV to any writer.
///
/// AQI values are written with one decimal, matching the stored rounding.
///
/// # Errors
///
/// Returns an error if the writer fails or a date cannot be formatted.
pub fn export_csv<W: Write>(records: &[PredictionRecord], writer: W) -> Result<()> {
    let date_format = time::macros::format_description!("[year]-[month]-[day]");

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Date", "Heure", "AQI", "Qualité"])?;

    for record in records {
        csv_writer.write_record([
            record.date.format(&date_format)?,
            record.hour.to_string(),
            format!("{:.1}", record.aqi),
            record.category.label().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render the history as a CSV string.
///
/// # Errors
///
/// Returns an error if a date cannot be formatted.
pub fn export_csv_string(records: &[PredictionRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    export_csv(records, &mut buffer)?;
    // The writer only ever emits UTF-8.
    Ok(String::from_utf8(buffer).expect("CSV output is UTF-8"))
}

/// Write the history CSV to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_csv_file<P: AsRef<Path>>(records: &[PredictionRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    export_csv(records, file)?;
    info!(records = records.len(), "History exported to {}", path.display());
    Ok(())
}
