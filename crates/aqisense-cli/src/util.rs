use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Write output to a file or stdout.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            tracing::info!("Output written to {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("Invalid date '{s}', expected YYYY-MM-DD"))
}

/// Today's date in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
