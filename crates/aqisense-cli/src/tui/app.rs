//! Application state for the TUI dashboard.

use std::time::{Duration, Instant};

use anyhow::Result;
use time::Date;
use tracing::debug;

use aqisense_core::{AqiModel, Prediction, Predictor, Submission};
use aqisense_store::{DEFAULT_EXPORT_FILENAME, HistoryStore, export_csv_file};
use aqisense_types::Measurement;

use crate::util::today;

/// How long status messages stay visible.
const STATUS_TTL: Duration = Duration::from_secs(5);

/// One adjustable numeric field on the input form.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    /// Increment for one Left/Right keypress.
    pub step: f64,
    pub value: f64,
    /// Decimal places shown for the value.
    pub precision: usize,
}

impl FormField {
    /// Adjust the value by `steps` increments, clamped to the field range.
    pub fn adjust(&mut self, steps: f64) {
        self.value = (self.value + steps * self.step).clamp(self.min, self.max);
    }
}

/// Number of measurement fields on the form.
pub const MEASUREMENT_FIELDS: usize = 10;
/// Index of the hour field.
pub const HOUR_FIELD: usize = MEASUREMENT_FIELDS;
/// Index of the date row (not a `FormField`, adjusted in whole days).
pub const DATE_FIELD: usize = MEASUREMENT_FIELDS + 1;
/// Total number of selectable form rows.
pub const FORM_ROWS: usize = DATE_FIELD + 1;

fn initial_fields() -> [FormField; MEASUREMENT_FIELDS + 1] {
    let defaults = Measurement::default();
    [
        FormField {
            label: "PM2.5",
            unit: "µg/m³",
            min: *Measurement::PM25_RANGE.start(),
            max: *Measurement::PM25_RANGE.end(),
            step: 0.5,
            value: defaults.pm25,
            precision: 1,
        },
        FormField {
            label: "PM10",
            unit: "µg/m³",
            min: *Measurement::PM10_RANGE.start(),
            max: *Measurement::PM10_RANGE.end(),
            step: 0.5,
            value: defaults.pm10,
            precision: 1,
        },
        FormField {
            label: "NO2",
            unit: "ppb",
            min: *Measurement::NO2_RANGE.start(),
            max: *Measurement::NO2_RANGE.end(),
            step: 1.0,
            value: defaults.no2,
            precision: 1,
        },
        FormField {
            label: "CO",
            unit: "ppm",
            min: *Measurement::CO_RANGE.start(),
            max: *Measurement::CO_RANGE.end(),
            step: 0.1,
            value: defaults.co,
            precision: 1,
        },
        FormField {
            label: "SO2",
            unit: "ppb",
            min: *Measurement::SO2_RANGE.start(),
            max: *Measurement::SO2_RANGE.end(),
            step: 1.0,
            value: defaults.so2,
            precision: 1,
        },
        FormField {
            label: "O3",
            unit: "ppb",
            min: *Measurement::O3_RANGE.start(),
            max: *Measurement::O3_RANGE.end(),
            step: 1.0,
            value: defaults.o3,
            precision: 1,
        },
        FormField {
            label: "Temperature",
            unit: "°C",
            min: *Measurement::TEMPERATURE_RANGE.start(),
            max: *Measurement::TEMPERATURE_RANGE.end(),
            step: 0.5,
            value: defaults.temperature,
            precision: 1,
        },
        FormField {
            label: "Humidity",
            unit: "%",
            min: *Measurement::HUMIDITY_RANGE.start(),
            max: *Measurement::HUMIDITY_RANGE.end(),
            step: 1.0,
            value: defaults.humidity,
            precision: 0,
        },
        FormField {
            label: "Wind speed",
            unit: "m/s",
            min: *Measurement::WIND_SPEED_RANGE.start(),
            max: *Measurement::WIND_SPEED_RANGE.end(),
            step: 0.1,
            value: defaults.wind_speed,
            precision: 1,
        },
        FormField {
            label: "Rainfall",
            unit: "mm",
            min: *Measurement::RAINFALL_RANGE.start(),
            max: *Measurement::RAINFALL_RANGE.end(),
            step: 0.5,
            value: defaults.rainfall,
            precision: 1,
        },
        FormField {
            label: "Hour",
            unit: "h",
            min: 0.0,
            max: 23.0,
            step: 1.0,
            value: 12.0,
            precision: 0,
        },
    ]
}

/// Application state for the interactive dashboard.
pub struct App {
    /// Measurement fields plus the hour field.
    pub fields: [FormField; MEASUREMENT_FIELDS + 1],
    /// Submission date, adjusted in whole days.
    pub date: Date,
    /// Currently selected form row (0..FORM_ROWS).
    pub selected: usize,
    /// Most recent prediction, if any.
    pub last_prediction: Option<Prediction>,
    /// All predictions from this session, in submission order.
    pub history: HistoryStore,
    /// Transient status message with its creation time.
    pub status: Option<(String, Instant)>,
    pub should_quit: bool,
    predictor: Predictor<AqiModel>,
}

impl App {
    pub fn new(model: AqiModel) -> Self {
        Self {
            fields: initial_fields(),
            date: today(),
            selected: 0,
            last_prediction: None,
            history: HistoryStore::new(),
            status: None,
            should_quit: false,
            predictor: Predictor::new(model),
        }
    }

    /// Move selection to the next form row, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FORM_ROWS;
    }

    /// Move selection to the previous form row, wrapping.
    pub fn select_previous(&mut self) {
        self.selected = (self.selected + FORM_ROWS - 1) % FORM_ROWS;
    }

    /// Adjust the selected row by `steps` increments (days for the date row).
    pub fn adjust_selected(&mut self, steps: f64) {
        if self.selected == DATE_FIELD {
            let days = steps as i64;
            if let Some(date) = self.date.checked_add(time::Duration::days(days)) {
                self.date = date;
            }
        } else {
            self.fields[self.selected].adjust(steps);
        }
    }

    /// Reset all fields to their defaults.
    pub fn reset(&mut self) {
        self.fields = initial_fields();
        self.date = today();
        self.set_status("Form reset to defaults");
    }

    /// The measurement described by the current field values.
    pub fn measurement(&self) -> Measurement {
        let f = &self.fields;
        Measurement {
            pm25: f[0].value,
            pm10: f[1].value,
            no2: f[2].value,
            co: f[3].value,
            so2: f[4].value,
            o3: f[5].value,
            temperature: f[6].value,
            humidity: f[7].value,
            wind_speed: f[8].value,
            rainfall: f[9].value,
        }
    }

    /// Hour of day from the hour field.
    pub fn hour(&self) -> u8 {
        self.fields[HOUR_FIELD].value as u8
    }

    /// Run the current form through the predictor and record the result.
    pub fn submit(&mut self) {
        let submission = Submission {
            measurement: self.measurement(),
            date: self.date,
            hour: self.hour(),
        };
        let prediction = self.predictor.predict(&submission);
        self.history.append(prediction.record);
        debug!(aqi = prediction.aqi, "Submission recorded");
        self.set_status(format!(
            "AQI {:.1} ({})",
            prediction.record.aqi,
            prediction.category.label()
        ));
        self.last_prediction = Some(prediction);
    }

    /// Export the session history to `historique_aqi.csv` in the working
    /// directory.
    pub fn export_history(&mut self) {
        if self.history.is_empty() {
            self.set_status("Nothing to export yet");
            return;
        }
        match self.try_export() {
            Ok(count) => {
                self.set_status(format!("Exported {count} records to {DEFAULT_EXPORT_FILENAME}"));
            }
            Err(e) => self.set_status(format!("Export failed: {e}")),
        }
    }

    fn try_export(&self) -> Result<usize> {
        export_csv_file(self.history.records(), DEFAULT_EXPORT_FILENAME)?;
        Ok(self.history.len())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been shown long enough.
    pub fn clean_expired_status(&mut self) {
        if let Some((_, created)) = &self.status
            && created.elapsed() > STATUS_TTL
        {
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AqiModel::demo())
    }

    #[test]
    fn test_initial_state_matches_defaults() {
        let app = app();
        assert_eq!(app.measurement(), Measurement::default());
        assert_eq!(app.hour(), 12);
        assert_eq!(app.selected, 0);
        assert!(app.history.is_empty());
        assert!(app.last_prediction.is_none());
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut app = app();
        app.select_previous();
        assert_eq!(app.selected, FORM_ROWS - 1);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_adjust_clamps_to_field_range() {
        let mut app = app();
        app.selected = 0; // PM2.5, step 0.5
        app.adjust_selected(-10_000.0);
        assert_eq!(app.fields[0].value, 0.0);
        app.adjust_selected(10_000_000.0);
        assert_eq!(app.fields[0].value, 500.0);
    }

    #[test]
    fn test_adjust_date_row_moves_by_days() {
        let mut app = app();
        app.selected = DATE_FIELD;
        let before = app.date;
        app.adjust_selected(7.0);
        assert_eq!(app.date, before.checked_add(time::Duration::days(7)).unwrap());
    }

    #[test]
    fn test_submit_appends_history_and_sets_status() {
        let mut app = app();
        app.submit();
        app.submit();
        assert_eq!(app.history.len(), 2);
        assert!(app.last_prediction.is_some());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app();
        app.selected = 3;
        app.adjust_selected(5.0);
        app.reset();
        assert_eq!(app.measurement(), Measurement::default());
    }

    #[test]
    fn test_export_empty_history_is_a_noop() {
        let mut app = app();
        app.export_history();
        let (message, _) = app.status.as_ref().unwrap();
        assert!(message.contains("Nothing to export"));
    }
}
