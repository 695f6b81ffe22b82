//! Core types for AQI prediction data.

use core::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// AQI severity category.
///
/// Six fixed tiers, each defined by an inclusive upper bound on the numeric
/// AQI score (see `aqisense-core`'s scale module for the bounds themselves).
///
/// # Ordering
///
/// Categories are ordered by severity: `Good < Moderate < ... < Hazardous`.
/// This allows threshold comparisons like `if category >= AqiCategory::Unhealthy`.
///
/// # Display
///
/// `Display` returns the French label used by the interactive surface and the
/// CSV export ("Bonne", "Moyenne", ...), while serde serialization uses the
/// variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AqiCategory {
    /// AQI <= 50.
    Good = 0,
    /// AQI <= 100.
    Moderate = 1,
    /// AQI <= 150.
    UnhealthySensitive = 2,
    /// AQI <= 200.
    Unhealthy = 3,
    /// AQI <= 300.
    VeryUnhealthy = 4,
    /// AQI > 300.
    Hazardous = 5,
}

impl AqiCategory {
    /// All categories in ascending severity order.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthySensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Display label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Bonne",
            AqiCategory::Moderate => "Moyenne",
            AqiCategory::UnhealthySensitive => "Mauvaise pour les sensibles",
            AqiCategory::Unhealthy => "Mauvaise",
            AqiCategory::VeryUnhealthy => "Très mauvaise",
            AqiCategory::Hazardous => "Dangereuse",
        }
    }

    /// Display color as a `#RRGGBB` hex string.
    #[must_use]
    pub fn color_hex(&self) -> &'static str {
        match self {
            AqiCategory::Good => "#009966",
            AqiCategory::Moderate => "#FFDE33",
            AqiCategory::UnhealthySensitive => "#FF9933",
            AqiCategory::Unhealthy => "#CC0033",
            AqiCategory::VeryUnhealthy => "#660099",
            AqiCategory::Hazardous => "#7E0023",
        }
    }

    /// Display color as an (r, g, b) triple for truecolor terminals.
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            AqiCategory::Good => (0x00, 0x99, 0x66),
            AqiCategory::Moderate => (0xFF, 0xDE, 0x33),
            AqiCategory::UnhealthySensitive => (0xFF, 0x99, 0x33),
            AqiCategory::Unhealthy => (0xCC, 0x00, 0x33),
            AqiCategory::VeryUnhealthy => (0x66, 0x00, 0x99),
            AqiCategory::Hazardous => (0x7E, 0x00, 0x23),
        }
    }

    /// Get a human-readable description of the category.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good - air quality is satisfactory",
            AqiCategory::Moderate => "Moderate - acceptable air quality",
            AqiCategory::UnhealthySensitive => "Unhealthy for sensitive groups",
            AqiCategory::Unhealthy => "Unhealthy - everyone may be affected",
            AqiCategory::VeryUnhealthy => "Very unhealthy - health alert",
            AqiCategory::Hazardous => "Hazardous - emergency conditions",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AqiCategory {
    type Err = ParseError;

    /// Parse a category from its display label.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqisense_types::AqiCategory;
    ///
    /// assert_eq!("Bonne".parse::<AqiCategory>().unwrap(), AqiCategory::Good);
    /// assert!("Excellent".parse::<AqiCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AqiCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Raw environmental readings for one submission.
///
/// Each field is independently bounded by the ranges enforced at the
/// input-collection layer (sliders, clap value parsers, `try_build`); the
/// struct itself carries whatever values it is given. Defaults match the
/// interactive form's slider defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// PM2.5 concentration in µg/m³.
    pub pm25: f64,
    /// PM10 concentration in µg/m³.
    pub pm10: f64,
    /// NO2 concentration in ppb.
    pub no2: f64,
    /// CO concentration in ppm.
    pub co: f64,
    /// SO2 concentration in ppb.
    pub so2: f64,
    /// O3 concentration in ppb.
    pub o3: f64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity percentage (0-100).
    pub humidity: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Rainfall in mm.
    pub rainfall: f64,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            pm25: 25.0,
            pm10: 35.0,
            no2: 30.0,
            co: 1.0,
            so2: 20.0,
            o3: 30.0,
            temperature: 24.0,
            humidity: 50.0,
            wind_speed: 3.0,
            rainfall: 0.0,
        }
    }
}

impl Measurement {
    /// Valid range for PM2.5 (µg/m³).
    pub const PM25_RANGE: RangeInclusive<f64> = 0.0..=500.0;
    /// Valid range for PM10 (µg/m³).
    pub const PM10_RANGE: RangeInclusive<f64> = 0.0..=500.0;
    /// Valid range for NO2 (ppb).
    pub const NO2_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
    /// Valid range for CO (ppm).
    pub const CO_RANGE: RangeInclusive<f64> = 0.0..=50.0;
    /// Valid range for SO2 (ppb).
    pub const SO2_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
    /// Valid range for O3 (ppb).
    pub const O3_RANGE: RangeInclusive<f64> = 0.0..=300.0;
    /// Valid range for temperature (°C).
    pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -20.0..=50.0;
    /// Valid range for relative humidity (%).
    pub const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;
    /// Valid range for wind speed (m/s).
    pub const WIND_SPEED_RANGE: RangeInclusive<f64> = 0.0..=20.0;
    /// Valid range for rainfall (mm).
    pub const RAINFALL_RANGE: RangeInclusive<f64> = 0.0..=100.0;

    /// Create a builder for constructing `Measurement` with optional fields.
    pub fn builder() -> MeasurementBuilder {
        MeasurementBuilder::default()
    }
}

/// Builder for constructing `Measurement` starting from the form defaults.
///
/// Use [`build`](Self::build) for unchecked construction, or
/// [`try_build`](Self::try_build) to validate every field against its
/// documented range.
#[derive(Debug, Default)]
#[must_use]
pub struct MeasurementBuilder {
    measurement: Measurement,
}

impl MeasurementBuilder {
    /// Set PM2.5 concentration.
    pub fn pm25(mut self, pm25: f64) -> Self {
        self.measurement.pm25 = pm25;
        self
    }

    /// Set PM10 concentration.
    pub fn pm10(mut self, pm10: f64) -> Self {
        self.measurement.pm10 = pm10;
        self
    }

    /// Set NO2 concentration.
    pub fn no2(mut self, no2: f64) -> Self {
        self.measurement.no2 = no2;
        self
    }

    /// Set CO concentration.
    pub fn co(mut self, co: f64) -> Self {
        self.measurement.co = co;
        self
    }

    /// Set SO2 concentration.
    pub fn so2(mut self, so2: f64) -> Self {
        self.measurement.so2 = so2;
        self
    }

    /// Set O3 concentration.
    pub fn o3(mut self, o3: f64) -> Self {
        self.measurement.o3 = o3;
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.measurement.temperature = temperature;
        self
    }

    /// Set relative humidity.
    pub fn humidity(mut self, humidity: f64) -> Self {
        self.measurement.humidity = humidity;
        self
    }

    /// Set wind speed.
    pub fn wind_speed(mut self, wind_speed: f64) -> Self {
        self.measurement.wind_speed = wind_speed;
        self
    }

    /// Set rainfall.
    pub fn rainfall(mut self, rainfall: f64) -> Self {
        self.measurement.rainfall = rainfall;
        self
    }

    /// Build the `Measurement` without validation.
    #[must_use]
    pub fn build(self) -> Measurement {
        self.measurement
    }

    /// Build the `Measurement` with range validation.
    ///
    /// This is the input-collection layer's check; the prediction pipeline
    /// itself never validates.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] naming the first field outside
    /// its range.
    pub fn try_build(self) -> Result<Measurement, ParseError> {
        let m = &self.measurement;
        let checks: [(&str, f64, &RangeInclusive<f64>); 10] = [
            ("pm25", m.pm25, &Measurement::PM25_RANGE),
            ("pm10", m.pm10, &Measurement::PM10_RANGE),
            ("no2", m.no2, &Measurement::NO2_RANGE),
            ("co", m.co, &Measurement::CO_RANGE),
            ("so2", m.so2, &Measurement::SO2_RANGE),
            ("o3", m.o3, &Measurement::O3_RANGE),
            ("temperature", m.temperature, &Measurement::TEMPERATURE_RANGE),
            ("humidity", m.humidity, &Measurement::HUMIDITY_RANGE),
            ("wind_speed", m.wind_speed, &Measurement::WIND_SPEED_RANGE),
            ("rainfall", m.rainfall, &Measurement::RAINFALL_RANGE),
        ];

        for (name, value, range) in checks {
            if !range.contains(&value) {
                return Err(ParseError::InvalidValue(format!(
                    "{} = {} is outside valid range ({} to {})",
                    name,
                    value,
                    range.start(),
                    range.end()
                )));
            }
        }

        Ok(self.measurement)
    }
}

/// One entry in the session prediction history.
///
/// Immutable once created: (date, hour, AQI rounded to one decimal, category).
/// Created once per successful submission, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PredictionRecord {
    /// Calendar date of the submission.
    pub date: time::Date,
    /// Hour of day (0-23).
    pub hour: u8,
    /// Predicted AQI, rounded to one decimal place.
    pub aqi: f64,
    /// Severity category for the predicted AQI.
    pub category: AqiCategory,
}

impl PredictionRecord {
    /// Create a record, rounding the raw AQI to one decimal place.
    #[must_use]
    pub fn new(date: time::Date, hour: u8, aqi: f64, category: AqiCategory) -> Self {
        Self {
            date,
            hour,
            aqi: (aqi * 10.0).round() / 10.0,
            category,
        }
    }
}
