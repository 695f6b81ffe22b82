//! Feature vector encoding for the prediction model.
//!
//! The model consumes a fixed-order vector of 17 values: the ten raw
//! readings followed by seven calendar-derived features. The order is part
//! of the model contract; a trained artifact is only meaningful against
//! this exact positional layout.

use time::Date;

use aqisense_types::Measurement;

/// Number of features the prediction model expects.
pub const FEATURE_COUNT: usize = 17;

/// A fixed-order numeric encoding of one submission.
///
/// Layout: pm25, pm10, no2, co, so2, o3, temperature, humidity, wind_speed,
/// rainfall, year, month, day, hour, day_of_week (0=Monday), day_of_year
/// (1-based), is_weekend (1 iff Saturday or Sunday).
///
/// The builder performs no validation or clamping; out-of-range readings
/// pass through untouched. Range enforcement belongs to the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Encode a measurement plus calendar context into the model's layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqisense_core::FeatureVector;
    /// use aqisense_types::Measurement;
    /// use time::macros::date;
    ///
    /// let v = FeatureVector::build(&Measurement::default(), date!(2024 - 01 - 10), 12);
    /// assert_eq!(v.as_slice()[0], 25.0); // pm25
    /// assert_eq!(v.as_slice()[14], 2.0); // Wednesday
    /// ```
    #[must_use]
    pub fn build(measurement: &Measurement, date: Date, hour: u8) -> Self {
        let day_of_week = date.weekday().number_days_from_monday();
        let is_weekend = if day_of_week >= 5 { 1.0 } else { 0.0 };

        Self([
            measurement.pm25,
            measurement.pm10,
            measurement.no2,
            measurement.co,
            measurement.so2,
            measurement.o3,
            measurement.temperature,
            measurement.humidity,
            measurement.wind_speed,
            measurement.rainfall,
            f64::from(date.year()),
            f64::from(u8::from(date.month())),
            f64::from(date.day()),
            f64::from(hour),
            f64::from(day_of_week),
            f64::from(date.ordinal()),
            is_weekend,
        ])
    }

    /// The encoded values in model order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The encoded values as the fixed-size array.
    #[must_use]
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}
