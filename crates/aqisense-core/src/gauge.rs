//! Declarative gauge description for AQI display.
//!
//! The pipeline does not render anything itself; it hands a [`GaugeSpec`] to
//! whichever surface is active (ratatui gauge, text bar). The spec carries
//! the value, a title, the category's bar color, the fixed [0, 500] axis,
//! and six colored bands.
//!
//! The band ranges ([51, 100] and so on) reproduce the original display's
//! stepped legend and are cosmetic only; classification always goes through
//! [`crate::scale`], never through these bands.

use aqisense_types::AqiCategory;

/// Upper end of the gauge axis.
pub const AXIS_MAX: f64 = 500.0;

/// One colored band on the gauge axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeBand {
    /// Lower edge of the band on the axis.
    pub lower: f64,
    /// Upper edge of the band on the axis.
    pub upper: f64,
    /// Category the band depicts (for its color and label).
    pub category: AqiCategory,
}

/// The six display bands in ascending order.
#[must_use]
pub fn bands() -> [GaugeBand; 6] {
    [
        GaugeBand {
            lower: 0.0,
            upper: 50.0,
            category: AqiCategory::Good,
        },
        GaugeBand {
            lower: 51.0,
            upper: 100.0,
            category: AqiCategory::Moderate,
        },
        GaugeBand {
            lower: 101.0,
            upper: 150.0,
            category: AqiCategory::UnhealthySensitive,
        },
        GaugeBand {
            lower: 151.0,
            upper: 200.0,
            category: AqiCategory::Unhealthy,
        },
        GaugeBand {
            lower: 201.0,
            upper: 300.0,
            category: AqiCategory::VeryUnhealthy,
        },
        GaugeBand {
            lower: 301.0,
            upper: AXIS_MAX,
            category: AqiCategory::Hazardous,
        },
    ]
}

/// Declarative description of one gauge rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    /// The AQI value the needle points at (unrounded).
    pub value: f64,
    /// Gauge title, e.g. `AQI - Moyenne`.
    pub title: String,
    /// Hex color for the value bar, taken from the category.
    pub bar_color: &'static str,
    /// Upper end of the axis (lower end is 0).
    pub axis_max: f64,
    /// Colored background bands.
    pub bands: [GaugeBand; 6],
}

impl GaugeSpec {
    /// Describe a gauge for one prediction.
    #[must_use]
    pub fn new(aqi: f64, category: AqiCategory) -> Self {
        Self {
            value: aqi,
            title: format!("AQI - {}", category.label()),
            bar_color: category.color_hex(),
            axis_max: AXIS_MAX,
            bands: bands(),
        }
    }

    /// Fraction of the axis the value covers, clamped to [0, 1].
    ///
    /// Renderers that fill a bar (ratatui's gauge wants a ratio) use this;
    /// values beyond the axis pin the bar at full.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        (self.value / self.axis_max).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_for_prediction() {
        let spec = GaugeSpec::new(87.6, AqiCategory::Moderate);
        assert_eq!(spec.title, "AQI - Moyenne");
        assert_eq!(spec.bar_color, "#FFDE33");
        assert_eq!(spec.axis_max, 500.0);
        assert_eq!(spec.value, 87.6);
    }

    #[test]
    fn test_bands_cover_axis_in_order() {
        let bands = bands();
        assert_eq!(bands[0].lower, 0.0);
        assert_eq!(bands[5].upper, AXIS_MAX);
        for pair in bands.windows(2) {
            assert!(pair[0].upper < pair[1].lower + 1.5);
            assert!(pair[0].category < pair[1].category);
        }
    }

    #[test]
    fn test_fill_ratio_clamps() {
        assert_eq!(GaugeSpec::new(250.0, AqiCategory::VeryUnhealthy).fill_ratio(), 0.5);
        assert_eq!(GaugeSpec::new(900.0, AqiCategory::Hazardous).fill_ratio(), 1.0);
        assert_eq!(GaugeSpec::new(-10.0, AqiCategory::Good).fill_ratio(), 0.0);
    }
}
