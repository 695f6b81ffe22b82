//! AQI severity scale and categorization.
//!
//! Maps a numeric AQI score onto one of six fixed severity tiers using
//! inclusive upper bounds. Categorization is total over every real input:
//! anything at or below 50 (including negative values) is `Good`, anything
//! above 300 is `Hazardous`, and boundary values belong to the lower tier.
//!
//! # Example
//!
//! ```
//! use aqisense_core::scale::{AqiScale, classify};
//! use aqisense_types::AqiCategory;
//!
//! assert_eq!(classify(42.0), AqiCategory::Good);
//!
//! let scale = AqiScale::default();
//! assert_eq!(scale.classify(180.0), AqiCategory::Unhealthy);
//! ```

use serde::{Deserialize, Serialize};

use aqisense_types::AqiCategory;

/// Configuration for the scale's inclusive upper bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Upper bound for Good.
    pub good_max: f64,
    /// Upper bound for Moderate.
    pub moderate_max: f64,
    /// Upper bound for Unhealthy-for-sensitive-groups.
    pub sensitive_max: f64,
    /// Upper bound for Unhealthy.
    pub unhealthy_max: f64,
    /// Upper bound for Very Unhealthy.
    pub very_unhealthy_max: f64,
    // Above very_unhealthy_max is Hazardous
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            good_max: 50.0,
            moderate_max: 100.0,
            sensitive_max: 150.0,
            unhealthy_max: 200.0,
            very_unhealthy_max: 300.0,
        }
    }
}

/// Severity evaluator for AQI scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct AqiScale {
    config: ScaleConfig,
}

impl AqiScale {
    /// Create a scale with the given bounds.
    pub fn new(config: ScaleConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Classify an AQI score into its severity category.
    ///
    /// Bounds are evaluated in ascending order and are inclusive: 50.0 is
    /// `Good`, 50.01 is `Moderate`. Every real input maps to exactly one
    /// tier. (NaN fails every comparison and lands in `Hazardous`.)
    #[must_use]
    pub fn classify(&self, aqi: f64) -> AqiCategory {
        if aqi <= self.config.good_max {
            AqiCategory::Good
        } else if aqi <= self.config.moderate_max {
            AqiCategory::Moderate
        } else if aqi <= self.config.sensitive_max {
            AqiCategory::UnhealthySensitive
        } else if aqi <= self.config.unhealthy_max {
            AqiCategory::Unhealthy
        } else if aqi <= self.config.very_unhealthy_max {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    /// The inclusive upper bound of a tier, or `None` for the open-ended top.
    #[must_use]
    pub fn upper_bound(&self, category: AqiCategory) -> Option<f64> {
        match category {
            AqiCategory::Good => Some(self.config.good_max),
            AqiCategory::Moderate => Some(self.config.moderate_max),
            AqiCategory::UnhealthySensitive => Some(self.config.sensitive_max),
            AqiCategory::Unhealthy => Some(self.config.unhealthy_max),
            AqiCategory::VeryUnhealthy => Some(self.config.very_unhealthy_max),
            AqiCategory::Hazardous => None,
        }
    }
}

/// Classify an AQI score against the standard bounds.
#[must_use]
pub fn classify(aqi: f64) -> AqiCategory {
    AqiScale::default().classify(aqi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_midpoints() {
        assert_eq!(classify(25.0), AqiCategory::Good);
        assert_eq!(classify(75.0), AqiCategory::Moderate);
        assert_eq!(classify(125.0), AqiCategory::UnhealthySensitive);
        assert_eq!(classify(175.0), AqiCategory::Unhealthy);
        assert_eq!(classify(250.0), AqiCategory::VeryUnhealthy);
        assert_eq!(classify(400.0), AqiCategory::Hazardous);
    }

    #[test]
    fn test_boundary_values_belong_to_lower_tier() {
        assert_eq!(classify(50.0), AqiCategory::Good);
        assert_eq!(classify(50.0001), AqiCategory::Moderate);
        assert_eq!(classify(100.0), AqiCategory::Moderate);
        assert_eq!(classify(150.0), AqiCategory::UnhealthySensitive);
        assert_eq!(classify(200.0), AqiCategory::Unhealthy);
        assert_eq!(classify(300.0), AqiCategory::VeryUnhealthy);
        assert_eq!(classify(300.0001), AqiCategory::Hazardous);
    }

    #[test]
    fn test_negative_and_zero_inputs() {
        assert_eq!(classify(-5.0), AqiCategory::Good);
        assert_eq!(classify(0.0), AqiCategory::Good);
        assert_eq!(classify(f64::NEG_INFINITY), AqiCategory::Good);
    }

    #[test]
    fn test_extreme_inputs() {
        assert_eq!(classify(f64::INFINITY), AqiCategory::Hazardous);
        assert_eq!(classify(1e12), AqiCategory::Hazardous);
    }

    #[test]
    fn test_nan_falls_through_to_hazardous() {
        assert_eq!(classify(f64::NAN), AqiCategory::Hazardous);
    }

    #[test]
    fn test_upper_bounds() {
        let scale = AqiScale::default();
        assert_eq!(scale.upper_bound(AqiCategory::Good), Some(50.0));
        assert_eq!(scale.upper_bound(AqiCategory::VeryUnhealthy), Some(300.0));
        assert_eq!(scale.upper_bound(AqiCategory::Hazardous), None);
    }

    #[test]
    fn test_custom_bounds() {
        let scale = AqiScale::new(ScaleConfig {
            good_max: 10.0,
            moderate_max: 20.0,
            sensitive_max: 30.0,
            unhealthy_max: 40.0,
            very_unhealthy_max: 50.0,
        });
        assert_eq!(scale.classify(15.0), AqiCategory::Moderate);
        assert_eq!(scale.classify(55.0), AqiCategory::Hazardous);
    }
}
