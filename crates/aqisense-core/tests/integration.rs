//! Integration tests for the prediction pipeline.
//!
//! These run the full encode -> infer -> classify flow with both the
//! built-in demo model and stub regressors, and property-check the
//! severity scale.

use aqisense_core::{
    AqiCategory, AqiModel, FeatureVector, Measurement, Prediction, Predictor, Regressor,
    Submission, classify,
};
use time::macros::date;

/// Stub regressor returning a fixed scalar.
struct Fixed(f64);

impl Regressor for Fixed {
    fn predict(&self, _features: &FeatureVector) -> f64 {
        self.0
    }
}

fn default_submission() -> Submission {
    Submission {
        measurement: Measurement::default(),
        date: date!(2024 - 01 - 10),
        hour: 12,
    }
}

#[test]
fn default_submission_produces_documented_vector() {
    let features = default_submission().features();
    let expected = [
        25.0, 35.0, 30.0, 1.0, 20.0, 30.0, 24.0, 50.0, 3.0, 0.0, 2024.0, 1.0, 10.0, 12.0, 2.0,
        10.0, 0.0,
    ];
    assert_eq!(features.as_slice(), &expected);
}

#[test]
fn pipeline_category_matches_scale_for_any_model_output() {
    for aqi in [-20.0, 0.0, 49.9, 50.0, 50.0001, 175.0, 300.0, 300.0001, 1e6] {
        let prediction: Prediction = Predictor::new(Fixed(aqi)).predict(&default_submission());
        assert_eq!(prediction.category, classify(aqi));
        assert_eq!(prediction.aqi, aqi);
    }
}

#[test]
fn demo_model_runs_end_to_end() {
    let predictor = Predictor::new(AqiModel::demo());
    let prediction = predictor.predict(&default_submission());

    assert!(prediction.aqi.is_finite());
    assert_eq!(prediction.category, classify(prediction.aqi));

    let gauge = prediction.gauge();
    assert!(gauge.title.starts_with("AQI - "));
    assert_eq!(gauge.axis_max, 500.0);
}

#[test]
fn higher_pollution_never_lowers_demo_estimate() {
    // The demo model weights every pollutant positively.
    let predictor = Predictor::new(AqiModel::demo());
    let clean = predictor.predict(&default_submission());

    let mut polluted = default_submission();
    polluted.measurement.pm25 = 400.0;
    polluted.measurement.no2 = 600.0;
    let dirty = predictor.predict(&polluted);

    assert!(dirty.aqi > clean.aqi);
    assert!(dirty.category >= clean.category);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every finite input maps to exactly one tier.
        #[test]
        fn classify_is_total(aqi in -1e9f64..1e9) {
            let category = classify(aqi);
            prop_assert!(AqiCategory::ALL.contains(&category));
        }

        /// Severity is monotonic non-decreasing in the score.
        #[test]
        fn classify_is_monotonic(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(lo) <= classify(hi));
        }

        /// Scores at or below 50 are always Good.
        #[test]
        fn low_scores_are_good(aqi in -1e6f64..=50.0) {
            prop_assert_eq!(classify(aqi), AqiCategory::Good);
        }
    }
}
