//! The prediction pipeline: encode, infer, classify.
//!
//! One submission is fully processed before the next is accepted. The
//! pipeline is synchronous and owns the loaded model for the process
//! lifetime; the session history store stays with the caller, which appends
//! the produced record only after a successful prediction.

use time::Date;
use tracing::debug;

use aqisense_types::{Measurement, PredictionRecord};

use crate::features::FeatureVector;
use crate::gauge::GaugeSpec;
use crate::model::Regressor;
use crate::scale::AqiScale;

/// One form submission: the raw readings plus calendar context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub measurement: Measurement,
    pub date: Date,
    /// Hour of day (0-23).
    pub hour: u8,
}

impl Submission {
    /// Encode this submission in the model's feature layout.
    #[must_use]
    pub fn features(&self) -> FeatureVector {
        FeatureVector::build(&self.measurement, self.date, self.hour)
    }
}

/// Result of running one submission through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Unrounded model output.
    pub aqi: f64,
    /// Severity category for the output.
    pub category: aqisense_types::AqiCategory,
    /// The history record for this submission (AQI rounded to one decimal).
    pub record: PredictionRecord,
}

impl Prediction {
    /// Describe the gauge for this prediction.
    #[must_use]
    pub fn gauge(&self) -> GaugeSpec {
        GaugeSpec::new(self.aqi, self.category)
    }
}

/// Runs submissions through a loaded model and the severity scale.
#[derive(Debug, Clone)]
pub struct Predictor<R: Regressor> {
    model: R,
    scale: AqiScale,
}

impl<R: Regressor> Predictor<R> {
    /// Create a predictor around a loaded model with the standard scale.
    pub fn new(model: R) -> Self {
        Self {
            model,
            scale: AqiScale::default(),
        }
    }

    /// The severity scale in use.
    pub fn scale(&self) -> &AqiScale {
        &self.scale
    }

    /// Run one submission: encode, infer, classify.
    #[must_use]
    pub fn predict(&self, submission: &Submission) -> Prediction {
        let features = submission.features();
        let aqi = self.model.predict(&features);
        let category = self.scale.classify(aqi);
        debug!(aqi, %category, "Prediction complete");

        Prediction {
            aqi,
            category,
            record: PredictionRecord::new(submission.date, submission.hour, aqi, category),
        }
    }
}
