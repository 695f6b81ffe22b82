//! Pre-trained regression model loading and inference.
//!
//! The model is an opaque collaborator to the rest of the pipeline: it takes
//! one [`FeatureVector`] and returns one scalar AQI estimate. On disk it is a
//! JSON artifact, either a linear model or a forest of regression trees
//! (flat node arrays, scikit-learn export style).
//!
//! Loading is a startup-scoped operation: a missing, corrupt, or mis-shaped
//! artifact is a fatal error surfaced immediately, and a model that passes
//! validation can never fail at inference time (the typed feature vector
//! makes a shape mismatch unrepresentable).
//!
//! # Example
//!
//! ```
//! use aqisense_core::{AqiModel, FeatureVector, Regressor};
//! use aqisense_types::Measurement;
//! use time::macros::date;
//!
//! let model = AqiModel::demo();
//! let features = FeatureVector::build(&Measurement::default(), date!(2024 - 01 - 10), 12);
//! let aqi = model.predict(&features);
//! assert!(aqi.is_finite());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::features::{FEATURE_COUNT, FeatureVector};

/// A regression model that estimates AQI from a feature vector.
///
/// This is the seam between the pipeline and the model implementation, so
/// tests can substitute a stub that returns a fixed scalar.
pub trait Regressor {
    /// Estimate the AQI for one encoded submission.
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// One node of a regression tree, stored in a flat array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum TreeNode {
    /// Internal split: go left if `features[feature] <= threshold`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node holding the tree's prediction.
    Leaf { value: f64 },
}

/// A single regression tree as a flat node array rooted at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk from the root to a leaf for the given features.
    ///
    /// Assumes the tree has been validated: indices in range and children
    /// strictly after their parent, so the walk always terminates.
    fn evaluate(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Serialized form of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelArtifact {
    /// Linear regression: `intercept + coefficients · features`.
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
    /// Ensemble of regression trees averaged together.
    Forest { trees: Vec<Tree> },
}

/// A validated, ready-to-run AQI regression model.
#[derive(Debug, Clone)]
pub struct AqiModel {
    artifact: ModelArtifact,
}

impl AqiModel {
    /// Load and validate a model artifact from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelLoad`] if the file cannot be read,
    /// [`Error::ModelParse`] if it is not a valid artifact, or
    /// [`Error::ModelShape`] if it does not fit the 17-feature contract.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading model artifact from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| Error::ModelLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|source| Error::ModelParse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_artifact(artifact)
    }

    /// Validate an in-memory artifact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelShape`] if the artifact does not match the
    /// feature contract.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        match &artifact {
            ModelArtifact::Linear { coefficients, .. } => {
                if coefficients.len() != FEATURE_COUNT {
                    return Err(Error::ModelShape(format!(
                        "linear model has {} coefficients, expected {}",
                        coefficients.len(),
                        FEATURE_COUNT
                    )));
                }
                debug!("Validated linear model");
            }
            ModelArtifact::Forest { trees } => {
                if trees.is_empty() {
                    return Err(Error::ModelShape("forest has no trees".to_string()));
                }
                for (t, tree) in trees.iter().enumerate() {
                    validate_tree(t, tree)?;
                }
                debug!(trees = trees.len(), "Validated forest model");
            }
        }
        Ok(Self { artifact })
    }

    /// A small built-in linear model for demos and tests.
    ///
    /// Not a trained artifact; it weights pollutant readings in plausible
    /// proportions so the interactive surfaces have something to drive.
    #[must_use]
    pub fn demo() -> Self {
        let coefficients = vec![
            0.9,  // pm25
            0.25, // pm10
            0.12, // no2
            2.0,  // co
            0.08, // so2
            0.15, // o3
            0.3,  // temperature
            0.05, // humidity
            -1.2, // wind_speed
            -0.4, // rainfall
            0.0,  // year
            0.1,  // month
            0.0,  // day
            0.05, // hour
            0.0,  // day_of_week
            0.0,  // day_of_year
            1.5,  // is_weekend
        ];
        Self {
            artifact: ModelArtifact::Linear {
                intercept: 10.0,
                coefficients,
            },
        }
    }

    /// The underlying artifact (for inspection and re-serialization).
    #[must_use]
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// One-line description of the model's form.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.artifact {
            ModelArtifact::Linear { .. } => {
                format!("linear model ({} coefficients)", FEATURE_COUNT)
            }
            ModelArtifact::Forest { trees } => {
                let nodes: usize = trees.iter().map(|t| t.nodes.len()).sum();
                format!("forest model ({} trees, {} nodes)", trees.len(), nodes)
            }
        }
    }
}

impl Regressor for AqiModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let values = features.values();
        match &self.artifact {
            ModelArtifact::Linear {
                intercept,
                coefficients,
            } => {
                intercept
                    + coefficients
                        .iter()
                        .zip(values.iter())
                        .map(|(c, v)| c * v)
                        .sum::<f64>()
            }
            ModelArtifact::Forest { trees } => {
                let sum: f64 = trees.iter().map(|t| t.evaluate(values)).sum();
                sum / trees.len() as f64
            }
        }
    }
}

/// Check one tree against the feature contract.
///
/// Children must sit strictly after their parent in the node array, which
/// rules out cycles and guarantees evaluation terminates.
fn validate_tree(index: usize, tree: &Tree) -> Result<()> {
    if tree.nodes.is_empty() {
        return Err(Error::ModelShape(format!("tree {} has no nodes", index)));
    }
    for (n, node) in tree.nodes.iter().enumerate() {
        if let TreeNode::Split {
            feature,
            left,
            right,
            ..
        } = node
        {
            if *feature >= FEATURE_COUNT {
                return Err(Error::ModelShape(format!(
                    "tree {} node {} splits on feature {}, expected < {}",
                    index, n, feature, FEATURE_COUNT
                )));
            }
            if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                return Err(Error::ModelShape(format!(
                    "tree {} node {} references a child out of range",
                    index, n
                )));
            }
            if *left <= n || *right <= n {
                return Err(Error::ModelShape(format!(
                    "tree {} node {} references a child at or before itself",
                    index, n
                )));
            }
        }
    }
    Ok(())
}
