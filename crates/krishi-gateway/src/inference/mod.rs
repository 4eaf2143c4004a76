//! Crop classifier inference adapter.
//!
//! The trained pipeline is consumed as an opaque scoring function: loaded
//! once at process start from a pair of JSON artifacts and shared read-only
//! for the process lifetime. Request code never re-loads or mutates it.
//!
//! Artifact layout under the model directory:
//!
//! | File | Contents |
//! |------|----------|
//! | `crop_pipeline.json` | standard-scaler parameters, per-class coefficient rows, intercepts, season category list |
//! | `label_encoder.json` | ordered class list (the label set) |
//!
//! A missing or malformed artifact leaves the process up: the recommend
//! endpoint answers with a `MODEL_NOT_LOADED` error until an operator fixes
//! the artifact path, while the other endpoints stay functional.

use krishi_core::{FeatureVector, LabelSet, Season};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const PIPELINE_FILE: &str = "crop_pipeline.json";
const LABEL_ENCODER_FILE: &str = "label_encoder.json";

/// Failures while loading the model artifacts. All of them degrade the
/// service to a per-request `ModelNotLoaded` state, never a crash.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("inconsistent artifact shape: {0}")]
    Shape(String),
}

/// Serialized scoring pipeline: a standard scaler over the numeric
/// features followed by a multinomial linear model over
/// [numeric features | one-hot season].
#[derive(Debug, Deserialize)]
pub struct PipelineArtifact {
    pub feature_means: Vec<f64>,
    pub feature_stds: Vec<f64>,
    pub season_categories: Vec<String>,
    /// One row per class, width = numeric features + season categories.
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Serialized label encoder: ordered class list with a stable index↔label
/// mapping.
#[derive(Debug, Deserialize)]
pub struct LabelEncoderArtifact {
    pub classes: Vec<String>,
}

/// The loaded, validated scoring pipeline. Immutable after construction;
/// safe for concurrent reads from all in-flight requests.
#[derive(Debug)]
pub struct LoadedModel {
    feature_means: Vec<f64>,
    feature_stds: Vec<f64>,
    season_categories: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    labels: LabelSet,
}

impl LoadedModel {
    /// Load and validate both artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let pipeline: PipelineArtifact = read_artifact(&dir.join(PIPELINE_FILE))?;
        let encoder: LabelEncoderArtifact = read_artifact(&dir.join(LABEL_ENCODER_FILE))?;
        let model = Self::from_artifacts(pipeline, encoder)?;
        info!(
            classes = model.labels.len(),
            dir = %dir.display(),
            "model pipeline and label encoder loaded"
        );
        Ok(model)
    }

    /// Validate artifact dimensions and assemble the scoring handle.
    pub fn from_artifacts(
        pipeline: PipelineArtifact,
        encoder: LabelEncoderArtifact,
    ) -> Result<Self, ModelError> {
        let numeric = FeatureVector::NUMERIC_FIELDS;
        if pipeline.feature_means.len() != numeric || pipeline.feature_stds.len() != numeric {
            return Err(ModelError::Shape(format!(
                "scaler expects {numeric} numeric features, got means={} stds={}",
                pipeline.feature_means.len(),
                pipeline.feature_stds.len()
            )));
        }
        if pipeline.feature_stds.iter().any(|s| *s == 0.0) {
            return Err(ModelError::Shape("scaler std of zero".to_string()));
        }

        let n_classes = encoder.classes.len();
        if n_classes == 0 {
            return Err(ModelError::Shape("empty label set".to_string()));
        }
        if pipeline.coefficients.len() != n_classes || pipeline.intercepts.len() != n_classes {
            return Err(ModelError::Shape(format!(
                "{} classes but {} coefficient rows / {} intercepts",
                n_classes,
                pipeline.coefficients.len(),
                pipeline.intercepts.len()
            )));
        }

        let width = numeric + pipeline.season_categories.len();
        if let Some(row) = pipeline.coefficients.iter().find(|r| r.len() != width) {
            return Err(ModelError::Shape(format!(
                "coefficient row of width {} (expected {width})",
                row.len()
            )));
        }

        for season in Season::ALL {
            if !pipeline.season_categories.iter().any(|c| c == season.as_str()) {
                return Err(ModelError::Shape(format!(
                    "season category '{season}' missing from pipeline"
                )));
            }
        }

        Ok(Self {
            feature_means: pipeline.feature_means,
            feature_stds: pipeline.feature_stds,
            season_categories: pipeline.season_categories,
            coefficients: pipeline.coefficients,
            intercepts: pipeline.intercepts,
            labels: LabelSet::new(encoder.classes),
        })
    }

    /// The classifier's fixed label set.
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Score a feature vector into a probability distribution over the
    /// label set. Side-effect free; one entry per label, each in [0, 1],
    /// summing to ≈1.
    pub fn score(&self, features: &FeatureVector) -> Vec<f64> {
        let encoded = self.encode(features);
        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(&encoded).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect();
        softmax(&logits)
    }

    /// Standardize the numeric features and append the one-hot season.
    fn encode(&self, features: &FeatureVector) -> Vec<f64> {
        let mut encoded: Vec<f64> = features
            .numeric_values()
            .iter()
            .zip(self.feature_means.iter().zip(&self.feature_stds))
            .map(|(x, (mean, std))| (x - mean) / std)
            .collect();
        // Category presence was validated at load time.
        for category in &self.season_categories {
            encoded.push(if category == features.season.as_str() {
                1.0
            } else {
                0.0
            });
        }
        encoded
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| ModelError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
