//! Classifier feature assembly.
//!
//! The trained pipeline was fit on a fixed-shape input; this module is the
//! one place that shape is defined. Missing numeric signals are a hard
//! error, never defaulted — a null rainfall must surface as
//! [`CoreError::IncompleteFeatures`] so the caller can report which
//! upstream signal failed, instead of feeding the model a silent zero.

use crate::error::{CoreError, CoreResult};
use crate::season::Season;
use serde::{Deserialize, Serialize};

/// The fixed-shape input the classifier expects.
///
/// Units match the reference store: temperature in °C, rainfall in mm,
/// N/P/K/pH in the raw units the soil table carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
    pub season: Season,
}

impl FeatureVector {
    /// Number of numeric features, in the order of [`numeric_values`](Self::numeric_values).
    pub const NUMERIC_FIELDS: usize = 6;

    /// Assemble a feature vector from nullable upstream signals.
    ///
    /// Fails with [`CoreError::IncompleteFeatures`] naming the first absent
    /// field. Field order here is the order the pipeline was fit on.
    pub fn assemble(
        n: Option<f64>,
        p: Option<f64>,
        k: Option<f64>,
        ph: Option<f64>,
        rainfall_mm: Option<f64>,
        temperature_c: Option<f64>,
        season: Season,
    ) -> CoreResult<Self> {
        Ok(Self {
            n: require(n, "N")?,
            p: require(p, "P")?,
            k: require(k, "K")?,
            ph: require(ph, "pH")?,
            rainfall_mm: require(rainfall_mm, "rainfall")?,
            temperature_c: require(temperature_c, "temperature")?,
            season,
        })
    }

    /// Numeric features in pipeline order: N, P, K, pH, rainfall, temperature.
    pub fn numeric_values(&self) -> [f64; Self::NUMERIC_FIELDS] {
        [
            self.n,
            self.p,
            self.k,
            self.ph,
            self.rainfall_mm,
            self.temperature_c,
        ]
    }
}

fn require(value: Option<f64>, field: &'static str) -> CoreResult<f64> {
    value.ok_or(CoreError::IncompleteFeatures { field })
}
