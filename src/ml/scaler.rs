//! Feature scalers
//!
//! Parameters come from the scaler artifact; the transform itself lives on
//! [`FeatureVector`].

use serde::{Deserialize, Serialize};

use super::{FeatureVector, PredictError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// z-score: `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `(x - min) / (max - min)`
    MinMax { min: Vec<f64>, max: Vec<f64> },
    Identity,
}

impl Scaler {
    /// Number of columns the scaler was fit on, `None` for identity.
    pub fn width(&self) -> Option<usize> {
        match self {
            Scaler::Standard { mean, .. } => Some(mean.len()),
            Scaler::MinMax { min, .. } => Some(min.len()),
            Scaler::Identity => None,
        }
    }

    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, PredictError> {
        match self {
            Scaler::Standard { mean, scale } => features.standardize(mean, scale),
            Scaler::MinMax { min, max } => features.normalize(min, max),
            Scaler::Identity => Ok(features.clone()),
        }
    }
}
