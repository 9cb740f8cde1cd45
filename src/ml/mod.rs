//! Machine Learning Module
//!
//! Model-backed consumption prediction:
//! - Feature assembly in the column order the model was fit with
//! - Scaler transforms (standard, min-max)
//! - Linear and tree-ensemble regressors
//! - Versioned JSON artifacts loaded from disk on every invocation
//!
//! Nothing in here falls back on its own; failures are returned as
//! [`PredictError`] and the forecast engine decides what to do with them.

use serde::{Deserialize, Serialize};
use strum::Display;

pub mod artifacts;
pub mod error;
pub mod features;
pub mod inference;
pub mod models;
pub mod scaler;

pub use error::{ArtifactError, PredictError};

/// ML Model Type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelType {
    LinearRegression,
    RandomForest,
    GradientBoosting,
}

/// ML Model Metadata, as recorded by the training pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelMetadata {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub trained_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub training_samples: Option<usize>,
}

/// Feature Vector for ML models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub features: Vec<f64>,
    pub feature_names: Vec<String>,
}

impl FeatureVector {
    pub fn new(features: Vec<f64>, feature_names: Vec<String>) -> Result<Self, PredictError> {
        if features.len() != feature_names.len() {
            return Err(PredictError::inference(format!(
                "Feature count mismatch: {} features, {} names",
                features.len(),
                feature_names.len()
            )));
        }
        Ok(Self {
            features,
            feature_names,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Normalize features using min-max scaling
    pub fn normalize(&self, min_vals: &[f64], max_vals: &[f64]) -> Result<Self, PredictError> {
        if min_vals.len() != self.features.len() || max_vals.len() != self.features.len() {
            return Err(PredictError::inference(format!(
                "Normalization parameter count mismatch: {} features, {} min, {} max",
                self.features.len(),
                min_vals.len(),
                max_vals.len()
            )));
        }

        let normalized = self
            .features
            .iter()
            .zip(min_vals.iter().zip(max_vals.iter()))
            .map(|(f, (min, max))| {
                if (max - min).abs() < 1e-10 {
                    0.5 // Avoid division by zero
                } else {
                    (f - min) / (max - min)
                }
            })
            .collect();

        Ok(Self {
            features: normalized,
            feature_names: self.feature_names.clone(),
        })
    }

    /// Standardize features using z-score normalization
    pub fn standardize(&self, means: &[f64], stds: &[f64]) -> Result<Self, PredictError> {
        if means.len() != self.features.len() || stds.len() != self.features.len() {
            return Err(PredictError::inference(format!(
                "Standardization parameter count mismatch: {} features, {} means, {} scales",
                self.features.len(),
                means.len(),
                stds.len()
            )));
        }

        let standardized = self
            .features
            .iter()
            .zip(means.iter().zip(stds.iter()))
            .map(|(f, (mean, std))| {
                if std.abs() < 1e-10 {
                    0.0 // Avoid division by zero
                } else {
                    (f - mean) / std
                }
            })
            .collect();

        Ok(Self {
            features: standardized,
            feature_names: self.feature_names.clone(),
        })
    }
}

/// ML Prediction Result
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    pub value: f64,
}

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["f1".to_string(), "f2".to_string(), "f3".to_string()]
    }

    #[test]
    fn test_feature_vector_creation() {
        let fv = FeatureVector::new(vec![1.0, 2.0, 3.0], names()).unwrap();
        assert_eq!(fv.len(), 3);
        assert!(!fv.is_empty());
    }

    #[test]
    fn test_feature_vector_count_mismatch() {
        let err = FeatureVector::new(vec![1.0, 2.0], names()).unwrap_err();
        assert!(matches!(err, PredictError::InferenceFailed(_)));
    }

    #[test]
    fn test_feature_vector_normalize() {
        let fv = FeatureVector::new(vec![10.0, 20.0, 30.0], names()).unwrap();

        let min_vals = vec![0.0, 10.0, 20.0];
        let max_vals = vec![100.0, 30.0, 40.0];

        let normalized = fv.normalize(&min_vals, &max_vals).unwrap();
        assert_eq!(normalized.features[0], 0.1); // (10-0)/(100-0)
        assert_eq!(normalized.features[1], 0.5); // (20-10)/(30-10)
        assert_eq!(normalized.features[2], 0.5); // (30-20)/(40-20)
    }

    #[test]
    fn test_normalize_constant_column() {
        let fv = FeatureVector::new(vec![4.0, 20.0, 30.0], names()).unwrap();
        let normalized = fv
            .normalize(&[4.0, 0.0, 0.0], &[4.0, 40.0, 60.0])
            .unwrap();
        assert_eq!(normalized.features, vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_feature_vector_standardize() {
        let fv = FeatureVector::new(vec![12.0, 25.0, 30.0], names()).unwrap();

        let means = vec![10.0, 20.0, 30.0];
        let stds = vec![2.0, 5.0, 0.0];

        let standardized = fv.standardize(&means, &stds).unwrap();
        assert_eq!(standardized.features[0], 1.0); // (12-10)/2
        assert_eq!(standardized.features[1], 1.0); // (25-20)/5
        assert_eq!(standardized.features[2], 0.0); // zero scale
    }

    #[test]
    fn test_standardize_width_mismatch() {
        let fv = FeatureVector::new(vec![1.0, 2.0, 3.0], names()).unwrap();
        assert!(fv.standardize(&[0.0, 0.0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_model_type_display() {
        assert_eq!(ModelType::RandomForest.to_string(), "random_forest");
        assert_eq!(ModelType::LinearRegression.to_string(), "linear_regression");
    }
}
