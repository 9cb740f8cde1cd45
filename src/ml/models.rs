//! ML Model Definitions
//!
//! Regressors that can be restored from a model artifact. Training happens
//! elsewhere; these types only carry fitted parameters and run inference.

use super::{FeatureVector, ModelMetadata, ModelType, PredictError, Prediction};
use serde::{Deserialize, Serialize};

/// Trait for ML models
pub trait MLModel: Send + Sync {
    /// Predict a value from features
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError>;

    /// Get model metadata
    fn metadata(&self) -> &ModelMetadata;

    /// Get model type
    fn model_type(&self) -> ModelType;

    /// Number of input columns, when the model fixes it up front
    fn n_features(&self) -> Option<usize> {
        None
    }
}

/// Simple Linear Regression Model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressionModel {
    #[serde(default)]
    pub metadata: ModelMetadata,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearRegressionModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64, metadata: ModelMetadata) -> Self {
        Self {
            metadata,
            coefficients,
            intercept,
        }
    }
}

impl MLModel for LinearRegressionModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictError::inference(format!(
                "Feature count mismatch: expected {}, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }

        let prediction: f64 = features
            .features
            .iter()
            .zip(self.coefficients.iter())
            .map(|(f, c)| f * c)
            .sum::<f64>()
            + self.intercept;

        Ok(Prediction::new(prediction))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn model_type(&self) -> ModelType {
        ModelType::LinearRegression
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }
}

/// One node of a fitted regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go to `left` when `x[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { value: f64 },
}

/// Regression tree stored as a flat node array, root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, PredictError> {
        let mut idx = 0;
        // a well-formed tree reaches a leaf in at most `nodes.len()` steps
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = row.get(*feature).ok_or_else(|| {
                        PredictError::inference(format!(
                            "tree splits on feature {} but only {} features were given",
                            feature,
                            row.len()
                        ))
                    })?;
                    idx = if x <= threshold { *left } else { *right };
                }
                None => {
                    return Err(PredictError::inference(format!(
                        "tree node {} out of bounds ({} nodes)",
                        idx,
                        self.nodes.len()
                    )))
                }
            }
        }
        Err(PredictError::inference("tree does not reach a leaf"))
    }
}

/// Random forest: mean of the tree outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestModel {
    #[serde(default)]
    pub metadata: ModelMetadata,
    pub trees: Vec<DecisionTree>,
}

impl MLModel for RandomForestModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        if self.trees.is_empty() {
            return Err(PredictError::inference("random forest has no trees"));
        }

        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.predict_row(&features.features)?;
        }

        Ok(Prediction::new(sum / self.trees.len() as f64))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn model_type(&self) -> ModelType {
        ModelType::RandomForest
    }
}

/// Gradient boosting: `init + learning_rate * sum(trees)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostingModel {
    #[serde(default)]
    pub metadata: ModelMetadata,
    pub init: f64,
    pub learning_rate: f64,
    pub trees: Vec<DecisionTree>,
}

impl MLModel for GradientBoostingModel {
    fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictError> {
        let mut boost = 0.0;
        for tree in &self.trees {
            boost += tree.predict_row(&features.features)?;
        }

        Ok(Prediction::new(self.init + self.learning_rate * boost))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn model_type(&self) -> ModelType {
        ModelType::GradientBoosting
    }
}
