//! Model artifacts on disk
//!
//! Three JSON documents describe a fitted model: the regressor, the scaler
//! and the feature ordering. Each carries a `format_version`; a document
//! with any other version is refused rather than guessed at.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::{GradientBoostingModel, LinearRegressionModel, MLModel, RandomForestModel};
use super::scaler::Scaler;
use super::{ArtifactError, PredictError};
use crate::config::ArtifactsConfig;

/// Version written by the current training pipeline.
pub const FORMAT_VERSION: u64 = 1;

/// Model artifact, tagged by `model_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression(LinearRegressionModel),
    RandomForest(RandomForestModel),
    GradientBoosting(GradientBoostingModel),
}

impl ModelArtifact {
    pub fn into_model(self) -> Box<dyn MLModel> {
        match self {
            ModelArtifact::LinearRegression(m) => Box::new(m),
            ModelArtifact::RandomForest(m) => Box::new(m),
            ModelArtifact::GradientBoosting(m) => Box::new(m),
        }
    }
}

/// Feature ordering artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureList {
    pub feature_names: Vec<String>,
}

/// Locations of the three artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub features: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: &Path, config: &ArtifactsConfig) -> Self {
        Self {
            model: dir.join(&config.model_file),
            scaler: dir.join(&config.scaler_file),
            features: dir.join(&config.features_file),
        }
    }

    /// Fail with the first path that does not exist, in model, scaler,
    /// features order.
    pub fn ensure_present(&self) -> Result<(), PredictError> {
        for path in [&self.model, &self.scaler, &self.features] {
            if !path.exists() {
                return Err(PredictError::ArtifactMissing { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// Everything the predictor needs, loaded and version-checked.
pub struct LoadedArtifacts {
    pub model: Box<dyn MLModel>,
    pub scaler: Scaler,
    pub features: FeatureList,
}

impl LoadedArtifacts {
    pub fn load(paths: &ArtifactPaths) -> Result<Self, PredictError> {
        let model: ModelArtifact = load_document(&paths.model)?;
        let scaler: Scaler = load_document(&paths.scaler)?;
        let features: FeatureList = load_document(&paths.features)?;

        Ok(Self {
            model: model.into_model(),
            scaler,
            features,
        })
    }
}

/// Read and version-check one artifact, attributing failures to `path`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, PredictError> {
    read_document(path).map_err(|source| PredictError::load_failed(path, source))
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    // the file handle is dropped at the end of this statement
    let value: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    check_version(&value)?;
    Ok(serde_json::from_value(value)?)
}

fn check_version(document: &Value) -> Result<(), ArtifactError> {
    let found = document
        .get("format_version")
        .and_then(Value::as_u64)
        .ok_or(ArtifactError::MissingVersion)?;
    if found != FORMAT_VERSION {
        return Err(ArtifactError::UnsupportedVersion {
            found,
            expected: FORMAT_VERSION,
        });
    }
    Ok(())
}
