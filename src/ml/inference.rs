//! ML Model Inference
//!
//! Runs one prediction against the artifacts on disk. Artifacts are read
//! fresh on every call and dropped before returning.

use std::io;
use std::path::PathBuf;

use tracing::debug;

use super::artifacts::{ArtifactPaths, LoadedArtifacts};
use super::{features, PredictError};
use crate::config::ArtifactsConfig;
use crate::domain::TimeSlot;

#[derive(Debug, Clone)]
enum Location {
    Resolved(ArtifactPaths),
    /// Relative artifact dir and no executable location to anchor it to.
    Unresolved { dir: PathBuf, reason: String },
}

/// Model-backed predictor reading artifacts from a fixed directory.
#[derive(Debug, Clone)]
pub struct ModelPredictor {
    location: Location,
}

impl ModelPredictor {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self {
            location: Location::Resolved(paths),
        }
    }

    /// Resolve the configured artifact directory against the install
    /// directory. A failed install lookup only matters for relative dirs and
    /// surfaces as a load failure at prediction time.
    pub fn locate(config: &ArtifactsConfig, install_dir: io::Result<PathBuf>) -> Self {
        if config.dir.is_absolute() {
            return Self::new(ArtifactPaths::in_dir(&config.dir, config));
        }
        match install_dir {
            Ok(dir) => Self::new(config.paths(&dir)),
            Err(err) => Self {
                location: Location::Unresolved {
                    dir: config.dir.clone(),
                    reason: format!("cannot locate executable: {err}"),
                },
            },
        }
    }

    pub fn paths(&self) -> Option<&ArtifactPaths> {
        match &self.location {
            Location::Resolved(paths) => Some(paths),
            Location::Unresolved { .. } => None,
        }
    }

    /// Raw (unrounded) model output for `slot`.
    pub fn predict(&self, slot: &TimeSlot) -> Result<f64, PredictError> {
        let paths = match &self.location {
            Location::Resolved(paths) => paths,
            Location::Unresolved { dir, reason } => {
                return Err(PredictError::load_failed(
                    dir.clone(),
                    io::Error::new(io::ErrorKind::NotFound, reason.clone()),
                ))
            }
        };
        paths.ensure_present()?;

        let loaded = LoadedArtifacts::load(paths)?;
        let meta = loaded.model.metadata();
        debug!(
            model_type = %loaded.model.model_type(),
            model_id = meta.model_id.as_deref().unwrap_or("-"),
            version = meta.version.as_deref().unwrap_or("-"),
            trained_at = ?meta.trained_at,
            "DEBUG: loaded model from {}",
            paths.model.display()
        );

        let row = features::assemble(slot, &loaded.features.feature_names)?;

        if let Some(width) = loaded.scaler.width() {
            if width != row.len() {
                return Err(PredictError::inference(format!(
                    "scaler was fit on {} features but the feature list has {}",
                    width,
                    row.len()
                )));
            }
        }
        if let Some(width) = loaded.model.n_features() {
            if width != row.len() {
                return Err(PredictError::inference(format!(
                    "model expects {} features but the feature list has {}",
                    width,
                    row.len()
                )));
            }
        }

        let scaled = loaded.scaler.transform(&row)?;
        let prediction = loaded.model.predict(&scaled)?;

        if !prediction.value.is_finite() {
            return Err(PredictError::inference(format!(
                "model produced a non-finite value ({})",
                prediction.value
            )));
        }

        Ok(prediction.value)
    }
}
