use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ml::artifacts::ArtifactPaths;
use crate::telemetry::LogFormat;

/// Config file looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "predict-energy.toml";
pub const ENV_PREFIX: &str = "PREDICT_ENERGY__";

/// Flat key space: `artifact_dir`, `model_file`, `scaler_file`,
/// `features_file` and `log_format`, in TOML and as
/// `PREDICT_ENERGY__<KEY>` variables alike.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(flatten)]
    pub artifacts: ArtifactsConfig,
    #[serde(flatten)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Relative paths are resolved against the executable's directory.
    #[serde(rename = "artifact_dir")]
    pub dir: PathBuf,
    pub model_file: String,
    pub scaler_file: String,
    pub features_file: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("ml"),
            model_file: "model.json".to_string(),
            scaler_file: "scaler.json".to_string(),
            features_file: "features.json".to_string(),
        }
    }
}

impl ArtifactsConfig {
    /// Artifact directory, anchored at `install_dir` when relative. The
    /// process working directory never takes part.
    pub fn resolve_dir(&self, install_dir: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            install_dir.join(&self.dir)
        }
    }

    pub fn paths(&self, install_dir: &Path) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.resolve_dir(install_dir), self)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    #[serde(rename = "log_format")]
    pub format: LogFormat,
}

impl Config {
    /// Layer defaults, `predict-energy.toml` in `install_dir`, an optional
    /// extra file and `PREDICT_ENERGY__*` environment variables.
    pub fn load(install_dir: Option<&Path>, extra: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(dir) = install_dir {
            figment = figment.merge(Toml::file(dir.join(CONFIG_FILE_NAME)));
        }
        if let Some(path) = extra {
            if !path.exists() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment.extract().context("invalid configuration")
    }
}

/// Directory holding the running executable.
pub fn install_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable path {} has no parent", exe.display()),
        )
    })
}
