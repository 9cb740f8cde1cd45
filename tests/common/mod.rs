#![allow(dead_code)]
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub const FEATURES: &str =
    r#"{"format_version": 1, "feature_names": ["hour_of_day", "day_of_week", "weekend"]}"#;
pub const IDENTITY_SCALER: &str = r#"{"format_version": 1, "kind": "identity"}"#;
/// hour + 2*day + 3*weekend + 10
pub const LINEAR_MODEL: &str = r#"{"format_version": 1, "model_type": "linear_regression",
    "coefficients": [1.0, 2.0, 3.0], "intercept": 10.0}"#;

/// Result of one binary invocation.
pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for Run {
    fn from(out: Output) -> Self {
        Self {
            code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

pub fn command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_predict-energy"));
    // plain diagnostics at debug level regardless of the test environment
    cmd.env("RUST_LOG", "debug")
        .env_remove("PREDICT_ENERGY__ARTIFACT_DIR")
        .env_remove("PREDICT_ENERGY__MODEL_FILE")
        .env_remove("PREDICT_ENERGY__SCALER_FILE")
        .env_remove("PREDICT_ENERGY__FEATURES_FILE")
        .env_remove("PREDICT_ENERGY__LOG_FORMAT");
    cmd
}

pub fn run(args: &[&str]) -> Run {
    command().args(args).output().expect("spawn predict-energy").into()
}

pub fn run_with_artifacts(dir: &Path, args: &[&str]) -> Run {
    command()
        .arg("--artifact-dir")
        .arg(dir)
        .args(args)
        .output()
        .expect("spawn predict-energy")
        .into()
}

pub fn write_artifacts(dir: &Path, model: &str, scaler: &str, features: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("model.json"), model).unwrap();
    fs::write(dir.join("scaler.json"), scaler).unwrap();
    fs::write(dir.join("features.json"), features).unwrap();
}

pub fn artifact_dir(model: &str, scaler: &str, features: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), model, scaler, features);
    dir
}

/// Value from the `Predicted energy consumption: X kWh` line, the way the
/// calling application extracts it.
pub fn predicted_kwh(stdout: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Predicted energy consumption: "))
        .unwrap_or_else(|| panic!("no prediction line in {stdout:?}"));
    line.trim_start_matches("Predicted energy consumption: ")
        .trim_end_matches(" kWh")
        .parse()
        .unwrap()
}
