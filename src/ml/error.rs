use std::path::PathBuf;
use thiserror::Error;

/// Why the model-backed path could not produce a value.
///
/// Every variant is recoverable: the forecast engine substitutes the
/// heuristic and reports the error on stderr.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Required file not found at '{}'", .path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("failed to load '{}': {source}", .path.display())]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },

    #[error("{0}")]
    InferenceFailed(String),
}

impl PredictError {
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::InferenceFailed(msg.into())
    }

    pub fn load_failed(path: impl Into<PathBuf>, source: impl Into<ArtifactError>) -> Self {
        Self::LoadFailed {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Failures reading a single artifact document.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing format_version field")]
    MissingVersion,

    #[error("unsupported format_version {found} (expected {expected})")]
    UnsupportedVersion { found: u64, expected: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_path() {
        let err = PredictError::ArtifactMissing {
            path: PathBuf::from("/opt/predict/ml/model.json"),
        };
        assert_eq!(
            err.to_string(),
            "Required file not found at '/opt/predict/ml/model.json'"
        );
    }

    #[test]
    fn test_load_failed_includes_cause() {
        let err = PredictError::load_failed(
            "/tmp/scaler.json",
            ArtifactError::UnsupportedVersion {
                found: 7,
                expected: 1,
            },
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/scaler.json"));
        assert!(msg.contains("unsupported format_version 7"));
    }
}
