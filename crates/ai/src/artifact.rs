//! Loading fitted artifacts from disk.
//!
//! Artifacts are JSON documents produced by the (external) training pipeline.
//! They are read and validated once at startup; a bad artifact stops the
//! service from starting rather than failing individual requests.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::ModelArtifact;
use crate::scaler::StandardScaler;

pub const BINARY_SCALER_FILE: &str = "binary_scaler.json";
pub const BINARY_MODEL_FILE: &str = "binary_model.json";
pub const MULTICLASS_MODEL_FILE: &str = "multiclass_model.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Where the three artifacts the service needs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub binary_scaler: PathBuf,
    pub binary_model: PathBuf,
    pub multiclass_model: PathBuf,
}

impl ArtifactPaths {
    /// Conventional file names inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            binary_scaler: dir.join(BINARY_SCALER_FILE),
            binary_model: dir.join(BINARY_MODEL_FILE),
            multiclass_model: dir.join(MULTICLASS_MODEL_FILE),
        }
    }
}

pub fn load_scaler(path: impl AsRef<Path>) -> Result<StandardScaler, ArtifactError> {
    let path = path.as_ref();
    let scaler: StandardScaler = read_json(path)?;
    scaler.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::info!(path = %path.display(), n_features = scaler.n_features(), "loaded scaler");
    Ok(scaler)
}

pub fn load_model(path: impl AsRef<Path>) -> Result<ModelArtifact, ArtifactError> {
    let path = path.as_ref();
    let model: ModelArtifact = read_json(path)?;
    model.validate().map_err(|reason| ArtifactError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::info!(path = %path.display(), kind = model.kind(), "loaded model");
    Ok(model)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
