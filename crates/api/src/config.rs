//! Service configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use fundscope_ai::ArtifactPaths;
use fundscope_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "FUNDSCOPE_BIND_ADDR";
pub const MODEL_DIR_VAR: &str = "FUNDSCOPE_MODEL_DIR";
pub const BINARY_SCALER_VAR: &str = "FUNDSCOPE_BINARY_SCALER";
pub const BINARY_MODEL_VAR: &str = "FUNDSCOPE_BINARY_MODEL";
pub const MULTICLASS_MODEL_VAR: &str = "FUNDSCOPE_MULTICLASS_MODEL";
pub const LOG_FORMAT_VAR: &str = "FUNDSCOPE_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MODEL_DIR: &str = "models";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub artifacts: ArtifactPaths,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Empty values count as unset. Individual artifact paths override the
    /// conventional file names inside the model directory.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                reason: e.to_string(),
            })?;

        let model_dir = get(MODEL_DIR_VAR).unwrap_or_else(|| DEFAULT_MODEL_DIR.to_string());
        let mut artifacts = ArtifactPaths::from_dir(model_dir);
        if let Some(path) = get(BINARY_SCALER_VAR) {
            artifacts.binary_scaler = PathBuf::from(path);
        }
        if let Some(path) = get(BINARY_MODEL_VAR) {
            artifacts.binary_model = PathBuf::from(path);
        }
        if let Some(path) = get(MULTICLASS_MODEL_VAR) {
            artifacts.multiclass_model = PathBuf::from(path);
        }

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(v) => v.parse::<LogFormat>().map_err(|e| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                reason: e.to_string(),
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            artifacts,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.artifacts, ArtifactPaths::from_dir("models"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn model_dir_and_overrides_combine() {
        let config = config_from(&[
            (MODEL_DIR_VAR, "/srv/models"),
            (MULTICLASS_MODEL_VAR, "/opt/stacking.json"),
            (LOG_FORMAT_VAR, "pretty"),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
        ])
        .unwrap();

        assert_eq!(config.artifacts.binary_model, PathBuf::from("/srv/models/binary_model.json"));
        assert_eq!(config.artifacts.multiclass_model, PathBuf::from("/opt/stacking.json"));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = config_from(&[(BIND_ADDR_VAR, "  "), (MODEL_DIR_VAR, "")]).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.artifacts, ArtifactPaths::from_dir("models"));
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config_from(&[(BIND_ADDR_VAR, "not-an-address")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid FUNDSCOPE_BIND_ADDR"));

        let err = config_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: LOG_FORMAT_VAR, .. }));
    }
}
