use fundscope_core::FeatureError;
use thiserror::Error;

/// A prediction request failed.
///
/// The message of every variant is meant to be shown to the caller verbatim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    /// The record (or the table built from it) is missing or has a bad field.
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// The feature table does not have the shape the scaler/model expects.
    #[error("{0}")]
    SchemaMismatch(String),

    /// The model itself refused the input.
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

impl PredictError {
    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::InferenceFailed(msg.into())
    }

    /// True when the failure was caused by the record itself rather than by
    /// alignment or the model.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Feature(_))
    }
}
