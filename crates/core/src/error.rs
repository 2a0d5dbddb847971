//! Feature-preparation error model.

use thiserror::Error;

/// Result type used while reading records and feature tables.
pub type FeatureResult<T> = Result<T, FeatureError>;

/// A record field or feature column could not be read.
///
/// These are deterministic, input-caused failures: the same record always
/// fails the same way. Model-side failures live in `fundscope-ai`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureError {
    /// A required record field is absent (or `null`).
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A record field is present but has the wrong type.
    #[error("field '{field}' must be {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// A feature column requested by name is not in the table.
    #[error("feature column '{0}' not found in feature table")]
    MissingColumn(String),

    /// A feature column holds a categorical value where a number is required.
    #[error("feature column '{0}' is not numeric")]
    NonNumeric(String),
}

impl FeatureError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }
}
