//! `fundscope-ai`
//!
//! **Responsibility:** turning a company record into model predictions.
//!
//! - `vectorizer`: raw record → single-row feature table
//! - `encoding` / `schema`: one-hot expansion and alignment to a model's columns
//! - `model` / `scaler` / `artifact`: fitted artifacts and how they are loaded
//! - `adapter`: the binary and multiclass inference paths
//!
//! Nothing here knows about HTTP; errors carry caller-facing messages and the
//! API layer decides status codes.

pub mod adapter;
pub mod artifact;
pub mod encoding;
pub mod model;
pub mod predictor;
pub mod result;
pub mod scaler;
pub mod schema;
pub mod vectorizer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use adapter::{BinaryAdapter, MulticlassAdapter, MulticlassPrediction};
pub use artifact::{ArtifactError, ArtifactPaths, load_model, load_scaler};
pub use encoding::{Vocabulary, one_hot_expand};
pub use model::{Classifier, LinearModel, ModelArtifact, TreeEnsemble};
pub use predictor::Predictor;
pub use result::PredictError;
pub use scaler::StandardScaler;
pub use schema::{BINARY_FEATURES, ModelSchema};
pub use vectorizer::vectorize;
