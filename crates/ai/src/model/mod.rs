//! Pre-trained classifiers behind a narrow capability.
//!
//! The pipeline never looks inside a model: it hands over an aligned
//! [`FeatureTable`] and gets a class code back. Two artifact kinds are
//! understood: a linear (logistic/softmax) model and a gradient-boosted tree
//! ensemble.

use std::collections::HashSet;

use serde::Deserialize;

use fundscope_core::FeatureTable;

use crate::result::PredictError;

pub mod forest;
pub mod linear;

pub use forest::{Node, Tree, TreeEnsemble};
pub use linear::LinearModel;

/// A fitted classifier.
///
/// Implementations must be immutable after construction; a single instance is
/// shared by every request.
pub trait Classifier: Send + Sync {
    /// Number of input columns the model was fitted on.
    fn n_features(&self) -> usize;

    /// Column names learned at fit time (empty if the artifact had none).
    fn feature_names(&self) -> &[String];

    /// Class codes in output order.
    fn classes(&self) -> &[i64];

    /// Score one dense row of exactly `n_features` values.
    fn decide(&self, row: &[f64]) -> Result<i64, PredictError>;

    /// Predict the class code for a single-row table.
    ///
    /// The table must be all-numeric and match the fitted width; if the model
    /// learned feature names, the columns must match them in order.
    fn predict(&self, table: &FeatureTable) -> Result<i64, PredictError> {
        check_shape(table, self.n_features(), self.feature_names())?;
        let row = table
            .to_row()
            .map_err(|e| PredictError::inference(e.to_string()))?;
        self.decide(&row)
    }
}

pub(crate) fn check_shape(
    table: &FeatureTable,
    n_features: usize,
    feature_names: &[String],
) -> Result<(), PredictError> {
    if table.len() != n_features {
        return Err(PredictError::schema_mismatch(format!(
            "X has {} features, but the model is expecting {} features as input",
            table.len(),
            n_features
        )));
    }

    if !feature_names.is_empty() {
        if let Some((got, want)) = table
            .names()
            .zip(feature_names)
            .find(|(got, want)| got != want)
        {
            return Err(PredictError::schema_mismatch(format!(
                "feature names must match those seen at fit time: got '{got}' where '{want}' was expected"
            )));
        }
    }

    Ok(())
}

/// Learned feature names must be unique; a repeated name would collapse two
/// columns into one during alignment.
pub(crate) fn check_unique_names(names: &[String]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(names.len());
    match names.iter().find(|name| !seen.insert(name.as_str())) {
        Some(name) => Err(format!("duplicate feature name '{name}'")),
        None => Ok(()),
    }
}

/// A classifier artifact as stored on disk, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    /// Check internal consistency (dimensions, node indices).
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Linear(m) => m.validate(),
            Self::TreeEnsemble(m) => m.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::TreeEnsemble(_) => "tree_ensemble",
        }
    }
}

impl Classifier for ModelArtifact {
    fn n_features(&self) -> usize {
        match self {
            Self::Linear(m) => m.n_features(),
            Self::TreeEnsemble(m) => m.n_features(),
        }
    }

    fn feature_names(&self) -> &[String] {
        match self {
            Self::Linear(m) => m.feature_names(),
            Self::TreeEnsemble(m) => m.feature_names(),
        }
    }

    fn classes(&self) -> &[i64] {
        match self {
            Self::Linear(m) => m.classes(),
            Self::TreeEnsemble(m) => m.classes(),
        }
    }

    fn decide(&self, row: &[f64]) -> Result<i64, PredictError> {
        match self {
            Self::Linear(m) => m.decide(row),
            Self::TreeEnsemble(m) => m.decide(row),
        }
    }
}

/// Index of the largest score; ties go to the lowest index.
pub(crate) fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, s) in scores.iter().enumerate().skip(1) {
        if *s > scores[best] {
            best = i;
        }
    }
    best
}
