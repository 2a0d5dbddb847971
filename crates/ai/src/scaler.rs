//! Fitted standardisation (`(x - mean) / scale`).

use serde::Deserialize;

use fundscope_core::FeatureTable;

use crate::model::{check_shape, check_unique_names};
use crate::result::PredictError;

/// Per-column centering and scaling fitted alongside a model.
///
/// A zero (or non-finite) scale is treated as 1, so constant training columns
/// are only centered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
    #[serde(default)]
    feature_names: Vec<String>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>, feature_names: Vec<String>) -> Result<Self, String> {
        let scaler = Self {
            mean,
            scale,
            feature_names,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    /// A scaler that leaves `n` columns untouched.
    pub fn identity(n: usize) -> Self {
        Self {
            mean: vec![0.0; n],
            scale: vec![1.0; n],
            feature_names: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "{} means for {} scales",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.mean.len() {
            return Err(format!(
                "{} feature names for {} columns",
                self.feature_names.len(),
                self.mean.len()
            ));
        }
        check_unique_names(&self.feature_names)
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardise every column of `table`, keeping column names.
    pub fn transform(&self, table: &FeatureTable) -> Result<FeatureTable, PredictError> {
        check_shape(table, self.n_features(), &self.feature_names)?;
        let row = table
            .to_row()
            .map_err(|e| PredictError::inference(e.to_string()))?;

        let mut scaled = FeatureTable::with_capacity(row.len());
        for (i, (name, x)) in table.names().zip(row).enumerate() {
            let scale = match self.scale[i] {
                s if s == 0.0 || !s.is_finite() => 1.0,
                s => s,
            };
            scaled.insert(name, (x - self.mean[i]) / scale);
        }
        Ok(scaled)
    }
}
