use serde::Deserialize;

use super::{Classifier, argmax, check_unique_names};
use crate::result::PredictError;

/// Logistic / softmax regression.
///
/// A two-class model has a single coefficient row: the positive class
/// (`classes[1]`) wins when `w·x + b > 0`. With more classes there is one
/// row per class and the highest score wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    classes: Vec<i64>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    #[serde(default)]
    feature_names: Vec<String>,
}

impl LinearModel {
    pub fn new(
        classes: Vec<i64>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
        feature_names: Vec<String>,
    ) -> Result<Self, String> {
        let model = Self {
            classes,
            coefficients,
            intercepts,
            feature_names,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.len() < 2 {
            return Err(format!("expected at least 2 classes, found {}", self.classes.len()));
        }

        let expected_rows = if self.classes.len() == 2 { 1 } else { self.classes.len() };
        if self.coefficients.len() != expected_rows {
            return Err(format!(
                "{} classes need {} coefficient row(s), found {}",
                self.classes.len(),
                expected_rows,
                self.coefficients.len()
            ));
        }
        if self.intercepts.len() != expected_rows {
            return Err(format!(
                "expected {} intercept(s), found {}",
                expected_rows,
                self.intercepts.len()
            ));
        }

        let width = self.n_features();
        if let Some(row) = self.coefficients.iter().position(|r| r.len() != width) {
            return Err(format!("coefficient row {row} does not have {width} values"));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != width {
            return Err(format!(
                "{} feature names for {} coefficients",
                self.feature_names.len(),
                width
            ));
        }
        check_unique_names(&self.feature_names)
    }

    fn score(&self, row: &[f64], class_row: usize) -> f64 {
        self.coefficients[class_row]
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercepts[class_row]
    }
}

impl Classifier for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn decide(&self, row: &[f64]) -> Result<i64, PredictError> {
        if let Some(i) = row.iter().position(|v| !v.is_finite()) {
            return Err(PredictError::inference(format!(
                "input contains NaN or infinity at column {i}"
            )));
        }

        if self.coefficients.len() == 1 {
            let class = if self.score(row, 0) > 0.0 { 1 } else { 0 };
            return Ok(self.classes[class]);
        }

        let scores: Vec<f64> = (0..self.coefficients.len()).map(|c| self.score(row, c)).collect();
        Ok(self.classes[argmax(&scores)])
    }
}
