//! Single-row, ordered feature table.

use serde::Serialize;

use crate::error::{FeatureError, FeatureResult};

/// A single feature value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Numeric(f64),
    /// A raw categorical value, not yet one-hot expanded.
    Categorical(String),
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Numeric(v) => Some(*v),
            Cell::Categorical(_) => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Numeric(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Categorical(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Categorical(v)
    }
}

/// The single-row representation fed to a model.
///
/// Columns keep insertion order; names are unique. Inserting an existing name
/// overwrites the value in place, so column order never depends on how many
/// times a column was written.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureTable {
    columns: Vec<(String, Cell)>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Set `name` to `value`, appending the column if it is new.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Cell>) {
        let name = name.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, cell)) => *cell = value,
            None => self.columns.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Numeric value of `name`, if present and numeric.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Cell::as_f64)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> + '_ {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// The row as a dense numeric vector, in column order.
    pub fn to_row(&self) -> FeatureResult<Vec<f64>> {
        self.columns
            .iter()
            .map(|(name, cell)| cell.as_f64().ok_or_else(|| FeatureError::NonNumeric(name.clone())))
            .collect()
    }
}

impl<N: Into<String>, C: Into<Cell>> FromIterator<(N, C)> for FeatureTable {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut table = FeatureTable::new();
        for (name, cell) in iter {
            table.insert(name, cell);
        }
        table
    }
}
