//! Model schemas and feature-table alignment.
//!
//! One-hot encoding a single record only produces indicator columns for the
//! values that record actually has, which almost never matches the column set
//! a model was trained on. [`ModelSchema::align`] reconciles the two.

use fundscope_core::{Cell, FeatureError, FeatureResult, FeatureTable};

/// Columns the binary model was trained on, in training order.
pub const BINARY_FEATURES: [&str; 12] = [
    "Age_day",
    "last_funding_at",
    "milestones",
    "funding_total_usd",
    "first_funding_at",
    "first_milestone_at",
    "last_milestone_at",
    "relationships",
    "funding_rounds",
    "lng",
    "lat",
    "funding_per_round",
];

/// Ordered column list a specific model expects. Fixed once the model is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSchema {
    columns: Vec<String>,
}

impl ModelSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn binary() -> Self {
        Self::new(BINARY_FEATURES)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// An empty schema means the model artifact carried no feature names.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reshape `table` to exactly this schema.
    ///
    /// Output columns are the schema's columns in schema order; columns the
    /// table lacks are filled with 0, columns the schema lacks are dropped.
    /// With an empty schema the table is returned unchanged and the model is
    /// left to reject its shape.
    pub fn align(&self, table: &FeatureTable) -> FeatureTable {
        if self.is_empty() {
            return table.clone();
        }

        let mut aligned = FeatureTable::with_capacity(self.columns.len());
        for column in &self.columns {
            let cell = table.get(column).cloned().unwrap_or(Cell::Numeric(0.0));
            aligned.insert(column.as_str(), cell);
        }
        aligned
    }

    /// Project `table` onto this schema without filling gaps.
    ///
    /// Unlike [`align`](Self::align), a column the table lacks is an error.
    pub fn select(&self, table: &FeatureTable) -> FeatureResult<FeatureTable> {
        let mut selected = FeatureTable::with_capacity(self.columns.len());
        for column in &self.columns {
            let cell = table
                .get(column)
                .ok_or_else(|| FeatureError::MissingColumn(column.clone()))?;
            selected.insert(column.as_str(), cell.clone());
        }
        Ok(selected)
    }
}

impl From<Vec<String>> for ModelSchema {
    fn from(columns: Vec<String>) -> Self {
        Self { columns }
    }
}
