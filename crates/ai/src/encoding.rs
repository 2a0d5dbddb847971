//! One-hot encoding and the indicator vocabulary a model was trained with.

use std::collections::BTreeSet;

use fundscope_core::{CATEGORICAL_FIELDS, Cell, FeatureTable};

use crate::schema::ModelSchema;

/// Expand every categorical cell into a `<column>_<value>` indicator set to 1.
///
/// Numeric columns keep their relative order and come first; indicators follow.
/// A table without categorical cells is returned unchanged, so expanding
/// vectorizer output (which is already expanded) is a no-op.
pub fn one_hot_expand(table: &FeatureTable) -> FeatureTable {
    let mut numeric = FeatureTable::with_capacity(table.len());
    let mut indicators = Vec::new();

    for (name, cell) in table.iter() {
        match cell {
            Cell::Numeric(v) => numeric.insert(name, *v),
            Cell::Categorical(value) => indicators.push(format!("{name}_{value}")),
        }
    }

    for column in indicators {
        numeric.insert(column, 1.0);
    }
    numeric
}

/// The `category_*` / `country_*` indicator columns a model knows about.
///
/// Derived from the model schema once at load time, so the set of indicator
/// columns that can reach the model is fixed for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    indicators: BTreeSet<String>,
}

impl Vocabulary {
    pub fn from_schema(schema: &ModelSchema) -> Self {
        let indicators = schema
            .columns()
            .iter()
            .filter(|c| is_indicator(c))
            .cloned()
            .collect();
        Self { indicators }
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.indicators.contains(column)
    }

    /// Indicator columns present in `table` that the model was never trained on.
    ///
    /// Alignment drops these, which makes such a company indistinguishable
    /// from one with no category/country at all.
    pub fn unseen<'a>(&self, table: &'a FeatureTable) -> Vec<&'a str> {
        table
            .names()
            .filter(|name| is_indicator(name) && !self.contains(name))
            .collect()
    }
}

fn is_indicator(column: &str) -> bool {
    CATEGORICAL_FIELDS.iter().any(|field| {
        column
            .strip_prefix(field)
            .is_some_and(|rest| rest.starts_with('_'))
    })
}
