use serde::Serialize;

use fundscope_core::{CompanyStatus, FeatureTable};

use crate::encoding::{Vocabulary, one_hot_expand};
use crate::model::Classifier;
use crate::predictor::Predictor;
use crate::result::PredictError;
use crate::schema::ModelSchema;

/// Result of the four-class company model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct MulticlassPrediction {
    pub code: i64,
    pub status: CompanyStatus,
}

/// Acquired / operating / IPO / closed prediction.
///
/// The schema is whatever feature names the model artifact learned. When the
/// artifact has none, alignment is skipped and the model rejects the table's
/// shape, which surfaces as an ordinary [`PredictError`].
pub struct MulticlassAdapter {
    schema: ModelSchema,
    vocabulary: Vocabulary,
    model: Box<dyn Classifier>,
}

impl MulticlassAdapter {
    pub fn new(model: impl Classifier + 'static) -> Self {
        let schema = ModelSchema::new(model.feature_names().iter().cloned());
        if schema.is_empty() {
            tracing::warn!("multiclass model has no learned feature names; predictions will fail on shape");
        }
        let vocabulary = Vocabulary::from_schema(&schema);

        Self {
            schema,
            vocabulary,
            model: Box::new(model),
        }
    }

    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Predictor for MulticlassAdapter {
    type Output = MulticlassPrediction;

    fn name(&self) -> &'static str {
        "multiclass"
    }

    fn predict(&self, features: &FeatureTable) -> Result<MulticlassPrediction, PredictError> {
        let expanded = one_hot_expand(features);

        if !self.schema.is_empty() {
            let unseen = self.vocabulary.unseen(&expanded);
            if !unseen.is_empty() {
                tracing::debug!(?unseen, "indicator columns unknown to the model are dropped");
            }
        }

        let aligned = self.schema.align(&expanded);
        let code = self.model.predict(&aligned)?;
        Ok(MulticlassPrediction {
            code,
            status: CompanyStatus::from_code(code),
        })
    }
}
