use fundscope_core::{BinaryStatus, FeatureTable};

use crate::model::Classifier;
use crate::predictor::Predictor;
use crate::result::PredictError;
use crate::scaler::StandardScaler;
use crate::schema::ModelSchema;

/// Active/closed prediction from the twelve engineered numeric features.
///
/// Indicator columns are not part of this model's inputs; extra columns in the
/// incoming table are ignored, missing ones are an error.
pub struct BinaryAdapter {
    schema: ModelSchema,
    scaler: StandardScaler,
    model: Box<dyn Classifier>,
}

impl BinaryAdapter {
    pub fn new(scaler: StandardScaler, model: impl Classifier + 'static) -> Self {
        Self {
            schema: ModelSchema::binary(),
            scaler,
            model: Box::new(model),
        }
    }

    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }
}

impl Predictor for BinaryAdapter {
    type Output = BinaryStatus;

    fn name(&self) -> &'static str {
        "binary"
    }

    fn predict(&self, features: &FeatureTable) -> Result<BinaryStatus, PredictError> {
        let selected = self.schema.select(features)?;
        let scaled = self.scaler.transform(&selected)?;
        let code = self.model.predict(&scaled)?;
        Ok(BinaryStatus::from_code(code))
    }
}
