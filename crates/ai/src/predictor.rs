use fundscope_core::{FeatureTable, RawRecord};

use crate::result::PredictError;
use crate::vectorizer::vectorize;

/// One inference path: feature table in, labelled prediction out.
///
/// Predictors hold only load-time state (schemas, fitted artifacts) and never
/// mutate it, so one instance serves all requests concurrently.
pub trait Predictor: Send + Sync + 'static {
    type Output: Send + 'static;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run inference on an already-vectorized table.
    fn predict(&self, features: &FeatureTable) -> Result<Self::Output, PredictError>;

    /// Vectorize `record`, then [`predict`](Self::predict).
    fn predict_record(&self, record: &RawRecord) -> Result<Self::Output, PredictError> {
        let features = vectorize(record)?;
        self.predict(&features)
    }
}
