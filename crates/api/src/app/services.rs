use fundscope_ai::{
    ArtifactError, ArtifactPaths, BINARY_FEATURES, BinaryAdapter, Classifier, MulticlassAdapter,
    load_model, load_scaler,
};

/// Process-wide inference state: loaded once at startup, read-only afterwards.
///
/// Shared between requests behind an `Arc`; nothing in here is mutated after
/// construction, so no locking is needed.
pub struct AppServices {
    binary: BinaryAdapter,
    multiclass: MulticlassAdapter,
}

impl AppServices {
    pub fn new(binary: BinaryAdapter, multiclass: MulticlassAdapter) -> Self {
        Self { binary, multiclass }
    }

    /// Load and validate every artifact the service needs.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let scaler = load_scaler(&paths.binary_scaler)?;
        let binary_model = load_model(&paths.binary_model)?;
        let multiclass_model = load_model(&paths.multiclass_model)?;

        if scaler.n_features() != BINARY_FEATURES.len() || binary_model.n_features() != BINARY_FEATURES.len() {
            tracing::warn!(
                scaler_features = scaler.n_features(),
                model_features = binary_model.n_features(),
                expected = BINARY_FEATURES.len(),
                "binary artifacts do not match the binary feature list; binary predictions will fail"
            );
        }

        let classes = multiclass_model.classes().to_vec();
        let multiclass = MulticlassAdapter::new(multiclass_model);
        tracing::info!(
            ?classes,
            columns = multiclass.schema().len(),
            indicators = multiclass.vocabulary().len(),
            "multiclass schema loaded"
        );

        Ok(Self::new(BinaryAdapter::new(scaler, binary_model), multiclass))
    }

    pub fn binary(&self) -> &BinaryAdapter {
        &self.binary
    }

    pub fn multiclass(&self) -> &MulticlassAdapter {
        &self.multiclass
    }
}
