use axum::{routing::post, Router};

pub mod predict;
pub mod system;

/// Router for the prediction endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/predict-binary", post(predict::predict_binary))
        .route("/predict-multiclass", post(predict::predict_multiclass))
}
