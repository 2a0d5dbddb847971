use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use fundscope_ai::Predictor;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /predict-binary`: every failure is reported as 400.
pub async fn predict_binary(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let record = match dto::parse_record(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.binary().predict_record(&record) {
        Ok(status) => {
            tracing::info!(model = services.binary().name(), prediction = %status, "prediction served");
            (StatusCode::OK, Json(dto::BinaryPredictionResponse::new(status))).into_response()
        }
        Err(e) => {
            tracing::warn!(model = services.binary().name(), error = %e, "prediction failed");
            errors::binary_error_to_response(&e)
        }
    }
}

/// `POST /predict-multiclass`: bad input is 400, alignment/inference failures are 500.
pub async fn predict_multiclass(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> axum::response::Response {
    let record = match dto::parse_record(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.multiclass().predict_record(&record) {
        Ok(prediction) => {
            tracing::info!(
                model = services.multiclass().name(),
                code = prediction.code,
                prediction = %prediction.status,
                "prediction served"
            );
            (StatusCode::OK, Json(dto::MulticlassPredictionResponse::from(prediction))).into_response()
        }
        Err(e) => {
            tracing::warn!(model = services.multiclass().name(), error = %e, "prediction failed");
            errors::multiclass_error_to_response(&e)
        }
    }
}
