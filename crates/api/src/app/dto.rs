use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use fundscope_ai::MulticlassPrediction;
use fundscope_core::{BinaryStatus, CompanyStatus, RawRecord};

use crate::app::errors;

// -------------------------
// Request parsing
// -------------------------

/// Turn the request body into a record, or the 400 response explaining why not.
///
/// The body must be a non-empty JSON object; field-level problems are left to
/// the vectorizer so they can be reported by name.
pub fn parse_record(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<RawRecord, axum::response::Response> {
    let Json(value) = body.map_err(errors::rejection_to_response)?;

    match value {
        Value::Object(fields) if fields.is_empty() => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "request body is empty",
        )),
        Value::Object(fields) => Ok(RawRecord::new(fields)),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "request body must be a JSON object",
        )),
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct BinaryPredictionResponse {
    pub binary_prediction: BinaryStatus,
}

impl BinaryPredictionResponse {
    pub fn new(status: BinaryStatus) -> Self {
        Self {
            binary_prediction: status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MulticlassPredictionResponse {
    pub multiclass_prediction: i64,
    pub status: CompanyStatus,
}

impl From<MulticlassPrediction> for MulticlassPredictionResponse {
    fn from(prediction: MulticlassPrediction) -> Self {
        Self {
            multiclass_prediction: prediction.code,
            status: prediction.status,
        }
    }
}
