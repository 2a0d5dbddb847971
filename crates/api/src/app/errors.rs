use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fundscope_ai::PredictError;

/// The binary endpoint reports every prediction failure as a client error.
pub fn binary_error_to_response(err: &PredictError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.to_string())
}

/// The multiclass endpoint separates bad records (400) from failures after
/// the record was accepted: alignment and inference (500).
pub fn multiclass_error_to_response(err: &PredictError) -> axum::response::Response {
    let status = if err.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    json_error(status, err.to_string())
}

/// A body axum could not read as JSON is always a client error.
pub fn rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
