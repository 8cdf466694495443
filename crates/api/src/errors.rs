use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;

use restmap_core::MappingError;

pub fn mapping_error_to_response(err: MappingError) -> axum::response::Response {
    match err {
        MappingError::UnknownResource(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        MappingError::InvalidResourceType(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_resource_type", err.to_string())
        }
        MappingError::UnknownHttpMethod(_) => {
            json_error(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", err.to_string())
        }
        MappingError::Config(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 405 carrying the `Allow` header every such response must have.
pub fn method_not_allowed(allow: String, message: impl Into<String>) -> axum::response::Response {
    (
        [(header::ALLOW, allow)],
        json_error(StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", message),
    )
        .into_response()
}
