//! # Web API Response Types
//!
//! Error types with HTTP status mappings plus the fixed-shape payload shared
//! by the placeholder endpoints. Leverages thiserror for structured errors
//! and Axum's IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },
}

impl ApiError {
    /// Create a BadRequest error with a custom message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.as_str())
            }
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Fixed payload returned by every placeholder endpoint.
#[derive(Debug, Serialize)]
pub struct StubResponse {
    pub success: bool,
    pub data: Vec<serde_json::Value>,
    pub message: String,
}

impl StubResponse {
    /// An unconditional empty-success payload.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Vec::new(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400_error_envelope() {
        let response = ApiError::bad_request("malformed JSON body").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn stub_response_shape() {
        let body = serde_json::to_value(StubResponse::empty("KPI data endpoint")).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "data": [], "message": "KPI data endpoint"})
        );
    }
}
