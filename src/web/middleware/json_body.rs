//! JSON request-body validation.
//!
//! Requests that declare a JSON content type must carry a well-formed JSON
//! body. Malformed bodies are rejected with a 400 before reaching any
//! handler, matching the behavior of an up-front body-parsing middleware.

use axum::body::Body;
use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::web::response_types::ApiError;

/// Upper bound on buffered request bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Reject requests whose declared-JSON body does not parse.
///
/// Non-JSON content types and empty bodies pass through untouched.
pub async fn require_well_formed_json(req: Request, next: Next) -> Response {
    let declares_json = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("application/json"));

    if !declares_json {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "Failed to buffer request body");
            return ApiError::bad_request("request body could not be read").into_response();
        }
    };

    if !bytes.is_empty() && serde_json::from_slice::<serde_json::Value>(&bytes).is_err() {
        debug!(
            method = %parts.method,
            path = %parts.uri.path(),
            "Rejecting malformed JSON body"
        );
        return ApiError::bad_request("malformed JSON body").into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
