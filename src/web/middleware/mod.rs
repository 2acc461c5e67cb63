//! # Web API Middleware
//!
//! Middleware stack for the web API: CORS, security response headers,
//! request tracing, and JSON body validation.

pub mod json_body;

use axum::http::header;
use axum::http::HeaderValue;
use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::web::state::AppState;

/// Apply the middleware stack for a router with app state.
///
/// Request path, outermost-in:
/// 1. Permissive CORS (any origin)
/// 2. Security response headers
/// 3. Request tracing (method, path, status, latency)
/// 4. JSON body validation — malformed bodies are rejected before any
///    handler runs
pub fn apply_middleware_stack(router: Router<AppState>) -> Router<AppState> {
    // Axum applies layers bottom-up: the last layer added is outermost.
    router
        .layer(middleware::from_fn(json_body::require_well_formed_json))
        .layer(TraceLayer::new_for_http())
        .layer(security_header(
            header::REFERRER_POLICY,
            "no-referrer",
        ))
        .layer(security_header(header::X_XSS_PROTECTION, "0"))
        .layer(security_header(header::X_FRAME_OPTIONS, "DENY"))
        .layer(security_header(
            header::X_CONTENT_TYPE_OPTIONS,
            "nosniff",
        ))
        .layer(create_cors_layer())
}

/// Create CORS layer with permissive settings
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// One standard security response header (helmet-equivalent defaults).
fn security_header(
    name: header::HeaderName,
    value: &'static str,
) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
