//! # HTTP Service
//!
//! Router assembly and the serve loop. Routes live under `/api/v1`; the
//! middleware stack and shared state are attached here so tests can drive
//! the router in-process without binding a socket.

pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod state;

use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;
use crate::web::state::AppState;

/// Build the application router with all routes and middleware registered.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/dashboard/kpis", get(handlers::stubs::dashboard_kpis))
        .route("/hdb/transactions", get(handlers::stubs::hdb_transactions))
        .route("/hdb/trends", get(handlers::stubs::hdb_trends))
        .route("/hdb/map-data", get(handlers::stubs::hdb_map_data))
        .route("/coe/trends", get(handlers::stubs::coe_trends))
        .route("/cpi/trends", get(handlers::stubs::cpi_trends));

    let router = Router::new().nest("/api/v1", api);

    middleware::apply_middleware_stack(router).with_state(state)
}

/// Bind the configured port and serve requests until the process exits.
///
/// Bind failure is fatal. There is no graceful-shutdown handling; the pool
/// and listener are released on process termination.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let router = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    let bound = listener.local_addr()?;

    info!("Server running on http://{bound}");
    info!("Health check: http://{bound}/api/v1/health");

    axum::serve(listener, router).await?;

    Ok(())
}
