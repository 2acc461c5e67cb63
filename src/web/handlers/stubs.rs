//! # Placeholder Route Handlers
//!
//! Stub endpoints for routes whose implementations land later. Each responds
//! 200 with a fixed empty-success payload regardless of input; the names
//! encode no contract beyond that.

use axum::Json;

use crate::web::response_types::StubResponse;

/// GET /api/v1/dashboard/kpis
pub async fn dashboard_kpis() -> Json<StubResponse> {
    Json(StubResponse::empty("KPI data endpoint"))
}

/// GET /api/v1/hdb/transactions
pub async fn hdb_transactions() -> Json<StubResponse> {
    Json(StubResponse::empty("HDB transactions endpoint"))
}

/// GET /api/v1/hdb/trends
pub async fn hdb_trends() -> Json<StubResponse> {
    Json(StubResponse::empty("HDB trends endpoint"))
}

/// GET /api/v1/hdb/map-data
pub async fn hdb_map_data() -> Json<StubResponse> {
    Json(StubResponse::empty("HDB map data endpoint"))
}

/// GET /api/v1/coe/trends
pub async fn coe_trends() -> Json<StubResponse> {
    Json(StubResponse::empty("COE trends endpoint"))
}

/// GET /api/v1/cpi/trends
pub async fn cpi_trends() -> Json<StubResponse> {
    Json(StubResponse::empty("CPI trends endpoint"))
}
