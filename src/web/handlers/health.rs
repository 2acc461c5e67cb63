//! # Health Check Handler
//!
//! Reports service and database liveness for monitoring. The database check
//! issues one `SELECT NOW()` against the shared pool per request; any failure
//! maps to a 503 with the database reported as disconnected.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

use crate::web::state::AppState;

/// Health check response, built fresh per request.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    services: ServiceStatus,
}

/// Per-dependency status section of the health report.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_time: Option<DateTime<Utc>>,
}

impl HealthReport {
    fn ok(db_time: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Some(Utc::now().to_rfc3339()),
            services: ServiceStatus {
                database: "connected".to_string(),
                db_time: Some(db_time),
            },
        }
    }

    fn degraded() -> Self {
        Self {
            status: "error".to_string(),
            timestamp: None,
            services: ServiceStatus {
                database: "disconnected".to_string(),
                db_time: None,
            },
        }
    }
}

/// Health check endpoint: GET /api/v1/health
///
/// Probes database connectivity and returns 200 with the server's reported
/// time on success, 503 otherwise. Probe errors are not retried here; the
/// pool's acquisition timeout bounds how long a failing probe can take.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    debug!("Performing health check");

    match state.db.current_time().await {
        Ok(db_time) => (StatusCode::OK, Json(HealthReport::ok(db_time))),
        Err(e) => {
            error!(error = %e, "Database health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthReport::degraded()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_report_carries_timestamp_and_db_time() {
        let db_time = Utc::now();
        let body = serde_json::to_value(HealthReport::ok(db_time)).unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["services"]["database"], "connected");

        let reported: DateTime<Utc> = body["timestamp"]
            .as_str()
            .expect("timestamp present")
            .parse()
            .expect("timestamp parses as RFC 3339");
        let now = Utc::now();
        assert!((now - reported).num_seconds().abs() < 5);

        let reported_db: DateTime<Utc> = serde_json::from_value(body["services"]["db_time"].clone())
            .expect("db_time parses as a timestamp");
        assert_eq!(reported_db, db_time);
    }

    #[test]
    fn degraded_report_omits_optional_fields() {
        let body = serde_json::to_value(HealthReport::degraded()).unwrap();

        assert_eq!(body["status"], "error");
        assert_eq!(body["services"]["database"], "disconnected");
        assert!(body.get("timestamp").is_none());
        assert!(body["services"].get("db_time").is_none());
    }
}
