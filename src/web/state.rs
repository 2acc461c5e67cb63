//! # Web API Application State
//!
//! Shared state for the web API. The database pool is constructed explicitly
//! at startup and injected here, so route registration never reaches for a
//! global handle and tests can substitute their own pool.

use crate::config::AppConfig;
use crate::database::DatabaseConnection;
use std::sync::Arc;

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}
