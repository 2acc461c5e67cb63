//! Service entry point.
//!
//! Startup order: logging, configuration (fatal on error), database pool
//! (non-fatal probe), then the HTTP server.

use anyhow::Context;
use sg_insights_api::config::AppConfig;
use sg_insights_api::database::DatabaseConnection;
use sg_insights_api::web::state::AppState;
use sg_insights_api::{logging, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    let config = AppConfig::from_env().context("invalid service configuration")?;

    // The connectivity probe logs but does not fail startup; the service
    // comes up degraded if the database is unreachable.
    let db = DatabaseConnection::connect(&config.database).await;

    let state = AppState::new(config, db);
    web::serve(state).await.context("HTTP server failed")?;

    Ok(())
}
