//! # SG Insights API
//!
//! HTTP API service for the Singapore housing-market insights dashboard.
//!
//! ## Overview
//!
//! A minimal service skeleton: a connection-pooled PostgreSQL client with a
//! startup connectivity probe, an Axum HTTP server with a standard middleware
//! stack (CORS, security headers, request tracing, JSON body validation), a
//! database-backed health endpoint, and placeholder routes for the dashboard
//! data endpoints.
//!
//! ## Module Organization
//!
//! - [`config`] - Environment-driven configuration, validated at startup
//! - [`database`] - Connection pool management and the health probe
//! - [`web`] - Router assembly, middleware, and request handlers
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber initialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sg_insights_api::config::AppConfig;
//! use sg_insights_api::database::DatabaseConnection;
//! use sg_insights_api::web::{self, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let db = DatabaseConnection::connect(&config.database).await;
//! web::serve(AppState::new(config, db)).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod web;

pub use config::{AppConfig, DatabaseSettings};
pub use database::DatabaseConnection;
pub use error::{AppError, Result};
