//! Database connection pool management.

pub mod connection;

pub use connection::DatabaseConnection;
