//! Application state management.
//!
//! Shared state passed to the app-level handlers:
//! - Configuration
//! - PostgreSQL connection pool

/// Shared application state.
///
/// Cloned per request; `DatabaseConnection` is an `Arc`-backed pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
