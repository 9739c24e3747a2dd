//! Application state management.

/// Shared application state.
///
/// Cloned into each router that needs it; the connection is a pool handle, so
/// clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
