//! Application state shared across all request handlers.
//!
//! The state is constructed once in `main` (the composition root) and cloned
//! for each request handler through Axum's state extraction. Services receive
//! the database handle from here rather than through any process-wide global.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// (clones share the pool) and the admin key is a small string.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Key expected in the `X-Admin-Key` header for admin routes.
    pub admin_key: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin_key` - Configured admin access key
    pub fn new(db: DatabaseConnection, admin_key: String) -> Self {
        Self { db, admin_key }
    }
}
