use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// config sits behind its own `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: crewdeck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
