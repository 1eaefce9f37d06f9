//! Route registration.
//!
//! Route hierarchy:
//!
//! ```text
//! GET  /health           liveness + database health
//! POST /api/v1/execute   query/mutation document execution
//! ```

pub mod execute;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(execute::router())
}
