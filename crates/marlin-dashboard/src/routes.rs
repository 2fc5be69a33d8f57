//! Route definitions for the dashboard.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/database/routines", get(handlers::routines))
        .route("/database/triggers", get(handlers::database_triggers))
        .route("/table/triggers", get(handlers::table_triggers))
        .route("/database/events", get(handlers::events))
        .route("/sql", get(handlers::sql))
        .with_state(state)
}
