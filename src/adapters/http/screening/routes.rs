//! HTTP routes for screening endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_screening, list_screenings, submit_screening, ScreeningHandlers};

/// Creates the screening router with all endpoints.
pub fn screening_routes(handlers: ScreeningHandlers) -> Router {
    Router::new()
        .route("/", get(list_screenings))
        .route("/:id", get(get_screening))
        .route("/:id/results", post(submit_screening))
        .with_state(handlers)
}
