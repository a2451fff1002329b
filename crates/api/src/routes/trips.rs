//! Route definitions for the `/trips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{export, trips};
use crate::state::AppState;

/// Routes mounted at `/trips`. All owner-scoped.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips::list))
        .route("/{id}", get(trips::get))
        .route("/{id}/export", get(export::export))
        .route("/{id}/itinerary", get(export::itinerary))
}
