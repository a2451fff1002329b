//! Route definitions for the `/wizard` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{enrichment, wizard};
use crate::state::AppState;

/// Routes mounted at `/wizard`. All require authentication; all
/// `{id}`-scoped operations are owner-checked against the session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(wizard::create))
        .route("/{id}", get(wizard::progress))
        // Stage submits.
        .route("/{id}/destination", post(wizard::submit_destination))
        .route("/{id}/dates", post(wizard::submit_dates))
        .route("/{id}/accommodation", post(wizard::submit_accommodation))
        .route("/{id}/transportation", post(wizard::submit_transportation))
        .route(
            "/{id}/places-of-interest",
            get(enrichment::places_of_interest).post(wizard::submit_places_of_interest),
        )
        // Enrichment views.
        .route("/{id}/accommodations", get(enrichment::accommodations))
        .route("/{id}/place-information", get(enrichment::place_information))
        // Confirmation.
        .route("/{id}/confirmation", get(wizard::confirmation_preview))
        .route("/{id}/confirm", post(wizard::confirm))
}
