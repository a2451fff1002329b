pub mod auth;
pub mod geocode;
pub mod health;
pub mod trips;
pub mod wizard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                          create account (public)
/// /auth/login                           login (public)
///
/// /geocode/suggest                      destination autosuggest (POST)
///
/// /wizard                               start session (POST)
/// /wizard/{id}                          progress (GET)
/// /wizard/{id}/destination              stage submit (POST)
/// /wizard/{id}/dates                    stage submit (POST)
/// /wizard/{id}/accommodation            stage submit (POST)
/// /wizard/{id}/transportation           stage submit (POST)
/// /wizard/{id}/places-of-interest       candidates (GET), stage submit (POST)
/// /wizard/{id}/accommodations           nearby hotels (GET)
/// /wizard/{id}/place-information        weather + destination info (GET)
/// /wizard/{id}/confirmation             preview with cost estimate (GET)
/// /wizard/{id}/confirm                  aggregate + persist (POST)
///
/// /trips                                list own trips (GET)
/// /trips/{id}                           single trip, owner only (GET)
/// /trips/{id}/export                    rendering context (GET)
/// /trips/{id}/itinerary                 generated itinerary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, login).
        .nest("/auth", auth::router())
        // Destination autosuggest.
        .nest("/geocode", geocode::router())
        // The wizard flow: sessions, stage submits, enrichment views.
        .nest("/wizard", wizard::router())
        // Stored trips and export contexts.
        .nest("/trips", trips::router())
}
