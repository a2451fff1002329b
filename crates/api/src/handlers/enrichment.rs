//! Session-scoped enrichment handlers: accommodation lookup, candidate
//! place fetch, and the place-information view.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;
use wayfarer_core::place::{Place, INTEREST_CATEGORIES};
use wayfarer_core::weather::WeatherSnapshot;
use wayfarer_core::wizard::{Destination, WizardStage};
use wayfarer_enrich::places::{ACCOMMODATION_RADIUS_M, INTEREST_RADIUS_M};
use wayfarer_enrich::text::INFO_FALLBACK;

use crate::error::{AppError, AppResult};
use crate::handlers::wizard::incomplete;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /wizard/{id}/place-information`.
#[derive(Debug, Serialize)]
pub struct PlaceInformation {
    /// `null` when the weather lookup failed or had no samples.
    pub weather: Option<WeatherSnapshot>,
    /// Generated destination briefing, or the fallback text.
    pub information: String,
}

/// GET /api/v1/wizard/{id}/accommodations
///
/// Nearby hotels within 5000 m of the chosen destination.
pub async fn accommodations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Place>>>> {
    let (destination, _) = session_destination(&state, id, &user, WizardStage::Accommodation).await?;

    let hotels = state
        .enrich
        .places
        .nearby(
            destination.latitude,
            destination.longitude,
            wayfarer_core::place::PlaceCategory::Hotel,
            ACCOMMODATION_RADIUS_M,
        )
        .await?;

    Ok(Json(DataResponse { data: hotels }))
}

/// GET /api/v1/wizard/{id}/places-of-interest
///
/// Fetch candidate places for all four interest categories concurrently
/// (4000 m radius each), concatenate them in the fixed category order,
/// and cache the list on the session so a later selection can be
/// validated against it. A failed category lookup degrades to an empty
/// list for that category.
pub async fn places_of_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Place>>>> {
    let (destination, _) =
        session_destination(&state, id, &user, WizardStage::PlacesOfInterest).await?;

    let lookups = INTEREST_CATEGORIES.iter().map(|&category| {
        let places = &state.enrich.places;
        let (lat, lon) = (destination.latitude, destination.longitude);
        async move {
            match places.nearby(lat, lon, category, INTEREST_RADIUS_M).await {
                Ok(found) => found,
                Err(e) => {
                    tracing::warn!(%category, error = %e, "Place lookup failed, skipping category");
                    Vec::new()
                }
            }
        }
    });

    // join_all preserves submission order, so the concatenation follows
    // the fixed category order.
    let candidates: Vec<Place> = futures::future::join_all(lookups)
        .await
        .into_iter()
        .flatten()
        .collect();

    state
        .sessions
        .with_session(id, user.user_id, |s| {
            s.state.set_candidate_places(candidates.clone())
        })
        .await
        .ok_or(AppError::SessionNotFound(id))?;

    Ok(Json(DataResponse { data: candidates }))
}

/// GET /api/v1/wizard/{id}/place-information
///
/// Weather for the trip window plus a generated destination briefing.
/// Both lookups degrade on failure (`weather: null`, fallback text);
/// this endpoint never surfaces an upstream 5xx.
pub async fn place_information(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> AppResult<Json<PlaceInformation>> {
    let (destination, dates) =
        session_destination(&state, id, &user, WizardStage::PlaceInformation).await?;
    let dates = dates.ok_or_else(|| AppError::InternalError("dates missing after prerequisite check".into()))?;

    let weather = match state
        .enrich
        .weather
        .fetch(
            destination.latitude,
            destination.longitude,
            dates.start_date,
            dates.end_date,
        )
        .await
    {
        Ok(sample) => sample,
        Err(e) => {
            tracing::warn!(error = %e, "Weather lookup failed, responding without weather");
            None
        }
    };

    let information = match state
        .enrich
        .text
        .describe(&destination.name, dates.start_date, dates.end_date)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Destination info generation failed, using fallback");
            INFO_FALLBACK.to_string()
        }
    };

    Ok(Json(PlaceInformation {
        weather,
        information,
    }))
}

/// Snapshot the session, enforce the prerequisites for `stage`, and
/// hand back the destination (always populated once the prerequisite
/// check passes) plus the dates if present.
async fn session_destination(
    state: &AppState,
    id: Uuid,
    user: &AuthUser,
    stage: WizardStage,
) -> AppResult<(Destination, Option<wayfarer_core::wizard::TripDates>)> {
    let snapshot = state
        .sessions
        .snapshot(id, user.user_id)
        .await
        .ok_or(AppError::SessionNotFound(id))?;

    snapshot.check_prerequisites(stage)?;

    let Some(destination) = snapshot.destination.clone() else {
        return Err(incomplete(&snapshot).into());
    };
    Ok((destination, snapshot.dates))
}
