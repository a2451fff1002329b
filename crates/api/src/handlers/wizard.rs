//! Handlers for the wizard flow: session lifecycle, stage submits,
//! confirmation preview, and the final confirm.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wayfarer_core::cost::{estimate_cost, CostEstimate, CostParams};
use wayfarer_core::error::CoreError;
use wayfarer_core::trip::build_trip;
use wayfarer_core::wizard::{
    Accommodation, Destination, SelectedPlaces, StagePayload, Transportation, TripDates,
    WizardStage, WizardState, STAGE_ORDER,
};
use wayfarer_db::models::trip::Trip;
use wayfarer_db::repositories::TripRepo;
use wayfarer_enrich::text::INFO_FALLBACK;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Response body for `POST /wizard`.
#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub current_stage: WizardStage,
}

/// Response body for every stage submit.
#[derive(Debug, Serialize)]
pub struct StageAdvance {
    pub current_stage: WizardStage,
    pub current_stage_number: u8,
}

/// Response body for `GET /wizard/{id}`.
#[derive(Debug, Serialize)]
pub struct WizardProgress {
    pub session_id: Uuid,
    pub current_stage: WizardStage,
    pub current_stage_number: u8,
    pub populated_stages: Vec<WizardStage>,
    pub missing_stages: Vec<WizardStage>,
}

/// Response body for `GET /wizard/{id}/confirmation`.
#[derive(Debug, Serialize)]
pub struct ConfirmationPreview {
    pub state: WizardState,
    pub nights: i64,
    pub cost: CostEstimate,
}

/// Request body for `POST /wizard/{id}/confirm`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmRequest {
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

/// POST /api/v1/wizard
///
/// Start a fresh wizard session for the authenticated user.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<(StatusCode, Json<SessionCreated>)> {
    let session_id = state.sessions.create(user.user_id).await;
    tracing::info!(user_id = user.user_id, %session_id, "Wizard session started");

    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id,
            current_stage: WizardStage::Destination,
        }),
    ))
}

/// GET /api/v1/wizard/{id}
///
/// Report the session's progress through the stages.
pub async fn progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> AppResult<Json<WizardProgress>> {
    let snapshot = state
        .sessions
        .snapshot(id, user.user_id)
        .await
        .ok_or(AppError::SessionNotFound(id))?;

    let missing = snapshot.missing_stages();
    let populated: Vec<WizardStage> = STAGE_ORDER
        .into_iter()
        .filter(|s| {
            !missing.contains(s)
                && !matches!(s, WizardStage::PlaceInformation | WizardStage::Confirmation)
        })
        .collect();

    let current = snapshot.current_stage();
    Ok(Json(WizardProgress {
        session_id: id,
        current_stage: current,
        current_stage_number: current.to_number(),
        populated_stages: populated,
        missing_stages: missing,
    }))
}

// ---------------------------------------------------------------------------
// Stage submits
// ---------------------------------------------------------------------------

/// POST /api/v1/wizard/{id}/destination
pub async fn submit_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(payload): Json<Destination>,
) -> AppResult<Json<StageAdvance>> {
    submit(&state, id, &user, StagePayload::Destination(payload)).await
}

/// POST /api/v1/wizard/{id}/dates
pub async fn submit_dates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(payload): Json<TripDates>,
) -> AppResult<Json<StageAdvance>> {
    submit(&state, id, &user, StagePayload::Dates(payload)).await
}

/// POST /api/v1/wizard/{id}/accommodation
pub async fn submit_accommodation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(payload): Json<Accommodation>,
) -> AppResult<Json<StageAdvance>> {
    submit(&state, id, &user, StagePayload::Accommodation(payload)).await
}

/// POST /api/v1/wizard/{id}/transportation
pub async fn submit_transportation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(payload): Json<Transportation>,
) -> AppResult<Json<StageAdvance>> {
    submit(&state, id, &user, StagePayload::Transportation(payload)).await
}

/// POST /api/v1/wizard/{id}/places-of-interest
pub async fn submit_places_of_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(payload): Json<SelectedPlaces>,
) -> AppResult<Json<StageAdvance>> {
    submit(&state, id, &user, StagePayload::PlacesOfInterest(payload)).await
}

/// Run one stage submit against the session.
///
/// Validation and prerequisite enforcement happen inside
/// [`WizardState::submit`]; a rejected submit leaves the session
/// untouched.
async fn submit(
    state: &AppState,
    id: Uuid,
    user: &AuthUser,
    payload: StagePayload,
) -> AppResult<Json<StageAdvance>> {
    let stage = payload.stage();
    let result = state
        .sessions
        .with_session(id, user.user_id, |s| s.state.submit(payload))
        .await
        .ok_or(AppError::SessionNotFound(id))?;

    let current = result?;
    tracing::debug!(%id, submitted = %stage, now_on = %current, "Stage submitted");

    Ok(Json(StageAdvance {
        current_stage: current,
        current_stage_number: current.to_number(),
    }))
}

// ---------------------------------------------------------------------------
// Confirmation
// ---------------------------------------------------------------------------

/// GET /api/v1/wizard/{id}/confirmation
///
/// Preview the accumulated state plus the cost estimate, without
/// persisting anything.
pub async fn confirmation_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
) -> AppResult<Json<ConfirmationPreview>> {
    let snapshot = state
        .sessions
        .snapshot(id, user.user_id)
        .await
        .ok_or(AppError::SessionNotFound(id))?;

    snapshot.check_prerequisites(WizardStage::Confirmation)?;
    let dates = snapshot
        .dates
        .ok_or_else(|| incomplete(&snapshot))?;

    let nights = dates.nights();
    let cost = estimate_cost(dates.traveler_count as i64, nights, CostParams::default());

    Ok(Json(ConfirmationPreview {
        state: snapshot,
        nights,
        cost,
    }))
}

/// POST /api/v1/wizard/{id}/confirm
///
/// Aggregate the completed state with enrichment results and the cost
/// estimate, persist the trip, and discard the session. Weather and
/// generated-text failures degrade (null weather, fallback text), they
/// never abort the confirm.
pub async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    user: AuthUser,
    Json(input): Json<ConfirmRequest>,
) -> AppResult<(StatusCode, Json<Trip>)> {
    let snapshot = state
        .sessions
        .snapshot(id, user.user_id)
        .await
        .ok_or(AppError::SessionNotFound(id))?;

    let (Some(destination), Some(dates)) = (snapshot.destination.clone(), snapshot.dates) else {
        return Err(incomplete(&snapshot).into());
    };

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
            tracing::warn!(error = %e, "Weather lookup failed, storing trip without weather");
            None
        }
    };

    let generated_info = match state
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

    let cost = estimate_cost(
        dates.traveler_count as i64,
        dates.nights(),
        CostParams::default(),
    );

    let new_trip = build_trip(
        &snapshot,
        weather.as_ref(),
        generated_info,
        &cost,
        user.user_id,
        input.notes,
    )?;

    let trip = TripRepo::insert(&state.pool, &new_trip).await?;
    state.sessions.remove(id, user.user_id).await;
    tracing::info!(trip_id = trip.id, user_id = user.user_id, "Trip confirmed");

    Ok((StatusCode::CREATED, Json(trip)))
}

/// Build the incomplete-state error from whatever is still missing.
pub(crate) fn incomplete(snapshot: &WizardState) -> CoreError {
    let missing = snapshot
        .missing_stages()
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    CoreError::IncompleteWizardState { missing }
}
