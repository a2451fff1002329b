//! Handlers for the `/trips` resource (list, get).

use axum::extract::{Path, State};
use axum::Json;
use wayfarer_core::error::CoreError;
use wayfarer_core::types::DbId;
use wayfarer_db::models::trip::Trip;
use wayfarer_db::repositories::TripRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trips
///
/// List the caller's trips, newest start date first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Trip>>>> {
    let trips = TripRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: trips }))
}

/// GET /api/v1/trips/{id}
///
/// Fetch one trip. A trip owned by someone else reports 404, the same
/// as a trip that does not exist.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: AuthUser,
) -> AppResult<Json<Trip>> {
    let trip = load_owned_trip(&state, id, user.user_id).await?;
    Ok(Json(trip))
}

/// Load a trip and enforce ownership without leaking existence.
pub(crate) async fn load_owned_trip(
    state: &AppState,
    id: DbId,
    user_id: DbId,
) -> AppResult<Trip> {
    let trip = TripRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|t| t.user_id == user_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "trip",
            id,
        }))?;
    Ok(trip)
}
