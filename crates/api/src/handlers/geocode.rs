//! Handler for destination autosuggest.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use wayfarer_enrich::geocode::Suggestion;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of suggestions returned.
const DEFAULT_LIMIT: usize = 5;

/// Request body for `POST /geocode/suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub query: String,
    pub limit: Option<usize>,
}

/// POST /api/v1/geocode/suggest
///
/// Free-text destination lookup. Results are already filtered through
/// the configured keyword allow-list by the client.
pub async fn suggest(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<SuggestRequest>,
) -> AppResult<Json<DataResponse<Vec<Suggestion>>>> {
    let limit = input.limit.unwrap_or(DEFAULT_LIMIT);
    let suggestions = state.enrich.geocode.suggest(&input.query, limit).await?;
    Ok(Json(DataResponse { data: suggestions }))
}
