//! Export handlers: resolve a stored trip into the deterministic
//! rendering context consumed by the external document renderer, and
//! the generated day-by-day itinerary built on top of it.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use wayfarer_core::error::CoreError;
use wayfarer_core::export::{format_date, format_money, TripExportContext};
use wayfarer_core::place::{decode_candidates, decode_selected};
use wayfarer_core::types::DbId;
use wayfarer_core::weather::WeatherSnapshot;
use wayfarer_core::wizard::decode_methods;
use wayfarer_db::models::trip::Trip;
use wayfarer_enrich::text::ITINERARY_FALLBACK;

use crate::error::AppResult;
use crate::handlers::trips::load_owned_trip;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `GET /trips/{id}/itinerary`.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub trip_id: DbId,
    /// Generated day-by-day itinerary, or the fallback text.
    pub itinerary: String,
}

/// GET /api/v1/trips/{id}/export
///
/// Deterministic rendering context: every field resolved to its
/// presentation form. Rendering the document itself is the caller's
/// concern.
pub async fn export(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: AuthUser,
) -> AppResult<Json<TripExportContext>> {
    let trip = load_owned_trip(&state, id, user.user_id).await?;
    let context = export_context(&trip)?;
    Ok(Json(context))
}

/// GET /api/v1/trips/{id}/itinerary
///
/// The export context's trip data re-processed through the generative
/// itinerary client. Generation failure degrades to the fallback text.
pub async fn itinerary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: AuthUser,
) -> AppResult<Json<ItineraryResponse>> {
    let trip = load_owned_trip(&state, id, user.user_id).await?;
    let context = export_context(&trip)?;

    let itinerary = match state.enrich.text.itinerary(&context).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Itinerary generation failed, using fallback");
            ITINERARY_FALLBACK.to_string()
        }
    };

    Ok(Json(ItineraryResponse {
        trip_id: trip.id,
        itinerary,
    }))
}

/// Resolve a stored trip row into the rendering context.
///
/// Decodes the storage transport forms back into structured lists and
/// formats dates and money for presentation.
pub fn export_context(trip: &Trip) -> Result<TripExportContext, CoreError> {
    let transportation = decode_methods(&trip.transportation)?
        .iter()
        .map(|m| m.as_str().to_string())
        .collect();

    let weather = trip
        .weather
        .as_ref()
        .map(|w| {
            serde_json::from_value::<WeatherSnapshot>(w.clone())
                .map_err(|e| CoreError::Internal(e.to_string()))
        })
        .transpose()?;

    Ok(TripExportContext {
        trip_id: trip.id,
        destination: trip.destination.clone(),
        start_date: format_date(trip.start_date),
        end_date: format_date(trip.end_date),
        travelers: trip.travelers,
        accommodation: trip.accommodation.clone(),
        accommodation_details: trip.accommodation_details.clone(),
        transportation,
        reason_for_visit: trip.reason_for_visit.clone(),
        selected_places: decode_selected(&trip.selected_places),
        all_places: decode_candidates(&trip.all_places)?,
        generated_info: trip.generated_info.clone(),
        estimated_cost: format_money(trip.estimated_cost),
        weather,
        notes: trip.notes.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wayfarer_core::place::{Place, PlaceCategory};
    use wayfarer_core::types::Timestamp;

    fn stored_trip() -> Trip {
        let places = vec![Place {
            name: "Sarnath Museum".to_string(),
            full_address: "Sarnath, Varanasi".to_string(),
            latitude: 25.37,
            longitude: 83.02,
            category: PlaceCategory::Museum,
            distance_meters: 3900,
        }];
        Trip {
            id: 7,
            user_id: 1,
            destination: "Varanasi".to_string(),
            latitude: 25.317,
            longitude: 82.973,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            travelers: 2,
            accommodation: "Ganges View Hotel".to_string(),
            accommodation_details: Some("River-facing room".to_string()),
            transportation: "train,local_transport".to_string(),
            reason_for_visit: Some("Pilgrimage".to_string()),
            selected_places: "Sarnath Museum".to_string(),
            all_places: serde_json::to_value(&places).unwrap(),
            generated_info: "<p>Info</p>".to_string(),
            estimated_cost: 950,
            weather: Some(serde_json::to_value(WeatherSnapshot::new(31.0, 0)).unwrap()),
            notes: None,
            created_at: Timestamp::default(),
        }
    }

    #[test]
    fn context_resolves_every_field() {
        let context = export_context(&stored_trip()).unwrap();
        assert_eq!(context.trip_id, 7);
        assert_eq!(context.start_date, "2025-03-01");
        assert_eq!(context.end_date, "2025-03-04");
        assert_eq!(context.estimated_cost, "950.00");
        assert_eq!(context.transportation, vec!["train", "local_transport"]);
        assert_eq!(context.selected_places, vec!["Sarnath Museum"]);
        assert_eq!(context.all_places.len(), 1);
        assert_eq!(context.weather.unwrap().icon, "sun");
    }

    #[test]
    fn context_tolerates_missing_weather() {
        let mut trip = stored_trip();
        trip.weather = None;
        let context = export_context(&trip).unwrap();
        assert!(context.weather.is_none());
    }

    #[test]
    fn context_is_deterministic() {
        let trip = stored_trip();
        assert_eq!(export_context(&trip).unwrap(), export_context(&trip).unwrap());
    }

    #[test]
    fn corrupt_transport_string_is_an_error() {
        let mut trip = stored_trip();
        trip.transportation = "hovercraft".to_string();
        assert!(export_context(&trip).is_err());
    }
}
