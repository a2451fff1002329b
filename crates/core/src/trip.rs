//! Trip aggregation: combine a completed wizard state, enrichment
//! results, and a cost estimate into a single persistable record.
//!
//! [`build_trip`] is pure assembly; persistence is a separate explicit
//! step performed by the caller through the trip repository. A partial
//! wizard state never produces a record -- there are no draft trips.

use chrono::NaiveDate;
use serde::Serialize;

use crate::cost::CostEstimate;
use crate::error::CoreError;
use crate::place;
use crate::types::DbId;
use crate::weather::WeatherSnapshot;
use crate::wizard::{self, WizardState};

/// A fully-aggregated trip ready for insertion.
///
/// Field layout mirrors the `trips` table: `transportation` and
/// `selected_places` are comma-joined strings, `all_places` and
/// `weather` are JSON documents. That split is a compatibility
/// requirement of the stored layout and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrip {
    pub user_id: DbId,
    pub destination: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: i32,
    pub accommodation: String,
    pub accommodation_details: Option<String>,
    pub transportation: String,
    pub reason_for_visit: Option<String>,
    pub selected_places: String,
    pub all_places: serde_json::Value,
    pub generated_info: String,
    pub estimated_cost: i64,
    pub weather: Option<serde_json::Value>,
    pub notes: Option<String>,
}

/// Build a persistable trip record from a completed wizard state.
///
/// Fails with [`CoreError::IncompleteWizardState`] unless every
/// data-bearing stage has been populated. No side effects.
pub fn build_trip(
    state: &WizardState,
    weather: Option<&WeatherSnapshot>,
    generated_info: String,
    cost: &CostEstimate,
    owner_id: DbId,
    notes: Option<String>,
) -> Result<NewTrip, CoreError> {
    let (Some(destination), Some(dates), Some(accommodation), Some(transportation), Some(selected)) = (
        state.destination.as_ref(),
        state.dates.as_ref(),
        state.accommodation.as_ref(),
        state.transportation.as_ref(),
        state.selected_places.as_ref(),
    ) else {
        let missing = state
            .missing_stages()
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CoreError::IncompleteWizardState { missing });
    };

    let weather_document = weather
        .map(|w| serde_json::to_value(w).map_err(|e| CoreError::Internal(e.to_string())))
        .transpose()?;

    Ok(NewTrip {
        user_id: owner_id,
        destination: destination.name.clone(),
        latitude: destination.latitude,
        longitude: destination.longitude,
        start_date: dates.start_date,
        end_date: dates.end_date,
        travelers: dates.traveler_count,
        accommodation: accommodation.name.clone(),
        accommodation_details: accommodation.details.clone(),
        transportation: wizard::encode_methods(&transportation.methods),
        reason_for_visit: transportation.reason_for_visit.clone(),
        selected_places: place::encode_selected(selected),
        all_places: place::encode_candidates(&state.candidate_places)?,
        generated_info,
        estimated_cost: cost.total_cost,
        weather: weather_document,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{estimate_cost, CostParams};
    use crate::place::{Place, PlaceCategory};
    use crate::wizard::{
        Accommodation, Destination, SelectedPlaces, StagePayload, TransportMethod, Transportation,
        TripDates,
    };

    fn complete_state() -> WizardState {
        let mut state = WizardState::new();
        state
            .submit(StagePayload::Destination(Destination {
                name: "Varanasi".to_string(),
                latitude: 25.317,
                longitude: 82.973,
                display_name: "Varanasi, Uttar Pradesh, India".to_string(),
            }))
            .unwrap();
        state
            .submit(StagePayload::Dates(TripDates {
                start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
                traveler_count: 2,
            }))
            .unwrap();
        state
            .submit(StagePayload::Accommodation(Accommodation {
                name: "Ganges View Hotel".to_string(),
                details: None,
            }))
            .unwrap();
        state
            .submit(StagePayload::Transportation(Transportation {
                methods: vec![TransportMethod::Train, TransportMethod::LocalTransport],
                reason_for_visit: Some("Pilgrimage".to_string()),
            }))
            .unwrap();
        state.set_candidate_places(vec![Place {
            name: "Sarnath Museum".to_string(),
            full_address: "Sarnath, Varanasi".to_string(),
            latitude: 25.37,
            longitude: 83.02,
            category: PlaceCategory::Museum,
            distance_meters: 3900,
        }]);
        state
            .submit(StagePayload::PlacesOfInterest(SelectedPlaces {
                selected: vec!["Sarnath Museum".to_string()],
            }))
            .unwrap();
        state
    }

    #[test]
    fn build_fails_on_incomplete_state() {
        let state = WizardState::new();
        let cost = estimate_cost(1, 0, CostParams::default());
        let err = build_trip(&state, None, String::new(), &cost, 1, None).unwrap_err();
        match err {
            CoreError::IncompleteWizardState { missing } => {
                assert!(missing.contains("destination"));
                assert!(missing.contains("places_of_interest"));
            }
            other => panic!("expected IncompleteWizardState, got {other:?}"),
        }
    }

    #[test]
    fn build_carries_every_stage_payload() {
        let state = complete_state();
        let cost = estimate_cost(2, 3, CostParams::default());
        let weather = WeatherSnapshot::new(31.0, 0);

        let trip = build_trip(
            &state,
            Some(&weather),
            "<p>Info</p>".to_string(),
            &cost,
            42,
            Some("Bring sunscreen".to_string()),
        )
        .unwrap();

        assert_eq!(trip.user_id, 42);
        assert_eq!(trip.destination, "Varanasi");
        assert_eq!(trip.latitude, 25.317);
        assert_eq!(trip.travelers, 2);
        assert_eq!(trip.accommodation, "Ganges View Hotel");
        assert_eq!(trip.transportation, "train,local_transport");
        assert_eq!(trip.reason_for_visit.as_deref(), Some("Pilgrimage"));
        assert_eq!(trip.selected_places, "Sarnath Museum");
        assert_eq!(trip.generated_info, "<p>Info</p>");
        assert_eq!(trip.estimated_cost, 950);
        assert_eq!(trip.notes.as_deref(), Some("Bring sunscreen"));

        // Stored documents round-trip to the originals.
        let candidates = place::decode_candidates(&trip.all_places).unwrap();
        assert_eq!(candidates, state.candidate_places);
        let stored_weather: WeatherSnapshot =
            serde_json::from_value(trip.weather.unwrap()).unwrap();
        assert_eq!(stored_weather, weather);
    }

    #[test]
    fn build_accepts_missing_weather() {
        let state = complete_state();
        let cost = estimate_cost(2, 3, CostParams::default());
        let trip = build_trip(&state, None, "info".to_string(), &cost, 1, None).unwrap();
        assert!(trip.weather.is_none());
    }

    #[test]
    fn build_has_no_side_effects_on_state() {
        let state = complete_state();
        let before = format!("{state:?}");
        let cost = estimate_cost(2, 3, CostParams::default());
        let _ = build_trip(&state, None, "info".to_string(), &cost, 1, None).unwrap();
        assert_eq!(format!("{state:?}"), before);
    }
}
