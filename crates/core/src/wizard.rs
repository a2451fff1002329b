//! Wizard stage definitions, stage payloads, and the per-session state
//! accumulator.
//!
//! The trip-planning flow is a fixed sequence of stages. Each stage's
//! submit payload is an explicit typed struct validated at the boundary
//! before it is merged into [`WizardState`]; submitting a stage whose
//! prerequisites are missing is rejected with
//! [`CoreError::PrerequisiteMissing`] (strict policy -- no sentinel
//! defaults are ever substituted).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::place::Place;

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// The seven stages of the trip-planning wizard, in order.
///
/// `PlaceInformation` and `Confirmation` carry no submit payload:
/// the former is an enrichment view (weather + generated destination
/// info), the latter triggers aggregation and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Destination,
    Dates,
    Accommodation,
    PlaceInformation,
    Transportation,
    PlacesOfInterest,
    Confirmation,
}

/// Total number of stages in the wizard.
pub const TOTAL_STAGES: u8 = 7;

/// Minimum stage number (1-based).
pub const MIN_STAGE: u8 = 1;

/// Maximum stage number (1-based).
pub const MAX_STAGE: u8 = 7;

/// All stages in wizard order.
pub const STAGE_ORDER: [WizardStage; TOTAL_STAGES as usize] = [
    WizardStage::Destination,
    WizardStage::Dates,
    WizardStage::Accommodation,
    WizardStage::PlaceInformation,
    WizardStage::Transportation,
    WizardStage::PlacesOfInterest,
    WizardStage::Confirmation,
];

impl WizardStage {
    /// Convert a 1-based stage number to a `WizardStage`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Destination),
            2 => Ok(Self::Dates),
            3 => Ok(Self::Accommodation),
            4 => Ok(Self::PlaceInformation),
            5 => Ok(Self::Transportation),
            6 => Ok(Self::PlacesOfInterest),
            7 => Ok(Self::Confirmation),
            _ => Err(CoreError::Validation(format!(
                "Invalid stage number {n}. Must be between {MIN_STAGE} and {MAX_STAGE}"
            ))),
        }
    }

    /// Convert to a 1-based stage number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Destination => 1,
            Self::Dates => 2,
            Self::Accommodation => 3,
            Self::PlaceInformation => 4,
            Self::Transportation => 5,
            Self::PlacesOfInterest => 6,
            Self::Confirmation => 7,
        }
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Dates => "dates",
            Self::Accommodation => "accommodation",
            Self::PlaceInformation => "place_information",
            Self::Transportation => "transportation",
            Self::PlacesOfInterest => "places_of_interest",
            Self::Confirmation => "confirmation",
        }
    }

    /// Human-readable label for the stage.
    pub fn label(self) -> &'static str {
        match self {
            Self::Destination => "Destination",
            Self::Dates => "Dates",
            Self::Accommodation => "Accommodation",
            Self::PlaceInformation => "Place Information",
            Self::Transportation => "Transportation",
            Self::PlacesOfInterest => "Places of Interest",
            Self::Confirmation => "Confirmation",
        }
    }
}

impl std::fmt::Display for WizardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transport methods
// ---------------------------------------------------------------------------

/// A means of travel selected on the transportation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMethod {
    Flight,
    Train,
    CarRental,
    LocalTransport,
}

impl TransportMethod {
    /// Parse a method string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "flight" => Ok(Self::Flight),
            "train" => Ok(Self::Train),
            "car_rental" => Ok(Self::CarRental),
            "local_transport" => Ok(Self::LocalTransport),
            _ => Err(CoreError::Validation(format!(
                "Invalid transport method '{s}'. Must be one of: flight, train, car_rental, local_transport"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::CarRental => "car_rental",
            Self::LocalTransport => "local_transport",
        }
    }
}

/// Join transport methods into the comma-delimited storage form.
pub fn encode_methods(methods: &[TransportMethod]) -> String {
    methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split the comma-delimited storage form back into transport methods.
pub fn decode_methods(encoded: &str) -> Result<Vec<TransportMethod>, CoreError> {
    encoded
        .split(',')
        .filter(|s| !s.is_empty())
        .map(TransportMethod::from_str_db)
        .collect()
}

// ---------------------------------------------------------------------------
// Stage payloads
// ---------------------------------------------------------------------------

/// Destination stage payload. All fields are required before leaving
/// the stage; coordinates come from the accepted geocoding suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Destination {
    #[validate(length(min = 1, message = "destination name is required"))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude must be within [-180, 180]"))]
    pub longitude: f64,
    #[validate(length(min = 1, message = "display name is required"))]
    pub display_name: String,
}

/// Dates stage payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_date_order"))]
pub struct TripDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1, message = "at least one traveler is required"))]
    pub traveler_count: i32,
}

impl TripDates {
    /// Number of nights between start and end date.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

fn validate_date_order(dates: &TripDates) -> Result<(), ValidationError> {
    if dates.end_date < dates.start_date {
        let mut err = ValidationError::new("date_order");
        err.message = Some("end_date must not be before start_date".into());
        return Err(err);
    }
    Ok(())
}

/// Accommodation stage payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Accommodation {
    #[validate(length(min = 1, message = "accommodation name is required"))]
    pub name: String,
    pub details: Option<String>,
}

/// Transportation stage payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Transportation {
    #[validate(length(min = 1, message = "select at least one transport method"))]
    pub methods: Vec<TransportMethod>,
    pub reason_for_visit: Option<String>,
}

/// Places-of-interest stage payload: the identifiers the user picked
/// out of the fetched candidate list. An empty selection is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPlaces {
    pub selected: Vec<String>,
}

/// Tagged per-stage submit payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StagePayload {
    Destination(Destination),
    Dates(TripDates),
    Accommodation(Accommodation),
    Transportation(Transportation),
    PlacesOfInterest(SelectedPlaces),
}

impl StagePayload {
    /// The wizard stage this payload belongs to.
    pub fn stage(&self) -> WizardStage {
        match self {
            Self::Destination(_) => WizardStage::Destination,
            Self::Dates(_) => WizardStage::Dates,
            Self::Accommodation(_) => WizardStage::Accommodation,
            Self::Transportation(_) => WizardStage::Transportation,
            Self::PlacesOfInterest(_) => WizardStage::PlacesOfInterest,
        }
    }
}

// ---------------------------------------------------------------------------
// Wizard state
// ---------------------------------------------------------------------------

/// Partial trip data accumulated across the wizard stages.
///
/// One `WizardState` exists per in-progress session and is exclusively
/// owned by it. Stage submits mutate it in place via [`submit`]; trip
/// aggregation reads it; it is discarded after confirmation or on
/// session expiry.
///
/// [`submit`]: WizardState::submit
#[derive(Debug, Clone, Default, Serialize)]
pub struct WizardState {
    pub destination: Option<Destination>,
    pub dates: Option<TripDates>,
    pub accommodation: Option<Accommodation>,
    pub transportation: Option<Transportation>,
    /// Candidate places fetched for the places-of-interest stage, in
    /// the fixed category order. May legitimately be empty when every
    /// upstream lookup failed.
    pub candidate_places: Vec<Place>,
    /// Identifiers picked by the user; `None` until the stage is
    /// submitted (an empty selection is a valid submission).
    pub selected_places: Option<Vec<String>>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and merge a stage payload.
    ///
    /// Rejects the submit without mutating state when payload
    /// validation fails or when any prerequisite stage is unpopulated.
    /// On success returns the stage the wizard is now on.
    pub fn submit(&mut self, payload: StagePayload) -> Result<WizardStage, CoreError> {
        self.check_prerequisites(payload.stage())?;

        match payload {
            StagePayload::Destination(destination) => {
                destination.validate()?;
                self.destination = Some(destination);
            }
            StagePayload::Dates(dates) => {
                dates.validate()?;
                self.dates = Some(dates);
            }
            StagePayload::Accommodation(accommodation) => {
                accommodation.validate()?;
                self.accommodation = Some(accommodation);
            }
            StagePayload::Transportation(transportation) => {
                transportation.validate()?;
                self.transportation = Some(transportation);
            }
            StagePayload::PlacesOfInterest(selection) => {
                self.validate_selection(&selection)?;
                self.selected_places = Some(selection.selected);
            }
        }

        Ok(self.current_stage())
    }

    /// Verify that every data-bearing stage before `stage` is populated.
    ///
    /// `place_information` carries no data and is skipped; entering it
    /// (or any later stage) still requires everything before it.
    pub fn check_prerequisites(&self, stage: WizardStage) -> Result<(), CoreError> {
        let entered = stage.to_number();
        for prior in STAGE_ORDER {
            if prior.to_number() >= entered {
                break;
            }
            if !self.stage_populated(prior) {
                return Err(CoreError::PrerequisiteMissing {
                    stage,
                    missing: prior,
                });
            }
        }
        Ok(())
    }

    /// Whether a data-bearing stage has been populated. Stages with no
    /// payload (`place_information`, `confirmation`) report `true`.
    fn stage_populated(&self, stage: WizardStage) -> bool {
        match stage {
            WizardStage::Destination => self.destination.is_some(),
            WizardStage::Dates => self.dates.is_some(),
            WizardStage::Accommodation => self.accommodation.is_some(),
            WizardStage::Transportation => self.transportation.is_some(),
            WizardStage::PlacesOfInterest => self.selected_places.is_some(),
            WizardStage::PlaceInformation | WizardStage::Confirmation => true,
        }
    }

    /// The stage the wizard is currently on: the first data-bearing
    /// stage that is not yet populated, or `Confirmation` once all are.
    pub fn current_stage(&self) -> WizardStage {
        for stage in STAGE_ORDER {
            if !self.stage_populated(stage) {
                return stage;
            }
        }
        WizardStage::Confirmation
    }

    /// Data-bearing stages that have not been populated yet, in order.
    pub fn missing_stages(&self) -> Vec<WizardStage> {
        STAGE_ORDER
            .into_iter()
            .filter(|s| !self.stage_populated(*s))
            .collect()
    }

    /// Whether every stage required by trip aggregation is populated.
    pub fn is_complete(&self) -> bool {
        self.missing_stages().is_empty()
    }

    /// Replace the candidate place list (set by the places-of-interest
    /// enrichment fetch before the user makes a selection).
    pub fn set_candidate_places(&mut self, places: Vec<Place>) {
        self.candidate_places = places;
    }

    /// Every selected identifier must refer to a fetched candidate.
    fn validate_selection(&self, selection: &SelectedPlaces) -> Result<(), CoreError> {
        for id in &selection.selected {
            if !self.candidate_places.iter().any(|p| p.identifier() == *id) {
                return Err(CoreError::Validation(format!(
                    "Selected place '{id}' is not among the fetched candidates"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
