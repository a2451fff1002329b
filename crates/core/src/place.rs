//! Nearby-place types and the storage transport forms.
//!
//! Selected place identifiers are persisted as a comma-joined string;
//! the full candidate list is persisted as a JSON document. Both forms
//! must round-trip exactly (order preserving) so stored trips can be
//! re-rendered later.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Search category for a nearby-place lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Hotel,
    Restaurant,
    Cafe,
    Museum,
    HistoricalSite,
}

/// The interest categories fetched for the places-of-interest stage, in
/// the fixed concatenation order used for deterministic results.
pub const INTEREST_CATEGORIES: [PlaceCategory; 4] = [
    PlaceCategory::Restaurant,
    PlaceCategory::Cafe,
    PlaceCategory::Museum,
    PlaceCategory::HistoricalSite,
];

impl PlaceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Museum => "museum",
            Self::HistoricalSite => "historical_site",
        }
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Place
// ---------------------------------------------------------------------------

/// One nearby point of interest. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub full_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: PlaceCategory,
    pub distance_meters: i64,
}

impl Place {
    /// Identifier used in the comma-joined `selected_places` column.
    ///
    /// Commas are stripped so the delimited form round-trips exactly.
    pub fn identifier(&self) -> String {
        self.name.replace(',', "")
    }
}

// ---------------------------------------------------------------------------
// Storage transport forms
// ---------------------------------------------------------------------------

/// Join place identifiers into the comma-delimited storage form.
pub fn encode_selected(identifiers: &[String]) -> String {
    identifiers.join(",")
}

/// Split the comma-delimited storage form back into identifiers.
/// Empty segments (including the empty string) are dropped.
pub fn decode_selected(encoded: &str) -> Vec<String> {
    encoded
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Encode the full candidate list as a JSON document.
pub fn encode_candidates(places: &[Place]) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(places).map_err(|e| CoreError::Internal(e.to_string()))
}

/// Decode a stored candidate-list JSON document.
pub fn decode_candidates(document: &serde_json::Value) -> Result<Vec<Place>, CoreError> {
    serde_json::from_value(document.clone()).map_err(|e| CoreError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, distance: i64) -> Place {
        Place {
            name: name.to_string(),
            full_address: format!("{name}, Varanasi, India"),
            latitude: 25.3,
            longitude: 82.9,
            category: PlaceCategory::Restaurant,
            distance_meters: distance,
        }
    }

    #[test]
    fn identifier_strips_commas() {
        let p = place("Cafe, The Corner", 10);
        assert_eq!(p.identifier(), "Cafe The Corner");
    }

    #[test]
    fn selected_round_trip_preserves_order() {
        let ids = vec![
            "Kashi Chat Bhandar".to_string(),
            "Sarnath Museum".to_string(),
            "Dashashwamedh Ghat".to_string(),
        ];
        let encoded = encode_selected(&ids);
        assert_eq!(decode_selected(&encoded), ids);
    }

    #[test]
    fn decode_selected_empty_string_is_empty() {
        assert!(decode_selected("").is_empty());
    }

    #[test]
    fn decode_selected_drops_empty_segments() {
        assert_eq!(decode_selected("a,,b"), vec!["a", "b"]);
    }

    #[test]
    fn candidates_round_trip() {
        let places = vec![place("Ramnagar Fort", 3200), place("Assi Ghat", 1800)];
        let document = encode_candidates(&places).unwrap();
        assert_eq!(decode_candidates(&document).unwrap(), places);
    }

    #[test]
    fn empty_candidates_round_trip() {
        let document = encode_candidates(&[]).unwrap();
        assert!(decode_candidates(&document).unwrap().is_empty());
    }
}
