//! Nearby-place search around a destination's coordinates.
//!
//! Queries a Nominatim-style endpoint with a bounded viewbox, computes
//! each hit's distance from the origin with the equirectangular
//! approximation, drops anything beyond the radius (boundary
//! inclusive), and returns the survivors sorted ascending by distance.

use serde::Deserialize;

use wayfarer_core::geo;
use wayfarer_core::place::{Place, PlaceCategory};

use crate::error::{ensure_success, EnrichError};
use crate::geocode::USER_AGENT;

/// Search radius for the accommodation lookup, in meters.
pub const ACCOMMODATION_RADIUS_M: f64 = 5000.0;

/// Search radius for the interest-category lookups, in meters.
pub const INTEREST_RADIUS_M: f64 = 4000.0;

/// Half-width of the bounding viewbox, in degrees.
const VIEWBOX_HALF_WIDTH: f64 = 0.1;

/// Maximum raw results requested per lookup.
const FETCH_LIMIT: usize = 50;

/// Raw entry as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNearby {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

/// Client for the nearby-place search endpoint.
pub struct PlacesClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlacesClient {
    /// * `base_url` - e.g. `https://nominatim.openstreetmap.org`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Search for places of one category near the given coordinates.
    pub async fn nearby(
        &self,
        latitude: f64,
        longitude: f64,
        category: PlaceCategory,
        radius_m: f64,
    ) -> Result<Vec<Place>, EnrichError> {
        let viewbox = format!(
            "{},{},{},{}",
            longitude - VIEWBOX_HALF_WIDTH,
            latitude - VIEWBOX_HALF_WIDTH,
            longitude + VIEWBOX_HALF_WIDTH,
            latitude + VIEWBOX_HALF_WIDTH
        );
        let (param, value) = category_param(category);

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("format", "json"),
                ("limit", &FETCH_LIMIT.to_string()),
                ("accept-language", "en"),
                ("viewbox", &viewbox),
                ("bounded", "1"),
                (param, value),
            ])
            .send()
            .await?;

        let raw: Vec<RawNearby> = ensure_success(response).await?.json().await?;
        let places = shape_places(raw, latitude, longitude, category, radius_m);

        tracing::debug!(
            category = %category,
            count = places.len(),
            "Nearby-place lookup complete"
        );
        Ok(places)
    }
}

/// Query parameter selecting one search category upstream.
fn category_param(category: PlaceCategory) -> (&'static str, &'static str) {
    match category {
        PlaceCategory::Hotel => ("amenity", "hotel"),
        PlaceCategory::Restaurant => ("amenity", "restaurant"),
        PlaceCategory::Cafe => ("amenity", "cafe"),
        PlaceCategory::Museum => ("tourism", "museum"),
        PlaceCategory::HistoricalSite => ("historic", "yes"),
    }
}

/// Turn raw search hits into [`Place`]s: parse coordinates, compute the
/// distance from the origin, drop anything beyond `radius_m` (a place
/// at exactly the radius is kept), and sort ascending by distance.
pub fn shape_places(
    raw: Vec<RawNearby>,
    origin_lat: f64,
    origin_lon: f64,
    category: PlaceCategory,
    radius_m: f64,
) -> Vec<Place> {
    let mut places: Vec<Place> = raw
        .into_iter()
        .filter_map(|entry| {
            let latitude: f64 = entry.lat.parse().ok()?;
            let longitude: f64 = entry.lon.parse().ok()?;
            let distance = geo::distance_meters(origin_lat, origin_lon, latitude, longitude);
            if !geo::within_radius(distance, radius_m) {
                return None;
            }

            // Prefer the short name; fall back to the first segment of
            // the display name.
            let name = if entry.name.is_empty() {
                entry
                    .display_name
                    .split(',')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            } else {
                entry.name.clone()
            };

            Some(Place {
                name,
                full_address: entry.display_name,
                latitude,
                longitude,
                category,
                distance_meters: distance as i64,
            })
        })
        .collect();

    places.sort_by_key(|p| p.distance_meters);
    places
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, lat: f64, lon: f64) -> RawNearby {
        RawNearby {
            name: name.to_string(),
            display_name: format!("{name}, Varanasi, Uttar Pradesh, India"),
            lat: lat.to_string(),
            lon: lon.to_string(),
        }
    }

    #[test]
    fn sorts_ascending_by_distance() {
        let shaped = shape_places(
            vec![raw("Far Cafe", 0.02, 0.0), raw("Near Cafe", 0.005, 0.0)],
            0.0,
            0.0,
            PlaceCategory::Cafe,
            INTEREST_RADIUS_M,
        );
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0].name, "Near Cafe");
        assert!(shaped[0].distance_meters < shaped[1].distance_meters);
    }

    #[test]
    fn place_at_exact_radius_is_included() {
        let lat = 0.01;
        let boundary = geo::distance_meters(0.0, 0.0, lat, 0.0);
        let shaped = shape_places(
            vec![raw("Boundary Shrine", lat, 0.0)],
            0.0,
            0.0,
            PlaceCategory::HistoricalSite,
            boundary,
        );
        assert_eq!(shaped.len(), 1);
    }

    #[test]
    fn place_beyond_radius_is_excluded() {
        let lat = 0.01;
        let distance = geo::distance_meters(0.0, 0.0, lat, 0.0);
        let shaped = shape_places(
            vec![raw("Too Far Shrine", lat, 0.0)],
            0.0,
            0.0,
            PlaceCategory::HistoricalSite,
            distance - 0.001,
        );
        assert!(shaped.is_empty());
    }

    #[test]
    fn falls_back_to_first_display_name_segment() {
        let mut entry = raw("", 0.001, 0.0);
        entry.display_name = "Kashi Chat Bhandar, Godowlia, Varanasi".to_string();
        let shaped = shape_places(vec![entry], 0.0, 0.0, PlaceCategory::Restaurant, 5000.0);
        assert_eq!(shaped[0].name, "Kashi Chat Bhandar");
    }

    #[test]
    fn unparseable_coordinates_are_dropped() {
        let mut entry = raw("Broken", 0.0, 0.0);
        entry.lat = "garbage".to_string();
        let shaped = shape_places(vec![entry], 0.0, 0.0, PlaceCategory::Cafe, 5000.0);
        assert!(shaped.is_empty());
    }

    #[test]
    fn category_is_stamped_onto_results() {
        let shaped = shape_places(
            vec![raw("Bharat Kala Bhavan", 0.001, 0.0)],
            0.0,
            0.0,
            PlaceCategory::Museum,
            5000.0,
        );
        assert_eq!(shaped[0].category, PlaceCategory::Museum);
    }
}
