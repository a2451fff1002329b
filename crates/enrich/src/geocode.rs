//! Destination autosuggest against a Nominatim-style search endpoint.
//!
//! Raw results are filtered through a configurable keyword allow-list
//! (the planner targets pilgrimage destinations by default) and
//! truncated to the requested limit.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_success, EnrichError};

/// User-Agent sent on every geocoding request, as the upstream usage
/// policy requires an identifying value.
pub(crate) const USER_AGENT: &str = "wayfarer/0.1 (trip planner)";

/// Default keyword allow-list: places of worship across religions.
pub const DEFAULT_SUGGESTION_KEYWORDS: [&str; 12] = [
    "temple",
    "church",
    "mosque",
    "synagogue",
    "basilica",
    "gurdwara",
    "cathedral",
    "shrine",
    "monastery",
    "asram",
    "stupa",
    "mandir",
];

/// Raw entry as returned by the search endpoint. Coordinates arrive as
/// strings and may be malformed; such entries are dropped during
/// filtering.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSuggestion {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub name: String,
    pub lat: String,
    pub lon: String,
}

/// An accepted destination suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Client for the geocoding search endpoint.
pub struct GeocodeClient {
    client: reqwest::Client,
    base_url: String,
    keywords: Vec<String>,
}

impl GeocodeClient {
    /// * `base_url` - e.g. `https://nominatim.openstreetmap.org`.
    /// * `keywords` - allow-list applied to display names; empty means
    ///   "accept everything".
    pub fn new(base_url: String, keywords: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            keywords,
        }
    }

    /// Look up destination suggestions for a free-text query.
    ///
    /// Fetches more results than requested so the keyword filter has
    /// something to work with, then truncates to `limit`.
    pub async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, EnrichError> {
        let fetch_limit = limit.max(10);
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", &fetch_limit.to_string()),
                ("accept-language", "en"),
            ])
            .send()
            .await?;

        let raw: Vec<RawSuggestion> = ensure_success(response).await?.json().await?;
        Ok(filter_suggestions(raw, &self.keywords, limit))
    }
}

/// Apply the keyword allow-list and coordinate parsing to raw results.
///
/// A result is kept when any keyword occurs (case-insensitively) in its
/// display name or name. With an empty keyword list everything passes.
/// Order is preserved; output is truncated to `limit`.
pub fn filter_suggestions(
    raw: Vec<RawSuggestion>,
    keywords: &[String],
    limit: usize,
) -> Vec<Suggestion> {
    raw.into_iter()
        .filter(|entry| {
            if keywords.is_empty() {
                return true;
            }
            let display = entry.display_name.to_lowercase();
            let name = entry.name.to_lowercase();
            keywords
                .iter()
                .any(|k| display.contains(k.as_str()) || name.contains(k.as_str()))
        })
        .filter_map(|entry| {
            let latitude = entry.lat.parse().ok()?;
            let longitude = entry.lon.parse().ok()?;
            Some(Suggestion {
                display_name: entry.display_name,
                latitude,
                longitude,
            })
        })
        .take(limit)
        .collect()
}
