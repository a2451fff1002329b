use std::sync::Arc;

use wayfarer_enrich::geocode::GeocodeClient;
use wayfarer_enrich::places::PlacesClient;
use wayfarer_enrich::text::TextClient;
use wayfarer_enrich::weather::WeatherClient;

use crate::config::{EnrichConfig, ServerConfig};
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wayfarer_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory wizard session store.
    pub sessions: Arc<SessionStore>,
    /// External enrichment clients.
    pub enrich: Arc<EnrichClients>,
}

/// The four external enrichment clients, constructed once at startup.
pub struct EnrichClients {
    pub geocode: GeocodeClient,
    pub places: PlacesClient,
    pub weather: WeatherClient,
    pub text: TextClient,
}

impl EnrichClients {
    pub fn from_config(config: &EnrichConfig) -> Self {
        Self {
            geocode: GeocodeClient::new(
                config.geocode_base_url.clone(),
                config.suggestion_keywords.clone(),
            ),
            places: PlacesClient::new(config.geocode_base_url.clone()),
            weather: WeatherClient::new(config.weather_base_url.clone()),
            text: TextClient::new(
                config.text_base_url.clone(),
                config.text_api_key.clone(),
                config.text_model.clone(),
            ),
        }
    }
}
