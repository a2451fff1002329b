use wayfarer_enrich::geocode::DEFAULT_SUGGESTION_KEYWORDS;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Idle lifetime of a wizard session in seconds (default: `1800`).
    pub session_ttl_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Enrichment endpoint configuration.
    pub enrich: EnrichConfig,
}

/// Endpoints and credentials for the external enrichment services.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Base URL of the geocoding / place-search service.
    pub geocode_base_url: String,
    /// Base URL of the weather forecast service.
    pub weather_base_url: String,
    /// Base URL of the generative-text service.
    pub text_base_url: String,
    /// API key for the generative-text service.
    pub text_api_key: String,
    /// Model name for the generative-text service.
    pub text_model: String,
    /// Keyword allow-list applied to destination suggestions. Empty
    /// means "accept everything".
    pub suggestion_keywords: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SESSION_TTL_SECS`     | `1800`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_ttl_secs: u64 = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "1800".into())
            .parse()
            .expect("SESSION_TTL_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let enrich = EnrichConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session_ttl_secs,
            jwt,
            enrich,
        }
    }
}

impl EnrichConfig {
    /// Load enrichment configuration from environment variables.
    ///
    /// | Env Var                | Default                                       |
    /// |------------------------|-----------------------------------------------|
    /// | `GEOCODE_BASE_URL`     | `https://nominatim.openstreetmap.org`         |
    /// | `WEATHER_BASE_URL`     | `https://api.open-meteo.com`                  |
    /// | `TEXT_BASE_URL`        | `https://generativelanguage.googleapis.com`   |
    /// | `TEXT_API_KEY`         | (empty)                                       |
    /// | `TEXT_MODEL`           | `gemini-2.0-flash`                            |
    /// | `SUGGESTION_KEYWORDS`  | built-in places-of-worship list               |
    pub fn from_env() -> Self {
        let geocode_base_url = std::env::var("GEOCODE_BASE_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".into());

        let weather_base_url = std::env::var("WEATHER_BASE_URL")
            .unwrap_or_else(|_| "https://api.open-meteo.com".into());

        let text_base_url = std::env::var("TEXT_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into());

        let text_api_key = std::env::var("TEXT_API_KEY").unwrap_or_default();

        let text_model =
            std::env::var("TEXT_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".into());

        let suggestion_keywords: Vec<String> = match std::env::var("SUGGESTION_KEYWORDS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => DEFAULT_SUGGESTION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        };

        Self {
            geocode_base_url,
            weather_base_url,
            text_base_url,
            text_api_key,
            text_model,
            suggestion_keywords,
        }
    }
}
