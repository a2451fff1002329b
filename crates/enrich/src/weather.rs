//! Weather lookup against an Open-Meteo-style forecast endpoint.

use chrono::NaiveDate;
use serde::Deserialize;

use wayfarer_core::weather::WeatherSnapshot;

use crate::error::{ensure_success, EnrichError};

/// Hourly series from the forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub weathercode: Vec<i32>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    hourly: HourlySeries,
}

/// Client for the weather forecast endpoint.
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// * `base_url` - e.g. `https://api.open-meteo.com`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the forecast for the trip window and reduce it to the
    /// first available hourly sample. `Ok(None)` means the upstream
    /// responded but had no samples for the window.
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Option<WeatherSnapshot>, EnrichError> {
        let response = self
            .client
            .get(format!("{}/v1/forecast", self.base_url))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("start_date", start_date.format("%Y-%m-%d").to_string()),
                ("end_date", end_date.format("%Y-%m-%d").to_string()),
                ("hourly", "temperature_2m,weathercode".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let forecast: ForecastResponse = ensure_success(response).await?.json().await?;
        Ok(first_sample(&forecast.hourly))
    }
}

/// Reduce an hourly series to a snapshot of its first sample.
pub fn first_sample(hourly: &HourlySeries) -> Option<WeatherSnapshot> {
    let temperature = *hourly.temperature_2m.first()?;
    let code = *hourly.weathercode.first()?;
    Some(WeatherSnapshot::new(temperature, code))
}
