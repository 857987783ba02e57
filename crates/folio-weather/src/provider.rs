use chrono::Local;
use folio_core::{fetch_with_fallback, Fetched, WeatherConfig};
use reqwest::Client;

use crate::types::{ForecastResponse, WeatherSnapshot};

/// Open-Meteo client for the configured location (no API key required)
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    config: WeatherConfig,
}

impl WeatherProvider {
    pub fn new(client: Client, config: WeatherConfig) -> Self {
        Self { client, config }
    }

    pub fn location_name(&self) -> &str {
        &self.config.location_name
    }

    fn request(&self) -> reqwest::RequestBuilder {
        self.client.get(&self.config.api_url).query(&[
            ("latitude", self.config.latitude.to_string()),
            ("longitude", self.config.longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("temperature_unit", "celsius".to_string()),
            ("windspeed_unit", "ms".to_string()),
            ("timezone", "auto".to_string()),
        ])
    }

    /// Fetch current conditions. Never fails: an unreachable provider yields
    /// the fallback snapshot (no readings, clear sky, observed now).
    pub async fn fetch_current(&self) -> Fetched<WeatherSnapshot> {
        let now = Local::now().naive_local();
        tracing::debug!(
            "Fetching weather for {} ({}, {})",
            self.config.location_name,
            self.config.latitude,
            self.config.longitude
        );

        let fetched = fetch_with_fallback("weather", self.request(), || {
            ForecastResponse::fallback(now)
        })
        .await;

        fetched.map(|response| WeatherSnapshot::from_response(&response, now))
    }
}
