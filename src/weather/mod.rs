//! Weather acquisition for risk assessments
//!
//! [`WeatherService`] calls the OpenWeatherMap current-weather API when an
//! API key is configured and falls back to the deterministic mock generator
//! otherwise, so an assessment always has a reading to work with.

pub mod mock;

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;
use crate::error::HeatGuardError;
use crate::models::{WeatherReading, WeatherSource};

/// Default OpenWeatherMap current-weather endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Default timeout for the live fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Weather provider with a live fetch and a deterministic fallback
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherService {
    /// Build a service; without an API key it is mock-only
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HeatGuardError::api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Build from application configuration
    pub fn from_config(config: &AppConfig) -> crate::Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.weather_base_url.clone(),
            config.weather_timeout,
        )
    }

    /// Fetch current conditions for a place.
    ///
    /// Never fails: without an API key, or when the live call errors in any
    /// way, the deterministic mock reading is returned instead. Coordinates
    /// are only used when both latitude and longitude are present.
    #[instrument(skip(self))]
    pub async fn get_weather(
        &self,
        location: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> WeatherReading {
        let coordinates = latitude.zip(longitude);

        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no API key configured, using mock weather");
            return mock::mock_weather(location, coordinates);
        };

        match self.fetch_live(api_key, location, coordinates).await {
            Ok(reading) => reading,
            Err(e) => {
                warn!("live weather fetch failed, falling back to mock: {e:#}");
                mock::mock_weather(location, coordinates)
            }
        }
    }

    async fn fetch_live(
        &self,
        api_key: &str,
        location: Option<&str>,
        coordinates: Option<(f64, f64)>,
    ) -> Result<WeatherReading> {
        let mut url = format!("{}?appid={}&units=metric", self.base_url, api_key);
        match (coordinates, location) {
            (Some((lat, lon)), _) => {
                url.push_str(&format!("&lat={lat}&lon={lon}"));
            }
            (None, Some(name)) => {
                url.push_str(&format!("&q={}", urlencoding::encode(name)));
            }
            (None, None) => return Err(anyhow!("no location or coordinates to query")),
        }

        debug!("Calling the current-weather API");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: openweather::CurrentWeatherResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse OpenWeatherMap response")?;

        let condition = body
            .weather
            .first()
            .map(|condition| condition.main.clone())
            .ok_or_else(|| anyhow!("response carries no weather conditions"))?;

        Ok(WeatherReading {
            temperature: body.main.temp,
            humidity: body.main.humidity,
            wind_speed: Some(body.wind.speed),
            condition,
            location_name: body.name.unwrap_or_else(|| "Unknown Location".to_string()),
            source: WeatherSource::Live,
        })
    }
}

/// `OpenWeatherMap` API response structures
mod openweather {
    use serde::Deserialize;

    /// Current weather response from `OpenWeatherMap`
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub main: MainData,
        pub wind: WindData,
        pub weather: Vec<ConditionData>,
        pub name: Option<String>,
    }

    /// Temperature and humidity block
    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindData {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionData {
        pub main: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_only_service_never_touches_network() {
        let service = WeatherService::new(None, DEFAULT_BASE_URL, DEFAULT_TIMEOUT).unwrap();
        let reading = service.get_weather(Some("Mumbai"), None, None).await;

        assert_eq!(reading.source, WeatherSource::Mock);
        assert_eq!(reading.location_name, "Mumbai");
    }

    #[tokio::test]
    async fn test_failed_live_fetch_falls_back_to_mock() {
        // Unroutable endpoint: the connection is refused immediately.
        let service = WeatherService::new(
            Some("test-key".to_string()),
            "http://127.0.0.1:9",
            Duration::from_millis(200),
        )
        .unwrap();

        let reading = service.get_weather(Some("Cairo"), None, None).await;
        assert_eq!(reading.source, WeatherSource::Mock);
        assert_eq!(reading, mock::mock_weather(Some("Cairo"), None));
    }

    #[tokio::test]
    async fn test_single_coordinate_is_ignored() {
        let service = WeatherService::new(None, DEFAULT_BASE_URL, DEFAULT_TIMEOUT).unwrap();

        let reading = service.get_weather(Some("Mumbai"), Some(19.07), None).await;
        assert_eq!(reading.location_name, "Mumbai");

        let reading = service.get_weather(None, Some(19.07), Some(72.87)).await;
        assert_eq!(reading.location_name, "GP:19.07,72.87");
    }
}
