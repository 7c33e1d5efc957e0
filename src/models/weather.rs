//! Weather reading model shared by the mock and live providers

use serde::{Deserialize, Serialize};

/// Provenance of a weather reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSource {
    /// Fetched from the OpenWeatherMap current-weather endpoint
    Live,
    /// Produced by the deterministic offline generator
    Mock,
}

impl std::fmt::Display for WeatherSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherSource::Live => write!(f, "live"),
            WeatherSource::Mock => write!(f, "mock"),
        }
    }
}

/// Snapshot of current conditions used for a risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in m/s, when the provider reports one
    pub wind_speed: Option<f64>,
    /// Coarse condition tag (e.g. "Clear", "Rain")
    pub condition: String,
    /// Human-readable place name for the reading
    pub location_name: String,
    /// Where the reading came from
    pub source: WeatherSource,
}

impl WeatherReading {
    /// Format the reading for report metadata
    #[must_use]
    pub fn environmental_snapshot(&self) -> String {
        format!("{:.1}°C, {:.1}% Humidity", self.temperature, self.humidity)
    }
}
