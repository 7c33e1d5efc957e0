//! Configuration management for the `HeatGuard` service
//!
//! All settings come from environment variables with sensible defaults, so
//! the service runs out of the box in mock-weather mode. A `.env` file is
//! honored by the binaries before this module reads anything.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::HeatGuardError;
use crate::weather;

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MODEL_PATH: &str = "data/model.json";
const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Runtime configuration for the HeatGuard service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key; absent or empty means mock weather only
    pub api_key: Option<String>,
    /// Port the HTTP server binds on
    pub port: u16,
    /// Path of the classifier artifact
    pub model_path: PathBuf,
    /// Directory of prebuilt frontend assets
    pub static_dir: PathBuf,
    /// Base URL of the current-weather endpoint
    pub weather_base_url: String,
    /// Timeout for live weather fetches
    pub weather_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            weather_base_url: weather::DEFAULT_BASE_URL.to_string(),
            weather_timeout: weather::DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());

        let port = match std::env::var("HEATGUARD_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                HeatGuardError::config(format!("Invalid HEATGUARD_PORT value '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let weather_timeout = match std::env::var("HEATGUARD_WEATHER_TIMEOUT_SECS") {
            Ok(raw) => {
                let seconds = raw.parse::<u64>().map_err(|_| {
                    HeatGuardError::config(format!(
                        "Invalid HEATGUARD_WEATHER_TIMEOUT_SECS value '{raw}'"
                    ))
                })?;
                Duration::from_secs(seconds)
            }
            Err(_) => weather::DEFAULT_TIMEOUT,
        };

        let config = Self {
            api_key,
            port,
            model_path: PathBuf::from(env_or("HEATGUARD_MODEL_PATH", DEFAULT_MODEL_PATH)),
            static_dir: PathBuf::from(env_or("HEATGUARD_STATIC_DIR", DEFAULT_STATIC_DIR)),
            weather_base_url: env_or("HEATGUARD_WEATHER_URL", weather::DEFAULT_BASE_URL),
            weather_timeout,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Some(api_key) = &self.api_key {
            if api_key.len() < 8 {
                return Err(HeatGuardError::config(
                    "Weather API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }
        }

        if !self.weather_base_url.starts_with("http://")
            && !self.weather_base_url.starts_with("https://")
        {
            return Err(
                HeatGuardError::config("Weather base URL must be an HTTP or HTTPS URL").into(),
            );
        }

        if self.weather_timeout > Duration::from_secs(300) {
            return Err(
                HeatGuardError::config("Weather timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Socket address the server binds on
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.port, 5000);
        assert_eq!(config.model_path, PathBuf::from("data/model.json"));
        assert_eq!(config.weather_timeout, Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_short_api_key() {
        let config = AppConfig {
            api_key: Some("short".to_string()),
            ..AppConfig::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = AppConfig {
            weather_base_url: "ftp://weather.example".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig {
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_environment_overrides() {
        // SAFETY: Test environment, setting test values only
        unsafe {
            env::set_var("HEATGUARD_PORT", "8123");
            env::set_var(API_KEY_VAR, "valid_api_key_123");
        }

        let config = AppConfig::from_env().unwrap();

        // SAFETY: Test cleanup
        unsafe {
            env::remove_var("HEATGUARD_PORT");
            env::remove_var(API_KEY_VAR);
        }

        assert_eq!(config.port, 8123);
        assert_eq!(config.api_key, Some("valid_api_key_123".to_string()));
    }
}
