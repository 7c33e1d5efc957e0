//! `HeatGuard` - heat-stress risk assessment for outdoor workers
//!
//! The library covers the full pipeline behind the service:
//! - Apparent temperature (heat index) from air temperature and humidity
//! - Synthetic training data modelled on occupational heat exposure
//! - A softmax risk classifier with a JSON model artifact
//! - Weighted risk scoring and safety recommendations
//! - Weather lookup with a deterministic offline generator
//! - The HTTP API serving health, weather and prediction endpoints

pub mod api;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod heat_index;
pub mod models;
pub mod recommendation;
pub mod scoring;
pub mod weather;
pub mod web;

// Re-export core types for the public API
pub use classifier::{Classifier, SoftmaxClassifier, TrainOptions};
pub use config::AppConfig;
pub use error::HeatGuardError;
pub use models::{
    ActivityLevel, AgeGroup, HydrationLevel, PersonalInputs, RecommendationRecord, RiskAssessment,
    RiskLabel, Urgency, WeatherReading, WeatherSource,
};
pub use recommendation::RecommendationEngine;
pub use weather::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, HeatGuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
