//! Feature encoding for the risk classifier
//!
//! Mirrors the training pipeline: three standardized numeric features
//! followed by one-hot blocks for the categorical profile fields. Unknown
//! or missing categoricals encode as all-zero blocks.

use serde::{Deserialize, Serialize};

use crate::dataset::TrainingExample;
use crate::error::HeatGuardError;
use crate::models::{ActivityLevel, AgeGroup, HydrationLevel, PersonalInputs, WeatherReading};

/// Number of encoded features per example
pub const FEATURE_WIDTH: usize =
    3 + ActivityLevel::ALL.len() + HydrationLevel::ALL.len() + AgeGroup::ALL.len();

/// Raw inputs to one prediction
#[derive(Debug, Clone)]
pub struct Features {
    pub temperature: f64,
    pub humidity: f64,
    pub exposure_hours: f64,
    pub activity_level: Option<ActivityLevel>,
    pub hydration_level: Option<HydrationLevel>,
    pub age_group: Option<AgeGroup>,
}

impl Features {
    /// Combine a personal profile with a weather reading.
    ///
    /// Fails when the profile lacks an exposure duration, the one field a
    /// prediction cannot proceed without.
    pub fn from_request(inputs: &PersonalInputs, weather: &WeatherReading) -> crate::Result<Self> {
        let exposure_hours = inputs
            .exposure_hours
            .ok_or_else(|| HeatGuardError::general("inputs are missing exposureDuration"))?;

        Ok(Self {
            temperature: weather.temperature,
            humidity: weather.humidity,
            exposure_hours,
            activity_level: inputs.activity_level,
            hydration_level: inputs.hydration_level,
            age_group: inputs.age_group,
        })
    }
}

impl From<&TrainingExample> for Features {
    fn from(example: &TrainingExample) -> Self {
        Self {
            temperature: example.temperature,
            humidity: example.humidity,
            exposure_hours: f64::from(example.exposure_hours),
            activity_level: Some(example.activity_level),
            hydration_level: Some(example.hydration_level),
            age_group: Some(example.age_group),
        }
    }
}

/// Standardization statistics fitted on the training split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEncoder {
    /// Means of `[temperature, humidity, exposure_hours]`
    pub numeric_means: [f64; 3],
    /// Standard deviations of the same, floored away from zero
    pub numeric_stds: [f64; 3],
}

impl FeatureEncoder {
    /// Fit standardization statistics on training examples
    #[must_use]
    pub fn fit(examples: &[TrainingExample]) -> Self {
        let n = examples.len().max(1) as f64;

        let mut means = [0.0_f64; 3];
        for example in examples {
            means[0] += example.temperature;
            means[1] += example.humidity;
            means[2] += f64::from(example.exposure_hours);
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut variances = [0.0_f64; 3];
        for example in examples {
            let row = [
                example.temperature,
                example.humidity,
                f64::from(example.exposure_hours),
            ];
            for ((variance, value), mean) in variances.iter_mut().zip(row).zip(means) {
                *variance += (value - mean) * (value - mean);
            }
        }

        let mut stds = [0.0_f64; 3];
        for (std, variance) in stds.iter_mut().zip(variances) {
            *std = (variance / n).sqrt().max(1e-9);
        }

        Self {
            numeric_means: means,
            numeric_stds: stds,
        }
    }

    /// Encode one example into the fixed-width feature vector
    #[must_use]
    pub fn encode(&self, features: &Features) -> Vec<f64> {
        let mut encoded = vec![0.0; FEATURE_WIDTH];
        encoded[0] = (features.temperature - self.numeric_means[0]) / self.numeric_stds[0];
        encoded[1] = (features.humidity - self.numeric_means[1]) / self.numeric_stds[1];
        encoded[2] = (features.exposure_hours - self.numeric_means[2]) / self.numeric_stds[2];

        let activity_offset = 3;
        let hydration_offset = activity_offset + ActivityLevel::ALL.len();
        let age_offset = hydration_offset + HydrationLevel::ALL.len();

        if let Some(activity) = features.activity_level {
            encoded[activity_offset + activity.index()] = 1.0;
        }
        if let Some(hydration) = features.hydration_level {
            encoded[hydration_offset + hydration.index()] = 1.0;
        }
        if let Some(age) = features.age_group {
            encoded[age_offset + age.index()] = 1.0;
        }

        encoded
    }
}
