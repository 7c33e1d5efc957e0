//! HTTP API surface
//!
//! Three endpoints under `/api`: health, current weather and risk
//! prediction. Field names mirror what the frontend sends and expects:
//! camelCase for prediction payloads and reports, snake_case for weather
//! readings.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::error;

use crate::classifier::Classifier;
use crate::error::HeatGuardError;
use crate::models::{
    ActivityLevel, AgeGroup, HydrationLevel, PersonalInputs, RecommendationRecord, RiskAssessment,
    RiskLabel, WeatherReading, WeatherSource,
};
use crate::scoring;
use crate::weather::WeatherService;

/// Name reported by the health endpoint
const SERVICE_NAME: &str = "HeatGuard API";

/// Shared state injected into every handler
pub struct AppState {
    /// Loaded classifier; `None` runs the service in degraded mode
    pub classifier: Option<Arc<dyn Classifier>>,
    /// Weather provider (live with fallback, or mock-only)
    pub weather: WeatherService,
}

/// Build the `/api` router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", get(weather))
        .route("/predict", post(predict))
        .with_state(state)
}

/// Error responses carrying `{"error": message}` JSON
#[derive(Debug)]
pub enum ApiError {
    /// 400: the request is missing required data
    BadRequest(String),
    /// 503: the classifier artifact is not loaded
    ServiceUnavailable(String),
    /// 500: unexpected processing failure
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::BadRequest(message)
            | ApiError::ServiceUnavailable(message)
            | ApiError::Internal(message) => message.clone(),
        };
        if matches!(self, ApiError::Internal(_)) {
            error!("request failed: {message}");
        }
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}

impl From<HeatGuardError> for ApiError {
    fn from(err: HeatGuardError) -> Self {
        match err {
            HeatGuardError::Validation { message } => ApiError::BadRequest(message),
            HeatGuardError::Model { message } => ApiError::ServiceUnavailable(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Query parameters for `GET /api/weather`
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Body of `POST /api/predict`
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    pub inputs: Option<InputsPayload>,
    pub weather: Option<WeatherPayload>,
}

/// Personal profile as the frontend sends it
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputsPayload {
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub exposure_duration: Option<f64>,
    pub activity_level: Option<String>,
    pub hydration_level: Option<String>,
    pub age_group: Option<String>,
}

impl InputsPayload {
    /// Typed view of the payload; unknown enum strings become `None`
    fn into_inputs(self) -> PersonalInputs {
        PersonalInputs {
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            exposure_hours: self.exposure_duration,
            activity_level: self
                .activity_level
                .as_deref()
                .and_then(ActivityLevel::parse),
            hydration_level: self
                .hydration_level
                .as_deref()
                .and_then(HydrationLevel::parse),
            age_group: self.age_group.as_deref().and_then(AgeGroup::parse),
        }
    }
}

/// Client-supplied weather block, accepted leniently
#[derive(Debug, Default, Deserialize)]
pub struct WeatherPayload {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(alias = "windSpeed")]
    pub wind_speed: Option<f64>,
    pub condition: Option<String>,
    #[serde(alias = "locationName")]
    pub location_name: Option<String>,
    pub source: Option<WeatherSource>,
}

impl WeatherPayload {
    /// Build the reading used for assessment. Fails when temperature or
    /// humidity is absent.
    fn into_reading(self) -> crate::Result<WeatherReading> {
        let temperature = self
            .temperature
            .ok_or_else(|| HeatGuardError::general("weather data is missing temperature"))?;
        let humidity = self
            .humidity
            .ok_or_else(|| HeatGuardError::general("weather data is missing humidity"))?;

        Ok(WeatherReading {
            temperature,
            humidity,
            wind_speed: self.wind_speed,
            condition: self.condition.unwrap_or_else(|| "Unknown".to_string()),
            location_name: self.location_name.unwrap_or_default(),
            source: self.source.unwrap_or(WeatherSource::Mock),
        })
    }
}

/// Body of a successful prediction
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub risk_category: RiskLabel,
    pub risk_percentage: f64,
    pub summary: String,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<RecommendationRecord>,
    pub metadata: ResponseMetadata,
}

/// One environmental factor highlighted in the report
#[derive(Debug, Serialize)]
pub struct RiskFactor {
    pub label: String,
    pub value: String,
    pub severity: &'static str,
}

/// Context block attached to a prediction
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub location: String,
    pub timestamp: String,
    pub environmental_snapshot: String,
}

impl PredictResponse {
    fn build(
        assessment: &RiskAssessment,
        inputs: &PersonalInputs,
        weather: &WeatherReading,
    ) -> Self {
        Self {
            risk_category: assessment.risk_label,
            risk_percentage: assessment.risk_percentage(),
            summary: format!(
                "Risk level is {} due to current conditions.",
                assessment.risk_label.as_str().to_uppercase()
            ),
            factors: vec![
                RiskFactor {
                    label: "Temperature".to_string(),
                    value: format!("{:.1}°C", weather.temperature),
                    severity: if weather.temperature > 35.0 { "high" } else { "low" },
                },
                RiskFactor {
                    label: "Humidity".to_string(),
                    value: format!("{:.1}%", weather.humidity),
                    severity: if weather.humidity > 70.0 { "high" } else { "low" },
                },
            ],
            recommendations: assessment.recommendations.clone(),
            metadata: ResponseMetadata {
                location: inputs
                    .city
                    .clone()
                    .unwrap_or_else(|| weather.location_name.clone()),
                timestamp: Utc::now().to_rfc3339(),
                environmental_snapshot: weather.environmental_snapshot(),
            },
        }
    }
}

/// `GET /api/health`
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let status = if state.classifier.is_some() {
        "healthy"
    } else {
        "degraded"
    };
    Json(json!({
        "status": status,
        "service": SERVICE_NAME,
    }))
}

/// `GET /api/weather`
async fn weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReading>, ApiError> {
    let has_coordinates = query.lat.is_some() && query.lon.is_some();
    if query.location.is_none() && !has_coordinates {
        return Err(ApiError::BadRequest(
            "Location or coordinates required".to_string(),
        ));
    }

    let reading = state
        .weather
        .get_weather(query.location.as_deref(), query.lat, query.lon)
        .await;
    Ok(Json(reading))
}

/// `POST /api/predict`
async fn predict(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Some(classifier) = state.classifier.clone() else {
        return Err(ApiError::ServiceUnavailable(
            "Prediction service unavailable".to_string(),
        ));
    };

    let inputs = body.inputs.map(InputsPayload::into_inputs);
    let mut weather = match body.weather {
        Some(payload) => Some(payload.into_reading()?),
        None => None,
    };

    // No weather supplied: fetch it from the profile's place fields.
    if weather.is_none() {
        if let Some(inputs) = &inputs {
            let reading = state
                .weather
                .get_weather(inputs.city.as_deref(), inputs.latitude, inputs.longitude)
                .await;
            weather = Some(reading);
        }
    }

    let (Some(inputs), Some(weather)) = (inputs, weather) else {
        return Err(ApiError::BadRequest(
            "Missing inputs or weather data".to_string(),
        ));
    };

    let assessment = scoring::assess(classifier.as_ref(), &inputs, &weather)?;

    Ok(Json(PredictResponse::build(&assessment, &inputs, &weather)))
}
