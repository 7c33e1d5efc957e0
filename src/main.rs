use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use heatguard::api::AppState;
use heatguard::{AppConfig, Classifier, SoftmaxClassifier, WeatherService, web};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let classifier = match SoftmaxClassifier::load(&config.model_path) {
        Ok(model) => {
            info!(
                path = %config.model_path.display(),
                holdout_accuracy = model.metadata.holdout_accuracy,
                "loaded risk model"
            );
            Some(Arc::new(model) as Arc<dyn Classifier>)
        }
        Err(e) => {
            warn!(
                path = %config.model_path.display(),
                "risk model not loaded, predictions disabled: {}",
                e.user_message()
            );
            None
        }
    };

    if config.api_key.is_none() {
        info!("no OPENWEATHER_API_KEY set, weather responses use the offline generator");
    }

    let weather = WeatherService::from_config(&config)?;
    let state = Arc::new(AppState { classifier, weather });

    web::run(&config, state).await
}
