//! Offline trainer: generates the synthetic dataset, fits the risk
//! classifier and writes the JSON artifact the service loads at startup.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use heatguard::classifier::{self, TrainOptions};
use heatguard::dataset;
use heatguard::models::RiskLabel;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let samples: usize = env_parse("HEATGUARD_TRAIN_SAMPLES", 5000)?;
    let seed: u64 = env_parse("HEATGUARD_TRAIN_SEED", 42)?;
    let model_path = PathBuf::from(
        std::env::var("HEATGUARD_MODEL_PATH").unwrap_or_else(|_| "data/model.json".to_string()),
    );

    info!(samples, seed, "generating synthetic training data");
    let examples = dataset::generate(samples, seed);

    let mut distribution: BTreeMap<RiskLabel, usize> = BTreeMap::new();
    for example in &examples {
        *distribution.entry(example.risk_label).or_default() += 1;
    }
    for (label, count) in &distribution {
        info!(label = %label, count, "label distribution");
    }

    // Optional raw dump of the generated examples for inspection
    if let Ok(raw) = std::env::var("HEATGUARD_DATASET_PATH") {
        let dataset_path = PathBuf::from(raw);
        if let Some(parent) = dataset_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        std::fs::write(&dataset_path, serde_json::to_string_pretty(&examples)?)
            .with_context(|| format!("Failed to write dataset to {}", dataset_path.display()))?;
        info!(path = %dataset_path.display(), "wrote dataset snapshot");
    }

    let options = TrainOptions { seed, ..TrainOptions::default() };
    let model = classifier::train(&examples, &options)?;
    model.save(&model_path)?;
    info!(
        path = %model_path.display(),
        train_accuracy = model.metadata.train_accuracy,
        holdout_accuracy = model.metadata.holdout_accuracy,
        "saved model artifact"
    );

    Ok(())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("Invalid {key} value '{raw}'")),
        Err(_) => Ok(default),
    }
}
