//! Multinomial softmax regression and its JSON artifact

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::classifier::features::{FEATURE_WIDTH, FeatureEncoder, Features};
use crate::error::HeatGuardError;

/// Provenance recorded alongside the trained weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// When training finished
    pub trained_at: DateTime<Utc>,
    /// Number of examples the model was fitted on
    pub training_samples: usize,
    /// Accuracy on the training split
    pub train_accuracy: f64,
    /// Accuracy on the holdout split
    pub holdout_accuracy: f64,
}

/// Multinomial logistic regression over the encoded feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxClassifier {
    /// Label vocabulary, aligned with the rows of `weights`
    pub classes: Vec<String>,
    /// Standardization statistics fitted at training time
    pub encoder: FeatureEncoder,
    /// One weight row per class
    pub weights: Vec<Vec<f64>>,
    /// One intercept per class
    pub intercepts: Vec<f64>,
    pub metadata: ModelMetadata,
}

impl SoftmaxClassifier {
    /// Load and validate a JSON artifact
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let model: Self = serde_json::from_str(&raw)
            .map_err(|e| HeatGuardError::model(format!("malformed model artifact: {e}")))?;
        model.validate()?;
        Ok(model)
    }

    /// Write the artifact as JSON, creating parent directories as needed
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| HeatGuardError::model(format!("failed to serialize model: {e}")))?;
        fs::write(path, raw)?;
        Ok(())
    }

    fn validate(&self) -> crate::Result<()> {
        if self.classes.is_empty() {
            return Err(HeatGuardError::model("artifact has no classes"));
        }
        if self.weights.len() != self.classes.len() || self.intercepts.len() != self.classes.len()
        {
            return Err(HeatGuardError::model(format!(
                "artifact shape mismatch: {} classes, {} weight rows, {} intercepts",
                self.classes.len(),
                self.weights.len(),
                self.intercepts.len()
            )));
        }
        if let Some(row) = self.weights.iter().find(|row| row.len() != FEATURE_WIDTH) {
            return Err(HeatGuardError::model(format!(
                "weight row has {} features, expected {FEATURE_WIDTH}",
                row.len()
            )));
        }
        Ok(())
    }

    /// Per-class probabilities for an already-encoded vector
    #[must_use]
    pub fn probabilities(&self, encoded: &[f64]) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                intercept + row.iter().zip(encoded).map(|(w, x)| w * x).sum::<f64>()
            })
            .collect();
        softmax(&logits)
    }
}

impl Classifier for SoftmaxClassifier {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, features: &Features) -> String {
        let probabilities = self.predict_proba(features);
        let best = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map_or(0, |(index, _)| index);
        self.classes[best].clone()
    }

    fn predict_proba(&self, features: &Features) -> Vec<f64> {
        self.probabilities(&self.encoder.encode(features))
    }
}

/// Numerically stable softmax
pub(crate) fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|logit| (logit - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
