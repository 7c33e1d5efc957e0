//! Deterministic trainer for the softmax classifier
//!
//! Full-batch gradient descent from zero-initialized weights: a given
//! dataset and option set always produce bit-identical weights.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::classifier::features::{FEATURE_WIDTH, FeatureEncoder, Features};
use crate::classifier::softmax::{ModelMetadata, SoftmaxClassifier, softmax};
use crate::dataset::TrainingExample;
use crate::error::HeatGuardError;
use crate::models::RiskLabel;

/// Training hyperparameters
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// Full-batch gradient descent epochs
    pub epochs: usize,
    pub learning_rate: f64,
    /// Fraction of examples held out for evaluation
    pub holdout_fraction: f64,
    /// Seed for the train/holdout shuffle
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 300,
            learning_rate: 0.5,
            holdout_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Train a softmax classifier on labeled examples
pub fn train(
    examples: &[TrainingExample],
    options: &TrainOptions,
) -> crate::Result<SoftmaxClassifier> {
    if examples.len() < 10 {
        return Err(HeatGuardError::validation(
            "training requires at least 10 examples",
        ));
    }

    let mut shuffled = examples.to_vec();
    let mut rng = StdRng::seed_from_u64(options.seed);
    shuffled.shuffle(&mut rng);

    let holdout_len = ((shuffled.len() as f64) * options.holdout_fraction).round() as usize;
    let holdout_len = holdout_len.min(shuffled.len() - 1);
    let (train_split, holdout_split) = shuffled.split_at(shuffled.len() - holdout_len);

    let encoder = FeatureEncoder::fit(train_split);
    let classes: Vec<String> = RiskLabel::ALL.iter().map(|l| l.as_str().to_string()).collect();

    let encoded: Vec<Vec<f64>> = train_split
        .iter()
        .map(|example| encoder.encode(&Features::from(example)))
        .collect();
    let targets: Vec<usize> = train_split.iter().map(|e| e.risk_label.index()).collect();

    let n_classes = classes.len();
    let n = encoded.len() as f64;
    let mut weights = vec![vec![0.0_f64; FEATURE_WIDTH]; n_classes];
    let mut intercepts = vec![0.0_f64; n_classes];

    for epoch in 0..options.epochs {
        let mut weight_grads = vec![vec![0.0_f64; FEATURE_WIDTH]; n_classes];
        let mut intercept_grads = vec![0.0_f64; n_classes];
        let mut loss = 0.0;

        for (x, &target) in encoded.iter().zip(&targets) {
            let logits: Vec<f64> = weights
                .iter()
                .zip(&intercepts)
                .map(|(row, intercept)| {
                    intercept + row.iter().zip(x).map(|(w, xi)| w * xi).sum::<f64>()
                })
                .collect();
            let probabilities = softmax(&logits);
            loss -= probabilities[target].max(1e-12).ln();

            for (class, probability) in probabilities.iter().enumerate() {
                let error = probability - if class == target { 1.0 } else { 0.0 };
                intercept_grads[class] += error;
                for (grad, xi) in weight_grads[class].iter_mut().zip(x) {
                    *grad += error * xi;
                }
            }
        }

        for (row, grad_row) in weights.iter_mut().zip(&weight_grads) {
            for (weight, grad) in row.iter_mut().zip(grad_row) {
                *weight -= options.learning_rate * grad / n;
            }
        }
        for (intercept, grad) in intercepts.iter_mut().zip(&intercept_grads) {
            *intercept -= options.learning_rate * grad / n;
        }

        if epoch % 50 == 0 {
            debug!(epoch, loss = loss / n, "training progress");
        }
    }

    let mut model = SoftmaxClassifier {
        classes,
        encoder,
        weights,
        intercepts,
        metadata: ModelMetadata {
            trained_at: Utc::now(),
            training_samples: train_split.len(),
            train_accuracy: 0.0,
            holdout_accuracy: 0.0,
        },
    };
    model.metadata.train_accuracy = accuracy(&model, train_split);
    model.metadata.holdout_accuracy = accuracy(&model, holdout_split);

    info!(
        samples = examples.len(),
        train_accuracy = model.metadata.train_accuracy,
        holdout_accuracy = model.metadata.holdout_accuracy,
        "trained risk classifier"
    );

    Ok(model)
}

/// Fraction of examples whose predicted label matches the ground truth
#[must_use]
pub fn accuracy(model: &SoftmaxClassifier, examples: &[TrainingExample]) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let correct = examples
        .iter()
        .filter(|example| model.predict(&Features::from(*example)) == example.risk_label.as_str())
        .count();
    correct as f64 / examples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate;
    use crate::models::{ActivityLevel, AgeGroup, HydrationLevel};
    use std::sync::LazyLock;

    static TRAINED: LazyLock<SoftmaxClassifier> = LazyLock::new(|| {
        train(&generate(1500, 42), &TrainOptions::default()).expect("training failed")
    });

    fn create_features(
        temperature: f64,
        humidity: f64,
        exposure_hours: f64,
        activity: ActivityLevel,
        hydration: HydrationLevel,
        age: AgeGroup,
    ) -> Features {
        Features {
            temperature,
            humidity,
            exposure_hours,
            activity_level: Some(activity),
            hydration_level: Some(hydration),
            age_group: Some(age),
        }
    }

    #[test]
    fn test_training_is_deterministic() {
        let examples = generate(200, 5);
        let options = TrainOptions {
            epochs: 40,
            ..TrainOptions::default()
        };
        let a = train(&examples, &options).unwrap();
        let b = train(&examples, &options).unwrap();

        assert_eq!(a.weights, b.weights);
        assert_eq!(a.intercepts, b.intercepts);
        assert_eq!(a.encoder, b.encoder);
    }

    #[test]
    fn test_rejects_tiny_datasets() {
        let examples = generate(5, 1);
        assert!(train(&examples, &TrainOptions::default()).is_err());
    }

    #[test]
    fn test_holdout_accuracy_clears_floor() {
        assert!(
            TRAINED.metadata.holdout_accuracy >= 0.7,
            "holdout accuracy {} below floor",
            TRAINED.metadata.holdout_accuracy
        );
        assert!(TRAINED.metadata.train_accuracy >= 0.7);
    }

    #[test]
    fn test_probabilities_align_with_classes() {
        let features = create_features(
            33.0,
            55.0,
            6.0,
            ActivityLevel::Moderate,
            HydrationLevel::Moderate,
            AgeGroup::Age36To45,
        );
        let probabilities = TRAINED.predict_proba(&features);

        assert_eq!(probabilities.len(), TRAINED.classes().len());
        assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_obvious_cases_predict_sensibly() {
        let dangerous = create_features(
            45.0,
            90.0,
            12.0,
            ActivityLevel::Extreme,
            HydrationLevel::Poor,
            AgeGroup::Age55Plus,
        );
        let predicted = TRAINED.predict(&dangerous);
        assert!(
            predicted == "high" || predicted == "extreme",
            "dangerous conditions predicted {predicted}"
        );

        let mild = create_features(
            21.0,
            20.0,
            1.0,
            ActivityLevel::Light,
            HydrationLevel::Well,
            AgeGroup::Age26To35,
        );
        let predicted = TRAINED.predict(&mild);
        assert!(
            predicted == "low" || predicted == "moderate",
            "mild conditions predicted {predicted}"
        );
    }
}
