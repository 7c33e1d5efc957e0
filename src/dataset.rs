//! Synthetic training data for the risk classifier
//!
//! Generates labeled examples from seeded draws: plausible hot-climate
//! weather, a random exposure profile, and a rule-based ground-truth risk
//! score with Gaussian noise on top.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::heat_index::heat_index;
use crate::models::{ActivityLevel, AgeGroup, HydrationLevel, RiskLabel};

/// One labeled example for classifier training
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub temperature: f64,
    pub humidity: f64,
    pub exposure_hours: u32,
    pub activity_level: ActivityLevel,
    pub hydration_level: HydrationLevel,
    pub age_group: AgeGroup,
    /// Apparent temperature derived from temperature and humidity
    pub heat_index: f64,
    /// Ground-truth score after noise, in [0, 1]
    pub risk_score: f64,
    /// Label bucketed from the noisy score
    pub risk_label: RiskLabel,
}

/// Generate `n_samples` labeled examples from a seeded RNG.
///
/// The same `(n_samples, seed)` pair always yields the identical dataset.
#[must_use]
pub fn generate(n_samples: usize, seed: u64) -> Vec<TrainingExample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_samples).map(|_| sample(&mut rng)).collect()
}

fn sample(rng: &mut StdRng) -> TrainingExample {
    let temperature = sample_normal(rng, 32.0, 5.0).clamp(20.0, 50.0);
    let humidity = sample_normal(rng, 60.0, 15.0).clamp(10.0, 100.0);
    let exposure_hours = rng.random_range(1..=12);
    let activity_level = ActivityLevel::ALL[rng.random_range(0..ActivityLevel::ALL.len())];
    let hydration_level = HydrationLevel::ALL[rng.random_range(0..HydrationLevel::ALL.len())];
    let age_group = AgeGroup::ALL[rng.random_range(0..AgeGroup::ALL.len())];

    let hi = heat_index(temperature, humidity);
    let clean = ground_truth_score(hi, exposure_hours, activity_level, hydration_level, age_group);
    let risk_score = (clean + sample_normal(rng, 0.0, 0.05)).clamp(0.0, 1.0);

    TrainingExample {
        temperature,
        humidity,
        exposure_hours,
        activity_level,
        hydration_level,
        age_group,
        heat_index: hi,
        risk_score,
        risk_label: label_for_score(risk_score),
    }
}

/// Base risk contribution of the heat index alone
#[must_use]
pub fn base_risk_score(heat_index_c: f64) -> f64 {
    match heat_index_c {
        hi if hi < 27.0 => 0.1,
        hi if hi < 32.0 => 0.25,
        hi if hi < 39.0 => 0.45,
        hi if hi < 48.0 => 0.7,
        _ => 0.9,
    }
}

/// Rule-based score before noise: heat-index base plus cumulative profile
/// modifiers, capped at 0.99
#[must_use]
pub fn ground_truth_score(
    heat_index_c: f64,
    exposure_hours: u32,
    activity: ActivityLevel,
    hydration: HydrationLevel,
    age: AgeGroup,
) -> f64 {
    let mut score = base_risk_score(heat_index_c);

    score += match activity {
        ActivityLevel::Light => 0.0,
        ActivityLevel::Moderate => 0.1,
        ActivityLevel::Heavy => 0.2,
        ActivityLevel::Extreme => 0.35,
    };

    if exposure_hours > 4 {
        score += 0.1;
    }
    if exposure_hours > 8 {
        score += 0.2;
    }

    score += match hydration {
        HydrationLevel::Well => 0.0,
        HydrationLevel::Moderate => 0.1,
        HydrationLevel::Poor => 0.25,
    };

    if age.is_vulnerable() {
        score += 0.15;
    }

    score.min(0.99)
}

/// Map a continuous risk score onto the four ordered labels
#[must_use]
pub fn label_for_score(score: f64) -> RiskLabel {
    match score {
        s if s < 0.4 => RiskLabel::Low,
        s if s < 0.7 => RiskLabel::Moderate,
        s if s < 0.85 => RiskLabel::High,
        _ => RiskLabel::Extreme,
    }
}

/// Draw from Normal(mean, std_dev) via the Box-Muller transform
fn sample_normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random_range(f64::EPSILON..1.0);
    let u2: f64 = rng.random_range(0.0..1.0);
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[test]
    fn test_generation_is_reproducible() {
        let a = generate(50, 7);
        let b = generate(50, 7);
        assert_eq!(a, b);

        let c = generate(50, 8);
        assert_ne!(a, c);
    }

    #[test]
    fn test_samples_stay_in_range() {
        for example in generate(500, 42) {
            assert!((20.0..=50.0).contains(&example.temperature));
            assert!((10.0..=100.0).contains(&example.humidity));
            assert!((1..=12).contains(&example.exposure_hours));
            assert!((0.0..=1.0).contains(&example.risk_score));
        }
    }

    #[test]
    fn test_all_labels_appear_in_large_sample() {
        let labels: BTreeSet<RiskLabel> =
            generate(2000, 42).into_iter().map(|e| e.risk_label).collect();
        assert_eq!(labels.len(), 4);
    }

    #[rstest]
    #[case(26.9, 0.1)]
    #[case(27.0, 0.25)]
    #[case(31.9, 0.25)]
    #[case(32.0, 0.45)]
    #[case(38.9, 0.45)]
    #[case(39.0, 0.7)]
    #[case(47.9, 0.7)]
    #[case(48.0, 0.9)]
    fn test_base_score_buckets(#[case] hi: f64, #[case] expected: f64) {
        assert_eq!(base_risk_score(hi), expected);
    }

    #[test]
    fn test_ground_truth_extremes() {
        // Every modifier stacked still caps at 0.99.
        let worst = ground_truth_score(
            50.0,
            12,
            ActivityLevel::Extreme,
            HydrationLevel::Poor,
            AgeGroup::Age55Plus,
        );
        assert_eq!(worst, 0.99);

        let mild = ground_truth_score(
            20.0,
            2,
            ActivityLevel::Light,
            HydrationLevel::Well,
            AgeGroup::Age26To35,
        );
        assert_eq!(mild, 0.1);
    }

    #[rstest]
    #[case(0.0, RiskLabel::Low)]
    #[case(0.39, RiskLabel::Low)]
    #[case(0.4, RiskLabel::Moderate)]
    #[case(0.69, RiskLabel::Moderate)]
    #[case(0.7, RiskLabel::High)]
    #[case(0.84, RiskLabel::High)]
    #[case(0.85, RiskLabel::Extreme)]
    #[case(1.0, RiskLabel::Extreme)]
    fn test_label_boundaries(#[case] score: f64, #[case] expected: RiskLabel) {
        assert_eq!(label_for_score(score), expected);
    }

    #[test]
    fn test_normal_sampling_statistics() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = 5000;
        let mean = (0..n).map(|_| sample_normal(&mut rng, 32.0, 5.0)).sum::<f64>() / f64::from(n);
        assert!((mean - 32.0).abs() < 0.5, "sample mean {mean} too far from 32");
    }
}
