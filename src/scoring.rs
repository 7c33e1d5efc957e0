//! Risk score aggregation
//!
//! Collapses per-label classifier probabilities into one weighted score and
//! assembles the full assessment: predicted label, probabilities, weighted
//! score and safety recommendations.

use tracing::debug;

use crate::classifier::{Classifier, Features};
use crate::models::{PersonalInputs, RiskAssessment, RiskLabel, WeatherReading};
use crate::recommendation::RecommendationEngine;

/// Severity weight for a label string; unrecognized labels weigh zero
#[must_use]
pub fn severity_weight(label: &str) -> f64 {
    RiskLabel::parse(label).map_or(0.0, RiskLabel::severity_weight)
}

/// Probability-weighted severity score
#[must_use]
pub fn weighted_risk_score<'a, I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    probabilities
        .into_iter()
        .map(|(label, probability)| probability * severity_weight(label))
        .sum()
}

/// Run the full assessment for one request
pub fn assess(
    classifier: &dyn Classifier,
    inputs: &PersonalInputs,
    weather: &WeatherReading,
) -> crate::Result<RiskAssessment> {
    let features = Features::from_request(inputs, weather)?;

    let predicted = classifier.predict(&features);
    let probabilities = classifier.predict_proba(&features);

    let pairs: Vec<(&str, f64)> = classifier
        .classes()
        .iter()
        .map(String::as_str)
        .zip(probabilities.iter().copied())
        .collect();
    let weighted_score = weighted_risk_score(pairs.iter().copied());

    let risk_label = RiskLabel::parse(&predicted).unwrap_or(RiskLabel::Low);
    let recommendations = RecommendationEngine::generate(risk_label, inputs, weather);

    debug!(label = %risk_label, score = weighted_score, "assessed heat-stress risk");

    Ok(RiskAssessment {
        risk_label,
        risk_probabilities: pairs
            .into_iter()
            .map(|(label, probability)| (label.to_string(), probability))
            .collect(),
        weighted_score,
        recommendations,
    })
}
