//! Risk labels, assessments and safety recommendations

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered risk severity labels produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl RiskLabel {
    /// All labels, ordered from least to most severe
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::Extreme];

    /// Parse a classifier label string; unknown labels yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }

    /// Position within [`Self::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
            Self::Extreme => 3,
        }
    }

    /// Weight used to collapse per-label probabilities into one score
    #[must_use]
    pub fn severity_weight(self) -> f64 {
        match self {
            Self::Low => 0.15,
            Self::Moderate => 0.45,
            Self::High => 0.75,
            Self::Extreme => 0.95,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency attached to a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// One actionable safety recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Short imperative headline
    pub title: String,
    /// One-sentence explanation of the action
    pub explanation: String,
    /// How urgently the action should be taken
    pub urgency: Urgency,
}

impl RecommendationRecord {
    pub fn new(title: &str, explanation: &str, urgency: Urgency) -> Self {
        Self {
            title: title.to_string(),
            explanation: explanation.to_string(),
            urgency,
        }
    }
}

/// Full result of one risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Most likely risk label
    pub risk_label: RiskLabel,
    /// Per-label probabilities as reported by the classifier
    pub risk_probabilities: BTreeMap<String, f64>,
    /// Probability-weighted severity score in [0, 1]
    pub weighted_score: f64,
    /// Ordered safety recommendations (base tier first)
    pub recommendations: Vec<RecommendationRecord>,
}

impl RiskAssessment {
    /// Score scaled to a percentage, rounded to one decimal place
    #[must_use]
    pub fn risk_percentage(&self) -> f64 {
        (self.weighted_score * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_ordering() {
        assert!(RiskLabel::Low < RiskLabel::Moderate);
        assert!(RiskLabel::High < RiskLabel::Extreme);
    }

    #[test]
    fn test_label_parse() {
        assert_eq!(RiskLabel::parse("EXTREME"), Some(RiskLabel::Extreme));
        assert_eq!(RiskLabel::parse(" low "), Some(RiskLabel::Low));
        assert_eq!(RiskLabel::parse("catastrophic"), None);
    }

    #[test]
    fn test_severity_weights() {
        assert_eq!(RiskLabel::Low.severity_weight(), 0.15);
        assert_eq!(RiskLabel::Moderate.severity_weight(), 0.45);
        assert_eq!(RiskLabel::High.severity_weight(), 0.75);
        assert_eq!(RiskLabel::Extreme.severity_weight(), 0.95);
    }

    #[test]
    fn test_risk_percentage_rounding() {
        let assessment = RiskAssessment {
            risk_label: RiskLabel::Moderate,
            risk_probabilities: BTreeMap::new(),
            weighted_score: 0.57554,
            recommendations: vec![],
        };
        assert_eq!(assessment.risk_percentage(), 57.6);
    }
}
