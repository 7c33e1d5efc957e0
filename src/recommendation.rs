//! Deterministic safety recommendations
//!
//! Four ordered rules keyed off the risk label, the personal profile and
//! the current temperature. The base tier always contributes exactly one
//! record, so output length is between one and four.

use crate::models::{
    ActivityLevel, AgeGroup, HydrationLevel, PersonalInputs, RecommendationRecord, RiskLabel,
    Urgency, WeatherReading,
};

/// Rule-based recommendation generator
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Generate recommendations for an assessed risk label, base tier first
    #[must_use]
    pub fn generate(
        risk_label: RiskLabel,
        inputs: &PersonalInputs,
        weather: &WeatherReading,
    ) -> Vec<RecommendationRecord> {
        let mut records = vec![Self::base_tier(risk_label)];

        if inputs.hydration_level == Some(HydrationLevel::Poor) {
            records.push(RecommendationRecord::new(
                "Critical Hydration Needed",
                "You are starting dehydrated. Drink 500ml water immediately.",
                Urgency::High,
            ));
        } else if weather.temperature > 35.0 {
            records.push(RecommendationRecord::new(
                "Increase Water Intake",
                "High heat requires drinking 1 cup of water every 20 mins.",
                Urgency::Medium,
            ));
        }

        if inputs
            .activity_level
            .is_some_and(ActivityLevel::is_strenuous)
            && risk_label != RiskLabel::Low
        {
            records.push(RecommendationRecord::new(
                "Reduce Physical Exertion",
                "Consider rescheduling heavy tasks to cooler hours.",
                Urgency::High,
            ));
        }

        if inputs.age_group.is_some_and(AgeGroup::is_vulnerable)
            && risk_label >= RiskLabel::Moderate
        {
            records.push(RecommendationRecord::new(
                "High Vulnerability Alert",
                "Older age groups are at higher risk. Take extra precautions.",
                Urgency::High,
            ));
        }

        records
    }

    fn base_tier(risk_label: RiskLabel) -> RecommendationRecord {
        match risk_label {
            RiskLabel::Extreme => RecommendationRecord::new(
                "STOP WORK IMMEDIATELY",
                "Conditions are life-threatening. Seek shade and cool down now.",
                Urgency::High,
            ),
            RiskLabel::High => RecommendationRecord::new(
                "Mandatory Rest Breaks",
                "Take a 15-minute break every hour in a cool area.",
                Urgency::High,
            ),
            RiskLabel::Moderate => RecommendationRecord::new(
                "Monitor Condition",
                "Conditions are worsening. Watch for signs of fatigue.",
                Urgency::Medium,
            ),
            RiskLabel::Low => RecommendationRecord::new(
                "Safe to Work",
                "Standard safety precautions apply.",
                Urgency::Low,
            ),
        }
    }
}
