//! Data models for the HeatGuard service
//!
//! This module contains the core domain models organized by concern:
//! - Weather: current conditions and their provenance
//! - Inputs: the personal exposure profile supplied by the caller
//! - Risk: risk labels, assessments and safety recommendations

pub mod inputs;
pub mod risk;
pub mod weather;

// Re-export all public types for convenient access
pub use inputs::{ActivityLevel, AgeGroup, HydrationLevel, PersonalInputs};
pub use risk::{RecommendationRecord, RiskAssessment, RiskLabel, Urgency};
pub use weather::{WeatherReading, WeatherSource};
