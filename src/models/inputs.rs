//! Personal exposure profile supplied with prediction requests

use serde::{Deserialize, Serialize};

/// Physical intensity of the planned work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Light,
    Moderate,
    Heavy,
    Extreme,
}

impl ActivityLevel {
    /// All levels, in one-hot encoding order
    pub const ALL: [Self; 4] = [Self::Light, Self::Moderate, Self::Heavy, Self::Extreme];

    /// Parse a caller-supplied string; unknown values yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "heavy" => Some(Self::Heavy),
            "extreme" => Some(Self::Extreme),
            _ => None,
        }
    }

    /// Position within [`Self::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Moderate => 1,
            Self::Heavy => 2,
            Self::Extreme => 3,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::Extreme => "extreme",
        }
    }

    /// Whether the activity warrants exertion warnings
    #[must_use]
    pub fn is_strenuous(self) -> bool {
        matches!(self, Self::Heavy | Self::Extreme)
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current hydration state of the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HydrationLevel {
    Well,
    Moderate,
    Poor,
}

impl HydrationLevel {
    /// All levels, in one-hot encoding order
    pub const ALL: [Self; 3] = [Self::Well, Self::Moderate, Self::Poor];

    /// Parse a caller-supplied string; unknown values yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "well" => Some(Self::Well),
            "moderate" => Some(Self::Moderate),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }

    /// Position within [`Self::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Well => 0,
            Self::Moderate => 1,
            Self::Poor => 2,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Well => "well",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for HydrationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age bracket of the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    Age18To25,
    #[serde(rename = "26-35")]
    Age26To35,
    #[serde(rename = "36-45")]
    Age36To45,
    #[serde(rename = "46-55")]
    Age46To55,
    #[serde(rename = "55+")]
    Age55Plus,
}

impl AgeGroup {
    /// All brackets, in one-hot encoding order
    pub const ALL: [Self; 5] = [
        Self::Age18To25,
        Self::Age26To35,
        Self::Age36To45,
        Self::Age46To55,
        Self::Age55Plus,
    ];

    /// Parse a caller-supplied string; unknown values yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "18-25" => Some(Self::Age18To25),
            "26-35" => Some(Self::Age26To35),
            "36-45" => Some(Self::Age36To45),
            "46-55" => Some(Self::Age46To55),
            "55+" => Some(Self::Age55Plus),
            _ => None,
        }
    }

    /// Position within [`Self::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Age18To25 => 0,
            Self::Age26To35 => 1,
            Self::Age36To45 => 2,
            Self::Age46To55 => 3,
            Self::Age55Plus => 4,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age18To25 => "18-25",
            Self::Age26To35 => "26-35",
            Self::Age36To45 => "36-45",
            Self::Age46To55 => "46-55",
            Self::Age55Plus => "55+",
        }
    }

    /// Age brackets with elevated physiological heat-stress risk
    #[must_use]
    pub fn is_vulnerable(self) -> bool {
        matches!(self, Self::Age46To55 | Self::Age55Plus)
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Personal exposure profile for one assessment
///
/// Every field is optional: absent fields simply match no recommendation
/// rules and contribute empty one-hot blocks to the feature vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInputs {
    /// City name used for weather lookup and reporting
    pub city: Option<String>,
    /// Latitude for weather lookup
    pub latitude: Option<f64>,
    /// Longitude for weather lookup
    pub longitude: Option<f64>,
    /// Planned exposure duration in hours
    pub exposure_hours: Option<f64>,
    /// Physical intensity of the planned work
    pub activity_level: Option<ActivityLevel>,
    /// Current hydration state
    pub hydration_level: Option<HydrationLevel>,
    /// Age bracket
    pub age_group: Option<AgeGroup>,
}
