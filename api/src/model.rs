use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RecommendationKind {
    Pricing,
    Discount,
    Alert,
}

// Low is never emitted by the current rules, the dashboard still renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DemandForecast {
    High,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
    pub impact: Impact,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, message: &str, impact: Impact) -> Self {
        Self {
            kind,
            message: message.to_string(),
            impact,
        }
    }
}
