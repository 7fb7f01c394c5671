use serde::{Deserialize, Serialize};
use validator::Validate;

/// Chatbot message request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub message: String,
}

/// Smoking answer offered by the dashboard risk calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingHabit {
    #[default]
    #[serde(alias = "Never Smoked")]
    NeverSmoked,
    #[serde(alias = "Formerly Smoked")]
    FormerlySmoked,
    #[serde(alias = "Currently Smoking")]
    CurrentlySmoking,
}

/// Request for the simplified dashboard risk calculator
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RiskAssessmentRequest {
    #[validate(range(min = 20.0, max = 100.0))]
    pub age: f64,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default, alias = "heartDisease")]
    pub heart_disease: bool,
    #[serde(default = "default_glucose", alias = "avg_glucose_level")]
    #[validate(range(min = 50.0, max = 300.0))]
    pub glucose: f64,
    #[serde(default)]
    pub smoking: SmokingHabit,
}

fn default_glucose() -> f64 {
    100.0
}
