use serde::{Deserialize, Serialize};
use crate::models::domain::{FeatureImportance, Prediction, RiskLabel};

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub prediction_id: String,
    pub prediction: RiskLabel,
    pub probability: String,
    pub feature_importance: FeatureImportance,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl PredictionResponse {
    pub fn new(prediction_id: String, prediction: Prediction) -> Self {
        Self {
            prediction_id,
            probability: prediction.formatted_probability(),
            prediction: prediction.label,
            feature_importance: prediction.feature_importance,
            warnings: prediction.warnings,
        }
    }
}

/// Chatbot reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_loaded: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
