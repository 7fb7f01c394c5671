// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FeatureImportance, PatientForm, Prediction, RiskLabel, StrokeRecord};
pub use requests::{ChatRequest, RiskAssessmentRequest, SmokingHabit};
pub use responses::{ChatResponse, ErrorResponse, HealthResponse, PredictionResponse};
