//! StrokeAssist - stroke risk prediction service
//!
//! Serves a pre-trained logistic regression stroke classifier behind a form
//! endpoint, explains each prediction with its strongest coefficients, and
//! ships a keyword chatbot plus a descriptive analytics dashboard.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Chatbot, LogisticModel, ModelError, Predictor, RiskClassifier};
pub use models::{PatientForm, Prediction, RiskLabel, StrokeRecord};
