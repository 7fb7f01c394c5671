use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or evaluating a classifier
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model file not found: {0}")]
    NotFound(String),

    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Feature names not found in model data")]
    MissingFeatureNames,

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Model is not loaded")]
    NotLoaded,
}

/// A fitted binary classifier over a fixed, ordered feature schema
pub trait RiskClassifier: Send + Sync {
    /// Ordered schema the input vector must follow
    fn feature_names(&self) -> &[String];

    /// Probability of the positive class
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Hard class decision at the classifier's own 0.5 boundary
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        Ok(u8::from(self.predict_proba(features)? >= 0.5))
    }

    /// Linear coefficients aligned with `feature_names`, if the model has any
    fn coefficients(&self) -> Option<&[f64]> {
        None
    }
}

/// Logistic regression artifact exported from the training notebook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LogisticModel {
    /// Build a model, checking that the schema and coefficients line up
    pub fn new(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, ModelError> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.is_empty() {
            return Err(ModelError::MissingFeatureNames);
        }
        if self.coefficients.len() != self.feature_names.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.feature_names.len(),
                got: self.coefficients.len(),
            });
        }
        Ok(())
    }

    /// Linear decision value before the sigmoid
    fn decision_function(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

impl RiskClassifier for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }
        Ok(sigmoid(self.decision_function(features)))
    }

    fn coefficients(&self) -> Option<&[f64]> {
        Some(&self.coefficients)
    }
}

/// Numerically stable logistic function
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}
