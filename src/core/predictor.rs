use crate::core::{
    classifier::{ModelError, RiskClassifier},
    explain::{top_features, DEFAULT_TOP_FEATURES},
    preprocess::preprocess,
};
use crate::models::{PatientForm, Prediction, RiskLabel};
use std::sync::Arc;

/// Probability at or above which a patient is labelled high risk
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.7;

/// Prediction orchestrator
///
/// # Pipeline Stages
/// 1. Map the raw form onto the classifier schema
/// 2. Score the vector with the classifier
/// 3. Apply the service risk threshold
/// 4. Rank coefficients for the explanation
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn RiskClassifier>,
    risk_threshold: f64,
    top_n: usize,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn RiskClassifier>, risk_threshold: f64, top_n: usize) -> Self {
        Self {
            classifier,
            risk_threshold,
            top_n,
        }
    }

    pub fn with_defaults(classifier: Arc<dyn RiskClassifier>) -> Self {
        Self::new(classifier, DEFAULT_RISK_THRESHOLD, DEFAULT_TOP_FEATURES)
    }

    pub fn classifier(&self) -> &dyn RiskClassifier {
        self.classifier.as_ref()
    }

    pub fn risk_threshold(&self) -> f64 {
        self.risk_threshold
    }

    /// Run the full pipeline for one submitted form
    pub fn predict(&self, form: &PatientForm) -> Result<Prediction, ModelError> {
        let feature_names = self.classifier.feature_names();
        let input = preprocess(form, feature_names);

        let probability = self.classifier.predict_proba(&input.features)?;
        let class = self.classifier.predict(&input.features)?;
        let label = RiskLabel::from_class(u8::from(probability >= self.risk_threshold));

        tracing::debug!(
            "Classifier decision {} at p={:.4}, service label {:?} at threshold {}",
            class,
            probability,
            label,
            self.risk_threshold
        );

        let feature_importance = match self.classifier.coefficients() {
            Some(coefficients) => top_features(feature_names, coefficients, self.top_n),
            None => Default::default(),
        };

        Ok(Prediction {
            label,
            probability,
            feature_importance,
            warnings: input.warnings,
        })
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("features", &self.classifier.feature_names().len())
            .field("risk_threshold", &self.risk_threshold)
            .field("top_n", &self.top_n)
            .finish()
    }
}
