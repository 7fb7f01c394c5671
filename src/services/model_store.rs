use crate::core::classifier::{LogisticModel, ModelError};
use std::fs;
use std::path::Path;

/// Load the trained classifier artifact from a JSON file.
///
/// The file carries the ordered feature schema, the coefficients aligned
/// with it, and the intercept.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LogisticModel, ModelError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ModelError::NotFound(path.display().to_string()));
    }

    tracing::info!("Loading model from: {}", path.display());

    let raw = fs::read_to_string(path)?;
    let model: LogisticModel = serde_json::from_str(&raw)?;
    model.validate()?;

    let preview: Vec<&str> = model
        .feature_names
        .iter()
        .take(5)
        .map(String::as_str)
        .collect();
    tracing::info!(
        "Model loaded successfully. Feature names: {:?}... (total: {})",
        preview,
        model.feature_names.len()
    );

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::RiskClassifier;
    use std::io::Write;

    fn write_model(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_model() {
        let file = write_model(
            r#"{"feature_names": ["age", "bmi"], "coefficients": [0.05, 0.01], "intercept": -4.2}"#,
        );
        let model = load_model(file.path()).unwrap();

        assert_eq!(model.feature_names(), &["age".to_string(), "bmi".to_string()]);
        assert_eq!(model.intercept, -4.2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_model("/nonexistent/stroke_model.json").unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_malformed_file() {
        let file = write_model("not json");
        assert!(matches!(load_model(file.path()), Err(ModelError::Malformed(_))));
    }

    #[test]
    fn test_missing_feature_names() {
        let file = write_model(r#"{"feature_names": [], "coefficients": []}"#);
        assert!(matches!(load_model(file.path()), Err(ModelError::MissingFeatureNames)));
    }

    #[test]
    fn test_misaligned_coefficients() {
        let file = write_model(r#"{"feature_names": ["age"], "coefficients": [0.1, 0.2]}"#);
        assert!(matches!(
            load_model(file.path()),
            Err(ModelError::DimensionMismatch { expected: 1, got: 2 })
        ));
    }
}
