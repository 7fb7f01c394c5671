use crate::models::FeatureImportance;

/// Number of coefficients reported alongside a prediction
pub const DEFAULT_TOP_FEATURES: usize = 5;

/// Collapse an encoded column name to the form field it came from.
///
/// Everything before the first underscore is kept, so `gender_Male`
/// becomes `gender`. Names without an underscore are returned unchanged.
#[inline]
pub fn display_name(feature: &str) -> &str {
    feature.split('_').next().unwrap_or(feature)
}

/// Rank coefficients by magnitude and keep the strongest `top_n` non-zero ones.
///
/// Returns an empty mapping when the coefficients do not line up with the
/// schema. Several columns can share a display name; a later (weaker) column
/// overwrites the earlier value but keeps its position, and still counts
/// towards `top_n`.
pub fn top_features(
    feature_names: &[String],
    coefficients: &[f64],
    top_n: usize,
) -> FeatureImportance {
    let mut importance = FeatureImportance::new();

    if coefficients.len() != feature_names.len() {
        tracing::warn!(
            "Importance array length ({}) doesn't match feature names length ({})",
            coefficients.len(),
            feature_names.len()
        );
        return importance;
    }

    let mut ranked: Vec<(&String, f64)> = feature_names
        .iter()
        .zip(coefficients.iter().copied())
        .collect();

    // Stable sort keeps schema order between equal magnitudes
    ranked.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .filter(|(_, coef)| coef.abs() > 0.0)
        .take(top_n)
        .for_each(|(name, coef)| importance.upsert(display_name(name).to_string(), coef));

    importance
}

/// Every feature sorted by absolute coefficient, descending
pub fn rank_by_magnitude(feature_names: &[String], coefficients: &[f64]) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = feature_names
        .iter()
        .cloned()
        .zip(coefficients.iter().copied())
        .collect();
    ranked.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Every feature sorted by signed coefficient, descending
pub fn rank_by_value(feature_names: &[String], coefficients: &[f64]) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = feature_names
        .iter()
        .cloned()
        .zip(coefficients.iter().copied())
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("gender_Male"), "gender");
        assert_eq!(display_name("avg_glucose_level"), "avg");
        assert_eq!(display_name("age"), "age");
    }

    #[test]
    fn test_top_features_ranked_by_magnitude() {
        let features = names(&["age", "bmi", "hypertension_1", "gender_Male"]);
        let coefs = [0.07, 0.01, -0.9, 0.3];

        let top = top_features(&features, &coefs, 3);

        assert_eq!(top.names().collect::<Vec<_>>(), vec!["hypertension", "gender", "age"]);
        assert_eq!(top.get("hypertension"), Some(-0.9));
    }

    #[test]
    fn test_zero_coefficients_skipped() {
        let features = names(&["age", "bmi", "gender_Male"]);
        let top = top_features(&features, &[0.0, 0.5, 0.0], 5);

        assert_eq!(top.len(), 1);
        assert_eq!(top.get("bmi"), Some(0.5));
    }

    #[test]
    fn test_collisions_overwrite_and_count() {
        let features = names(&["work_type_Private", "age", "work_type_children", "bmi"]);
        let coefs = [1.0, 0.8, -0.6, 0.4];

        let top = top_features(&features, &coefs, 3);

        // Three columns visited, two distinct display names
        assert_eq!(top.names().collect::<Vec<_>>(), vec!["work", "age"]);
        assert_eq!(top.get("work"), Some(-0.6));
        assert_eq!(top.get("bmi"), None);
    }

    #[test]
    fn test_length_mismatch_gives_empty() {
        let features = names(&["age", "bmi"]);
        assert!(top_features(&features, &[1.0], 5).is_empty());
    }

    #[test]
    fn test_rank_by_value_keeps_sign() {
        let features = names(&["a", "b", "c"]);
        let ranked = rank_by_value(&features, &[-2.0, 1.0, 0.5]);
        assert_eq!(ranked[0], ("b".to_string(), 1.0));
        assert_eq!(ranked[2], ("a".to_string(), -2.0));

        let by_magnitude = rank_by_magnitude(&features, &[-2.0, 1.0, 0.5]);
        assert_eq!(by_magnitude[0].0, "a");
    }
}
