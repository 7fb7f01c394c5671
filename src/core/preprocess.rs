use crate::models::PatientForm;

/// Form fields passed through as numbers
pub const NUMERIC_FEATURES: [&str; 3] = ["age", "avg_glucose_level", "bmi"];

/// Form fields expanded into one-hot columns, with the columns each may produce
pub const CATEGORICAL_FEATURES: [(&str, &[&str]); 7] = [
    ("gender", &["gender_Female", "gender_Male", "gender_Other"]),
    ("hypertension", &["hypertension_0", "hypertension_1"]),
    ("heart_disease", &["heart_disease_0", "heart_disease_1"]),
    ("ever_married", &["ever_married_No", "ever_married_Yes"]),
    (
        "work_type",
        &[
            "work_type_Govt_job",
            "work_type_Never_worked",
            "work_type_Private",
            "work_type_Self-employed",
            "work_type_children",
        ],
    ),
    ("Residence_type", &["Residence_type_Rural", "Residence_type_Urban"]),
    (
        "smoking_status",
        &[
            "smoking_status_Unknown",
            "smoking_status_formerly_smoked",
            "smoking_status_never_smoked",
            "smoking_status_smokes",
        ],
    ),
];

/// Feature vector plus the fields that could not be used
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    pub features: Vec<f64>,
    pub warnings: Vec<String>,
}

/// Map a raw form onto the classifier's ordered schema.
///
/// The output always has exactly `feature_names.len()` entries in schema
/// order. Columns that the form does not set remain 0.0.
pub fn preprocess(form: &PatientForm, feature_names: &[String]) -> Preprocessed {
    let mut features = vec![0.0; feature_names.len()];
    let mut warnings = Vec::new();

    let position = |column: &str| feature_names.iter().position(|name| name == column);

    for field in NUMERIC_FEATURES {
        let (Some(raw), Some(idx)) = (form.get(field), position(field)) else {
            continue;
        };
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => features[idx] = value,
            _ => {
                tracing::warn!("Could not convert {} value {:?} to a number", field, raw);
                warnings.push(format!("Ignored non-numeric value for {}", field));
            }
        }
    }

    for (field, columns) in CATEGORICAL_FEATURES {
        let Some(value) = form.get(field) else {
            continue;
        };
        let column = format!("{}_{}", field, value);
        if !columns.contains(&column.as_str()) {
            tracing::warn!("Unrecognized {} category {:?}", field, value);
            warnings.push(format!("Ignored unrecognized value for {}", field));
            continue;
        }
        if let Some(idx) = position(&column) {
            features[idx] = 1.0;
        }
    }

    Preprocessed { features, warnings }
}
