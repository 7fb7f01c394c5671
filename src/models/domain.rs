use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Raw patient form as submitted by the client: field name -> string value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientForm(pub HashMap<String, String>);

impl PatientForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly used by tests and benches
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.0.insert(field.to_string(), value.to_string());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Convert a JSON object into form values.
    ///
    /// Strings are kept as-is, numbers use their JSON text (integral floats
    /// without the fraction), booleans become "1"/"0" and nulls are dropped.
    /// Nested arrays/objects are ignored.
    pub fn from_json(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let fields = object
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    // 1.0 and 1 select the same category column
                    serde_json::Value::Number(n) => match n.as_f64() {
                        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                            format!("{}", f as i64)
                        }
                        _ => n.to_string(),
                    },
                    serde_json::Value::Bool(b) => if b { "1" } else { "0" }.to_string(),
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();
        Self(fields)
    }
}

impl From<HashMap<String, String>> for PatientForm {
    fn from(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }
}

/// Binary risk label shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    High,
    Low,
}

impl RiskLabel {
    pub fn from_class(class: u8) -> Self {
        if class == 1 { RiskLabel::High } else { RiskLabel::Low }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::High => "High Risk",
            RiskLabel::Low => "Low Risk",
        }
    }
}

impl Serialize for RiskLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Insertion-ordered display name -> coefficient mapping.
///
/// Serialized as a JSON object whose key order is the ranking order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureImportance(Vec<(String, f64)>);

impl FeatureImportance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting in place if the name already exists
    pub fn upsert(&mut self, name: String, value: f64) {
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FeatureImportance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Outcome of a single stroke risk prediction
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: RiskLabel,
    pub probability: f64,
    pub feature_importance: FeatureImportance,
    /// Form fields that were present but could not be used
    pub warnings: Vec<String>,
}

impl Prediction {
    /// Probability formatted as a percentage with two decimals, e.g. "12.34%"
    pub fn formatted_probability(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

/// One row of the stroke dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeRecord {
    pub id: u32,
    pub gender: String,
    pub age: f64,
    pub hypertension: u8,
    pub heart_disease: u8,
    pub ever_married: String,
    pub work_type: String,
    #[serde(rename = "Residence_type")]
    pub residence_type: String,
    pub avg_glucose_level: f64,
    #[serde(deserialize_with = "deserialize_optional_bmi")]
    pub bmi: Option<f64>,
    pub smoking_status: String,
    pub stroke: u8,
}

/// The public dataset writes missing BMI values as "N/A"
fn deserialize_optional_bmi<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}
