use crate::models::StrokeRecord;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the analytics dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is empty: {0}")]
    Empty(String),

    #[error("Invalid sampling weights: {0}")]
    Weights(#[from] rand::distr::weighted::Error),

    #[error("Invalid sampling distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}

/// Where the dashboard data came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    Csv { path: PathBuf },
    Synthetic { samples: usize, seed: u64 },
}

/// Read-only dataset backing the dashboard
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<StrokeRecord>,
    pub source: DataSource,
}

impl Dataset {
    /// Load the CSV at `path` if it exists, otherwise generate synthetic data
    pub fn load_or_synthesize(path: Option<&Path>, samples: usize, seed: u64) -> Result<Self, DatasetError> {
        if let Some(path) = path {
            match load_csv(path) {
                Ok(records) => {
                    tracing::info!("Loaded {} dashboard records from {}", records.len(), path.display());
                    return Ok(Self {
                        records,
                        source: DataSource::Csv { path: path.to_path_buf() },
                    });
                }
                Err(DatasetError::NotFound(p)) => {
                    tracing::warn!("No stroke dataset found at {}", p);
                }
                Err(e) => {
                    tracing::error!("Failed to load stroke dataset from {}: {}", path.display(), e);
                }
            }
        }

        tracing::warn!("Using synthetic data for the dashboard ({} samples, seed {})", samples, seed);
        Ok(Self {
            records: generate_synthetic(samples, seed)?,
            source: DataSource::Synthetic { samples, seed },
        })
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, DataSource::Synthetic { .. })
    }
}

/// Load stroke records from a CSV file with the public dataset's header
pub fn load_csv(path: &Path) -> Result<Vec<StrokeRecord>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let records = reader
        .deserialize::<StrokeRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(DatasetError::Empty(path.display().to_string()));
    }

    Ok(records)
}

const GENDERS: [(&str, f64); 3] = [("Male", 0.48), ("Female", 0.51), ("Other", 0.01)];
const MARRIED: [&str; 2] = ["Yes", "No"];
const WORK_TYPES: [&str; 5] = ["Private", "Self-employed", "Govt_job", "children", "Never_worked"];
const RESIDENCES: [&str; 2] = ["Urban", "Rural"];
const SMOKING: [&str; 4] = ["never_smoked", "formerly_smoked", "smokes", "Unknown"];

/// Distributions behind the synthetic rows
struct SyntheticSampler {
    gender: WeightedIndex<f64>,
    age: Normal<f64>,
    glucose: Normal<f64>,
    bmi: Normal<f64>,
}

impl SyntheticSampler {
    fn new() -> Result<Self, DatasetError> {
        Ok(Self {
            gender: WeightedIndex::new(GENDERS.iter().map(|(_, weight)| *weight))?,
            age: Normal::new(45.0, 20.0)?,
            glucose: Normal::new(106.0, 45.0)?,
            bmi: Normal::new(28.0, 7.0)?,
        })
    }

    fn record<R: Rng + ?Sized>(&self, id: u32, rng: &mut R) -> StrokeRecord {
        let gender = GENDERS[self.gender.sample(rng)].0;
        let age = self.age.sample(rng).clamp(0.0, 100.0);
        let hypertension = u8::from(rng.random_bool(0.2));
        let heart_disease = u8::from(rng.random_bool(0.1));
        let ever_married = pick(rng, &MARRIED);
        let work_type = pick(rng, &WORK_TYPES);
        let residence_type = pick(rng, &RESIDENCES);
        let avg_glucose_level = self.glucose.sample(rng).clamp(50.0, 300.0);
        let bmi = self.bmi.sample(rng).clamp(10.0, 60.0);
        let smoking_status = pick(rng, &SMOKING);

        let stroke_prob = (0.05
            + 0.1 * f64::from(u8::from(age > 60.0))
            + 0.1 * f64::from(hypertension)
            + 0.1 * f64::from(heart_disease)
            + 0.05 * f64::from(u8::from(avg_glucose_level > 200.0)))
        .clamp(0.0, 0.9);
        let stroke = u8::from(rng.random_bool(stroke_prob));

        StrokeRecord {
            id,
            gender: gender.to_string(),
            age,
            hypertension,
            heart_disease,
            ever_married: ever_married.to_string(),
            work_type: work_type.to_string(),
            residence_type: residence_type.to_string(),
            avg_glucose_level,
            bmi: Some(bmi),
            smoking_status: smoking_status.to_string(),
            stroke,
        }
    }
}

/// Generate a synthetic dataset shaped like the public stroke dataset.
///
/// Stroke outcomes are correlated with age, hypertension, heart disease and
/// glucose so the dashboard has something to show. Same seed, same rows.
pub fn generate_synthetic(samples: usize, seed: u64) -> Result<Vec<StrokeRecord>, DatasetError> {
    let sampler = SyntheticSampler::new()?;
    let mut rng = StdRng::seed_from_u64(seed);

    Ok((1..=samples)
        .map(|id| sampler.record(id as u32, &mut rng))
        .collect())
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, choices: &[&'a str]) -> &'a str {
    choices.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_synthetic_is_deterministic() {
        let a = generate_synthetic(50, 42).unwrap();
        let b = generate_synthetic(50, 42).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, generate_synthetic(50, 7).unwrap());
    }

    #[test]
    fn test_synthetic_respects_bounds() {
        let records = generate_synthetic(500, 42).unwrap();
        assert_eq!(records.len(), 500);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[499].id, 500);

        for r in &records {
            assert!((0.0..=100.0).contains(&r.age));
            assert!((50.0..=300.0).contains(&r.avg_glucose_level));
            let bmi = r.bmi.unwrap();
            assert!((10.0..=60.0).contains(&bmi));
            assert!(r.stroke <= 1 && r.hypertension <= 1 && r.heart_disease <= 1);
            assert!(WORK_TYPES.contains(&r.work_type.as_str()));
            assert!(SMOKING.contains(&r.smoking_status.as_str()));
        }

        // Roughly 20% hypertension
        let hyper = records.iter().filter(|r| r.hypertension == 1).count();
        assert!(hyper > 50 && hyper < 150, "unexpected hypertension count {}", hyper);
    }

    #[test]
    fn test_synthetic_gender_follows_weights() {
        let records = generate_synthetic(2000, 42).unwrap();
        let count = |g: &str| records.iter().filter(|r| r.gender == g).count();

        let (male, female, other) = (count("Male"), count("Female"), count("Other"));
        assert_eq!(male + female + other, 2000);
        assert!(female > 900 && female < 1140, "unexpected female count {}", female);
        assert!(male > 860 && male < 1060, "unexpected male count {}", male);
        assert!(other < 60, "unexpected other count {}", other);
    }

    #[test]
    fn test_load_csv_with_missing_bmi() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,gender,age,hypertension,heart_disease,ever_married,work_type,Residence_type,avg_glucose_level,bmi,smoking_status,stroke"
        )
        .unwrap();
        writeln!(file, "9046,Male,67,0,1,Yes,Private,Urban,228.69,36.6,formerly smoked,1").unwrap();
        writeln!(file, "51676,Female,61,0,0,Yes,Self-employed,Rural,202.21,N/A,never smoked,1").unwrap();

        let records = load_csv(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bmi, Some(36.6));
        assert_eq!(records[1].bmi, None);
        assert_eq!(records[1].residence_type, "Rural");
    }

    #[test]
    fn test_missing_csv_falls_back_to_synthetic() {
        let dataset = Dataset::load_or_synthesize(Some(Path::new("/nonexistent/stroke.csv")), 20, 42).unwrap();
        assert!(dataset.is_synthetic());
        assert_eq!(dataset.records.len(), 20);
        assert!(matches!(load_csv(Path::new("/nonexistent/stroke.csv")), Err(DatasetError::NotFound(_))));
    }
}
