//! Descriptive statistics behind the analytics dashboard
//!
//! Everything here is a pure function over a slice of [`StrokeRecord`]s or the
//! classifier coefficients, so the dashboard routes only have to serialize.

use crate::core::explain::{rank_by_magnitude, rank_by_value};
use crate::models::{RiskAssessmentRequest, SmokingHabit, StrokeRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of rows shown in the dataset preview
pub const PREVIEW_ROWS: usize = 5;
/// Number of features shown in each model insight chart
pub const INSIGHT_FEATURES: usize = 15;

/// Age bins used by the demographics view: (lower exclusive, upper inclusive, label)
pub const AGE_GROUPS: [(f64, f64, &str); 5] = [
    (0.0, 20.0, "0-20"),
    (20.0, 40.0, "21-40"),
    (40.0, 60.0, "41-60"),
    (60.0, 80.0, "61-80"),
    (80.0, 100.0, "81-100"),
];

pub const DISCLAIMER: &str = "Note: This is a simplified visualization and not a medical assessment. \
     Always consult with healthcare professionals for proper medical advice.";

/// pandas-style `describe` of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_records: usize,
    pub stroke_cases: usize,
    pub stroke_percentage: f64,
    pub non_stroke_cases: usize,
    pub non_stroke_percentage: f64,
    pub preview: Vec<StrokeRecord>,
    pub statistics: Vec<ColumnSummary>,
}

/// Stroke incidence within one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRate {
    pub group: String,
    pub records: usize,
    pub stroke_cases: usize,
    pub incidence_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Demographics {
    pub by_gender: Vec<GroupRate>,
    pub by_work_type: Vec<GroupRate>,
    pub by_age_group: Vec<GroupRate>,
    pub by_residence_type: Vec<GroupRate>,
}

/// Five-number summary of a column within one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub group: String,
    pub count: usize,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskFactors {
    pub by_hypertension: Vec<GroupRate>,
    pub by_heart_disease: Vec<GroupRate>,
    pub by_smoking_status: Vec<GroupRate>,
    pub glucose_by_stroke: Vec<BoxStats>,
    pub bmi_by_stroke: Vec<BoxStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskCurvePoint {
    pub age: f64,
    pub without_hypertension: f64,
    pub with_hypertension: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelInsights {
    /// False when no model with coefficients is available
    pub model_loaded: bool,
    /// Absolute coefficient values, strongest first
    pub importance: Vec<FeatureWeight>,
    /// Signed coefficients, most positive first
    pub influence: Vec<FeatureWeight>,
    pub risk_curve: Vec<RiskCurvePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score < 0.2 {
            RiskBand::Low
        } else if score < 0.5 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskBand::Low => "Your estimated risk is relatively low based on the factors provided.",
            RiskBand::Moderate => {
                "Your estimated risk is moderate. Consider discussing with a healthcare provider."
            }
            RiskBand::High => "Your estimated risk is high. Please consult with a healthcare provider.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub percentage: String,
    pub band: RiskBand,
    pub message: String,
    pub disclaimer: String,
}

/// Dataset overview: counts, preview and numeric summaries
pub fn overview(records: &[StrokeRecord]) -> Overview {
    let total_records = records.len();
    let stroke_cases = records.iter().filter(|r| r.stroke == 1).count();
    let non_stroke_cases = total_records - stroke_cases;

    let ages: Vec<f64> = records.iter().map(|r| r.age).collect();
    let glucose: Vec<f64> = records.iter().map(|r| r.avg_glucose_level).collect();
    let bmi: Vec<f64> = records.iter().filter_map(|r| r.bmi).collect();

    let statistics = [("age", ages), ("avg_glucose_level", glucose), ("bmi", bmi)]
        .into_iter()
        .filter_map(|(column, values)| describe(column, &values))
        .collect();

    Overview {
        total_records,
        stroke_cases,
        stroke_percentage: percentage(stroke_cases, total_records),
        non_stroke_cases,
        non_stroke_percentage: percentage(non_stroke_cases, total_records),
        preview: records.iter().take(PREVIEW_ROWS).cloned().collect(),
        statistics,
    }
}

pub fn demographics(records: &[StrokeRecord]) -> Demographics {
    Demographics {
        by_gender: incidence_by(records, |r| Some(r.gender.clone())),
        by_work_type: incidence_by(records, |r| Some(r.work_type.clone())),
        by_age_group: incidence_by_age_group(records),
        by_residence_type: incidence_by(records, |r| Some(r.residence_type.clone())),
    }
}

pub fn risk_factors(records: &[StrokeRecord]) -> RiskFactors {
    RiskFactors {
        by_hypertension: incidence_by(records, |r| Some(r.hypertension.to_string())),
        by_heart_disease: incidence_by(records, |r| Some(r.heart_disease.to_string())),
        by_smoking_status: incidence_by(records, |r| Some(r.smoking_status.clone())),
        glucose_by_stroke: box_by_stroke(records, |r| Some(r.avg_glucose_level)),
        bmi_by_stroke: box_by_stroke(records, |r| r.bmi),
    }
}

/// Coefficient charts plus the illustrative age/hypertension risk curve
pub fn model_insights(model: Option<(&[String], &[f64])>) -> ModelInsights {
    let (importance, influence) = match model {
        Some((names, coefficients)) if names.len() == coefficients.len() => {
            let importance = rank_by_magnitude(names, coefficients)
                .into_iter()
                .take(INSIGHT_FEATURES)
                .map(|(feature, value)| FeatureWeight { feature, value: value.abs() })
                .collect();
            let influence = rank_by_value(names, coefficients)
                .into_iter()
                .take(INSIGHT_FEATURES)
                .map(|(feature, value)| FeatureWeight { feature, value })
                .collect();
            (importance, influence)
        }
        _ => (Vec::new(), Vec::new()),
    };

    ModelInsights {
        model_loaded: model.is_some(),
        importance,
        influence,
        risk_curve: risk_curve(20.0, 80.0, 100),
    }
}

/// Simplified linear risk by age, with and without hypertension
pub fn risk_curve(start_age: f64, end_age: f64, points: usize) -> Vec<RiskCurvePoint> {
    linspace(start_age, end_age, points)
        .into_iter()
        .map(|age| {
            let base = 0.01 + age * 0.001;
            RiskCurvePoint {
                age,
                without_hypertension: base.min(1.0),
                with_hypertension: (base + 0.1).min(1.0),
            }
        })
        .collect()
}

/// Score for the interactive dashboard risk calculator.
///
/// This is an illustrative additive score, not the trained classifier.
pub fn assess_risk(req: &RiskAssessmentRequest) -> RiskAssessment {
    let mut score = 0.01 + req.age * 0.005;
    if req.hypertension {
        score += 0.15;
    }
    if req.heart_disease {
        score += 0.15;
    }
    if req.glucose > 140.0 {
        score += 0.05;
    }
    score += match req.smoking {
        SmokingHabit::CurrentlySmoking => 0.1,
        SmokingHabit::FormerlySmoked => 0.05,
        SmokingHabit::NeverSmoked => 0.0,
    };
    let score = score.min(0.95);
    let band = RiskBand::from_score(score);

    RiskAssessment {
        score,
        percentage: format!("{:.1}%", score * 100.0),
        band,
        message: band.message().to_string(),
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// Stroke incidence per group, groups sorted by name; `None` keys are skipped
pub fn incidence_by<F>(records: &[StrokeRecord], key: F) -> Vec<GroupRate>
where
    F: Fn(&StrokeRecord) -> Option<String>,
{
    let mut groups: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    for record in records {
        if let Some(group) = key(record) {
            let entry = groups.entry(group).or_default();
            entry.0 += 1;
            entry.1 += usize::from(record.stroke == 1);
        }
    }

    groups
        .into_iter()
        .map(|(group, (count, strokes))| group_rate(group, count, strokes))
        .collect()
}

/// Label of the age bin containing `age`, right-inclusive
pub fn age_group(age: f64) -> Option<&'static str> {
    AGE_GROUPS
        .iter()
        .find(|(lower, upper, _)| age > *lower && age <= *upper)
        .map(|(_, _, label)| *label)
}

/// Incidence per age bin, in bin order; empty bins are left out
fn incidence_by_age_group(records: &[StrokeRecord]) -> Vec<GroupRate> {
    AGE_GROUPS
        .iter()
        .filter_map(|(_, _, label)| {
            let members = records
                .iter()
                .filter(|r| age_group(r.age) == Some(*label));
            let (count, strokes) = members.fold((0, 0), |(c, s), r| (c + 1, s + usize::from(r.stroke == 1)));
            (count > 0).then(|| group_rate(label.to_string(), count, strokes))
        })
        .collect()
}

fn box_by_stroke<F>(records: &[StrokeRecord], value: F) -> Vec<BoxStats>
where
    F: Fn(&StrokeRecord) -> Option<f64>,
{
    [(0u8, "No Stroke"), (1u8, "Stroke")]
        .into_iter()
        .filter_map(|(flag, label)| {
            let mut values: Vec<f64> = records
                .iter()
                .filter(|r| r.stroke == flag)
                .filter_map(&value)
                .collect();
            sort_floats(&mut values);
            Some(BoxStats {
                group: label.to_string(),
                count: values.len(),
                min: *values.first()?,
                q25: quantile_sorted(&values, 0.25)?,
                median: quantile_sorted(&values, 0.5)?,
                q75: quantile_sorted(&values, 0.75)?,
                max: *values.last()?,
            })
        })
        .collect()
}

/// Summary statistics for a column; `None` when it has no values
pub fn describe(column: &str, values: &[f64]) -> Option<ColumnSummary> {
    let mut sorted = values.to_vec();
    sort_floats(&mut sorted);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    // Sample standard deviation, NaN for a single value
    let std = if count > 1 {
        (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Some(ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: *sorted.first()?,
        q25: quantile_sorted(&sorted, 0.25)?,
        median: quantile_sorted(&sorted, 0.5)?,
        q75: quantile_sorted(&sorted, 0.75)?,
        max: *sorted.last()?,
    })
}

/// Linear-interpolated quantile of an ascending slice
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

fn sort_floats(values: &mut [f64]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

fn group_rate(group: String, count: usize, strokes: usize) -> GroupRate {
    GroupRate {
        group,
        records: count,
        stroke_cases: strokes,
        incidence_rate: if count > 0 { strokes as f64 / count as f64 } else { 0.0 },
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, gender: &str, age: f64, hypertension: u8, stroke: u8) -> StrokeRecord {
        StrokeRecord {
            id,
            gender: gender.to_string(),
            age,
            hypertension,
            heart_disease: 0,
            ever_married: "Yes".to_string(),
            work_type: "Private".to_string(),
            residence_type: "Urban".to_string(),
            avg_glucose_level: 100.0 + id as f64,
            bmi: if id % 2 == 0 { Some(25.0) } else { None },
            smoking_status: "never_smoked".to_string(),
            stroke,
        }
    }

    fn sample() -> Vec<StrokeRecord> {
        vec![
            record(1, "Male", 67.0, 1, 1),
            record(2, "Female", 45.0, 0, 0),
            record(3, "Female", 81.0, 1, 1),
            record(4, "Male", 20.0, 0, 0),
            record(5, "Other", 0.0, 0, 0),
            record(6, "Female", 35.0, 0, 0),
        ]
    }

    #[test]
    fn test_overview_counts() {
        let o = overview(&sample());
        assert_eq!(o.total_records, 6);
        assert_eq!(o.stroke_cases, 2);
        assert_eq!(o.non_stroke_cases, 4);
        assert!((o.stroke_percentage - 33.333).abs() < 0.01);
        assert_eq!(o.preview.len(), PREVIEW_ROWS);

        let bmi = o.statistics.iter().find(|s| s.column == "bmi").unwrap();
        assert_eq!(bmi.count, 3);
        assert_eq!(bmi.mean, 25.0);
    }

    #[test]
    fn test_describe_matches_pandas() {
        let summary = describe("x", &[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert!((summary.std - 1.2909944).abs() < 1e-6);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q25, 1.75);
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q75, 3.25);
        assert_eq!(summary.max, 4.0);

        assert!(describe("empty", &[]).is_none());
    }

    #[test]
    fn test_incidence_by_gender_sorted() {
        let rates = demographics(&sample()).by_gender;
        let groups: Vec<&str> = rates.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(groups, vec!["Female", "Male", "Other"]);

        assert_eq!(rates[0].records, 3);
        assert!((rates[0].incidence_rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(rates[1].incidence_rate, 0.5);
        assert_eq!(rates[2].incidence_rate, 0.0);
    }

    #[test]
    fn test_age_groups_are_right_inclusive() {
        assert_eq!(age_group(0.0), None);
        assert_eq!(age_group(0.5), Some("0-20"));
        assert_eq!(age_group(20.0), Some("0-20"));
        assert_eq!(age_group(20.1), Some("21-40"));
        assert_eq!(age_group(100.0), Some("81-100"));

        let by_age = demographics(&sample()).by_age_group;
        let labels: Vec<&str> = by_age.iter().map(|g| g.group.as_str()).collect();
        // The age 0 record falls outside every bin
        assert_eq!(labels, vec!["0-20", "21-40", "41-60", "61-80", "81-100"]);
        assert_eq!(by_age.iter().map(|g| g.records).sum::<usize>(), 5);
    }

    #[test]
    fn test_risk_factor_boxes() {
        let factors = risk_factors(&sample());
        assert_eq!(factors.by_hypertension[1].group, "1");
        assert_eq!(factors.by_hypertension[1].incidence_rate, 1.0);

        let stroke_glucose = &factors.glucose_by_stroke[1];
        assert_eq!(stroke_glucose.group, "Stroke");
        assert_eq!(stroke_glucose.min, 101.0);
        assert_eq!(stroke_glucose.max, 103.0);
        assert_eq!(stroke_glucose.median, 102.0);

        // Both stroke records have a missing BMI
        assert_eq!(factors.bmi_by_stroke.len(), 1);
        assert_eq!(factors.bmi_by_stroke[0].group, "No Stroke");
    }

    #[test]
    fn test_risk_curve_shape() {
        let curve = risk_curve(20.0, 80.0, 100);
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].age, 20.0);
        assert!((curve[99].age - 80.0).abs() < 1e-9);
        assert!((curve[0].without_hypertension - 0.03).abs() < 1e-12);
        assert!((curve[0].with_hypertension - 0.13).abs() < 1e-12);
    }

    #[test]
    fn test_model_insights() {
        let names: Vec<String> = ["age", "bmi", "hypertension_1"].iter().map(|s| s.to_string()).collect();
        let coefs = [0.05, -0.3, 0.2];

        let insights = model_insights(Some((names.as_slice(), &coefs[..])));
        assert!(insights.model_loaded);
        assert_eq!(insights.importance[0], FeatureWeight { feature: "bmi".to_string(), value: 0.3 });
        assert_eq!(insights.influence[0].feature, "hypertension_1");
        assert_eq!(insights.influence[2].value, -0.3);

        let empty = model_insights(None);
        assert!(!empty.model_loaded);
        assert!(empty.importance.is_empty());
        assert_eq!(empty.risk_curve.len(), 100);
    }

    #[test]
    fn test_assess_risk_bands() {
        let low = assess_risk(&RiskAssessmentRequest {
            age: 20.0,
            hypertension: false,
            heart_disease: false,
            glucose: 100.0,
            smoking: SmokingHabit::NeverSmoked,
        });
        assert!((low.score - 0.11).abs() < 1e-12);
        assert_eq!(low.band, RiskBand::Low);
        assert_eq!(low.percentage, "11.0%");

        let moderate = assess_risk(&RiskAssessmentRequest {
            age: 40.0,
            hypertension: false,
            heart_disease: false,
            glucose: 120.0,
            smoking: SmokingHabit::NeverSmoked,
        });
        assert!((moderate.score - 0.21).abs() < 1e-12);
        assert_eq!(moderate.band, RiskBand::Moderate);

        let high = assess_risk(&RiskAssessmentRequest {
            age: 50.0,
            hypertension: true,
            heart_disease: false,
            glucose: 150.0,
            smoking: SmokingHabit::FormerlySmoked,
        });
        // 0.01 + 0.25 + 0.15 + 0.05 + 0.05
        assert!((high.score - 0.51).abs() < 1e-12);
        assert_eq!(high.band, RiskBand::High);

        let capped = assess_risk(&RiskAssessmentRequest {
            age: 100.0,
            hypertension: true,
            heart_disease: true,
            glucose: 300.0,
            smoking: SmokingHabit::CurrentlySmoking,
        });
        assert_eq!(capped.score, 0.95);
        assert_eq!(capped.message, RiskBand::High.message());
    }
}
