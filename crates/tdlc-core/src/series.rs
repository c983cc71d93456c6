//! Per-case and per-quarter series for trend charts.

use chrono::NaiveDate;
use serde::Serialize;
use tdlc_model::{BucketLabel, DurationRecord};

use crate::aggregate::{aggregate, by_outcome_quarter, round_to};

/// One ruled case on the evolution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionPoint {
    #[serde(rename = "rol")]
    pub case_role: String,
    #[serde(rename = "fecha_fallo")]
    pub ruling_date: NaiveDate,
    #[serde(rename = "dias")]
    pub days: i64,
    #[serde(rename = "procedimiento")]
    pub procedure: Option<String>,
    #[serde(rename = "tramo")]
    pub bucket: BucketLabel,
}

/// Records as chart points, sorted by ruling date (ties by role).
pub fn evolution_series(records: &[DurationRecord]) -> Vec<EvolutionPoint> {
    let mut points: Vec<EvolutionPoint> = records
        .iter()
        .map(|record| EvolutionPoint {
            case_role: record.case_id.clone(),
            ruling_date: record.outcome_date,
            days: record.days,
            procedure: record.category.clone(),
            bucket: record.bucket.clone(),
        })
        .collect();
    points.sort_by(|a, b| {
        a.ruling_date
            .cmp(&b.ruling_date)
            .then_with(|| a.case_role.cmp(&b.case_role))
    });
    points
}

/// Mean days for one ruling quarter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterPoint {
    #[serde(rename = "trimestre")]
    pub quarter: String,
    /// Rounded to two decimals.
    #[serde(rename = "promedio_dias")]
    pub mean_days: f64,
    #[serde(rename = "n_causas")]
    pub count: usize,
}

/// Mean days per `YYYY-Qn` of the ruling date, oldest quarter first.
pub fn quarterly_trend(records: &[DurationRecord]) -> Vec<QuarterPoint> {
    aggregate(records, by_outcome_quarter)
        .groups
        .into_values()
        .map(|group| QuarterPoint {
            quarter: group.key,
            mean_days: round_to(group.mean_days, 2),
            count: group.count,
        })
        .collect()
}
