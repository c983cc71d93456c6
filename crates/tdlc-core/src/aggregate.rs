//! Period aggregation of duration records.
//!
//! Records are grouped by a caller-supplied key function (procedure type,
//! ruling month, ruling quarter) and summarized as count and mean days per
//! group. The global mean is computed over every record, so unevenly sized
//! groups are weighted by their size.

use std::collections::BTreeMap;

use tdlc_model::{Aggregate, AggregateGroup, DurationRecord};
use tdlc_transform::period::{month_key, quarter_key};

/// Group key for records without a category.
pub const UNKNOWN_CATEGORY: &str = "Desconocido";

/// Group `records` by `key_fn` and compute per-group and global means.
///
/// An empty input yields `global_mean = 0`, `count = 0` and no groups.
///
/// # Examples
/// ```
/// use tdlc_core::aggregate::{aggregate, by_category};
/// # use chrono::NaiveDate;
/// # use tdlc_model::{DurationRecord, Ladder};
/// # let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// # let record = |category: &str, days: i64| DurationRecord {
/// #     case_id: "C".into(),
/// #     category: Some(category.into()),
/// #     reference_date: day,
/// #     outcome_date: day,
/// #     days,
/// #     bucket: Ladder::elapsed().bucket_for(days),
/// # };
/// let records = vec![record("A", 10), record("A", 20), record("B", 100)];
/// let result = aggregate(&records, by_category);
/// assert_eq!(result.count, 3);
/// assert!((result.global_mean - 43.333).abs() < 0.01);
/// assert_eq!(result.groups["A"].mean_days, 15.0);
/// ```
pub fn aggregate<F>(records: &[DurationRecord], key_fn: F) -> Aggregate
where
    F: Fn(&DurationRecord) -> String,
{
    if records.is_empty() {
        return Aggregate::default();
    }
    let mut sums: BTreeMap<String, (usize, i64)> = BTreeMap::new();
    let mut total: i64 = 0;
    for record in records {
        let entry = sums.entry(key_fn(record)).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += record.days;
        total += record.days;
    }
    let groups = sums
        .into_iter()
        .map(|(key, (count, sum))| {
            let group = AggregateGroup {
                key: key.clone(),
                count,
                mean_days: sum as f64 / count as f64,
            };
            (key, group)
        })
        .collect();
    Aggregate {
        global_mean: total as f64 / records.len() as f64,
        count: records.len(),
        groups,
    }
}

/// Round to a fixed number of decimals (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Number of records per bucket label.
pub fn bucket_counts(records: &[DurationRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.bucket.label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Procedure type of the case, or [`UNKNOWN_CATEGORY`].
pub fn by_category(record: &DurationRecord) -> String {
    record
        .category
        .as_deref()
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .unwrap_or(UNKNOWN_CATEGORY)
        .to_string()
}

/// `YYYY-MM` of the outcome (ruling) date.
pub fn by_outcome_month(record: &DurationRecord) -> String {
    month_key(record.outcome_date)
}

/// `YYYY-Qn` of the outcome (ruling) date.
pub fn by_outcome_quarter(record: &DurationRecord) -> String {
    quarter_key(record.outcome_date)
}
