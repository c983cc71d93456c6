use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Count and mean duration of the records sharing one grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateGroup {
    pub key: String,
    pub count: usize,
    pub mean_days: f64,
}

impl AggregateGroup {
    /// Mean rounded to whole days, for surfaces that show integer counts.
    pub fn rounded_mean(&self) -> i64 {
        self.mean_days.round() as i64
    }
}

/// Result of one aggregation call.
///
/// `global_mean` is taken over every record, not over the group means.
/// Groups are keyed in a `BTreeMap`, so `YYYY-MM` and `YYYY-Qn` keys iterate
/// chronologically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub global_mean: f64,
    pub count: usize,
    pub groups: BTreeMap<String, AggregateGroup>,
}

impl Aggregate {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn rounded_global_mean(&self) -> i64 {
        self.global_mean.round() as i64
    }

    pub fn group(&self, key: &str) -> Option<&AggregateGroup> {
        self.groups.get(key)
    }
}
