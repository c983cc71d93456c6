//! Average durations grouped by procedure, month and quarter.

use std::collections::BTreeMap;

use serde::Serialize;
use tdlc_model::{Aggregate, DropCounts};

use crate::aggregate::{
    aggregate, bucket_counts, by_category, by_outcome_month, by_outcome_quarter,
};
use crate::timeline::Timeline;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineSummary {
    pub by_procedure: Aggregate,
    pub by_month: Aggregate,
    pub by_quarter: Aggregate,
    /// Kept records per bucket label of the timeline's ladder.
    pub by_bucket: BTreeMap<String, usize>,
    pub dropped: DropCounts,
}

impl TimelineSummary {
    /// Mean over every kept record, whatever the grouping.
    pub fn global_mean(&self) -> f64 {
        self.by_procedure.global_mean
    }

    pub fn count(&self) -> usize {
        self.by_procedure.count
    }
}

pub fn summarize(timeline: &Timeline) -> TimelineSummary {
    TimelineSummary {
        by_procedure: aggregate(&timeline.records, by_category),
        by_month: aggregate(&timeline.records, by_outcome_month),
        by_quarter: aggregate(&timeline.records, by_outcome_quarter),
        by_bucket: bucket_counts(&timeline.records),
        dropped: timeline.dropped,
    }
}
