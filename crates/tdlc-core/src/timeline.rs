//! Turning case events into classified duration records.

use tdlc_model::{CaseEvent, DropCounts, DurationRecord, Ladder};
use tdlc_transform::normalization::{classify, normalize};
use tracing::{debug, warn};

/// Duration records for the events that qualified, plus what was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    pub records: Vec<DurationRecord>,
    pub dropped: DropCounts,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalize both dates of every event, drop the ones that cannot yield a
/// non-negative duration and classify the rest on `ladder`.
///
/// Events are only borrowed. Invalid and negative drops are logged as a
/// data-quality warning; events without an outcome are counted silently.
pub fn build_timeline(events: &[CaseEvent], ladder: &Ladder) -> Timeline {
    let mut timeline = Timeline::default();
    for event in events {
        let Some(outcome_raw) = event.outcome_date.as_deref() else {
            timeline.dropped.missing_outcome += 1;
            continue;
        };
        if outcome_raw.trim().is_empty() {
            timeline.dropped.missing_outcome += 1;
            continue;
        }
        let reference = normalize(&event.reference_date);
        let outcome = normalize(outcome_raw);
        match classify(reference, outcome, ladder) {
            Ok(classified) => {
                let (Some(reference_date), Some(outcome_date)) = (reference.date(), outcome.date())
                else {
                    continue;
                };
                timeline.records.push(DurationRecord {
                    case_id: event.case_id.clone(),
                    category: event.category.clone(),
                    reference_date,
                    outcome_date,
                    days: classified.days,
                    bucket: classified.bucket,
                });
            }
            Err(reason) => {
                debug!(case_id = %event.case_id, %reason, "case event dropped");
                timeline.dropped.record(reason);
            }
        }
    }
    if timeline.dropped.rejected() > 0 {
        warn!(
            invalid_date = timeline.dropped.invalid_date,
            negative_duration = timeline.dropped.negative_duration,
            kept = timeline.records.len(),
            "case events dropped from duration computation"
        );
    }
    timeline
}
