//! Durations between a reference event and a case outcome.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ladder::BucketLabel;

/// Why a case event produced no duration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Either date failed to normalize.
    InvalidDate,
    /// Outcome precedes the reference event.
    NegativeDuration,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => write!(f, "invalid date"),
            Self::NegativeDuration => write!(f, "outcome precedes reference date"),
        }
    }
}

/// Day count and bucket for one pair of dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub days: i64,
    pub bucket: BucketLabel,
}

/// A case event that survived normalization and classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRecord {
    pub case_id: String,
    pub category: Option<String>,
    pub reference_date: NaiveDate,
    pub outcome_date: NaiveDate,
    /// Whole calendar days from reference to outcome, never negative.
    pub days: i64,
    pub bucket: BucketLabel,
}

/// Counters for events left out of duration computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropCounts {
    pub invalid_date: usize,
    pub negative_duration: usize,
    /// Events with no outcome recorded yet. Not a data-quality problem.
    pub missing_outcome: usize,
}

impl DropCounts {
    pub fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::InvalidDate => self.invalid_date += 1,
            DropReason::NegativeDuration => self.negative_duration += 1,
        }
    }

    /// Invalid and negative drops only.
    pub fn rejected(&self) -> usize {
        self.invalid_date + self.negative_duration
    }

    pub fn total(&self) -> usize {
        self.rejected() + self.missing_outcome
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
