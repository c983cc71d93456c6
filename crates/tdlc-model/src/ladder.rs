//! Threshold ladders mapping day counts to ordered bucket labels.
//!
//! A ladder is evaluated top-down and the first threshold whose inclusive
//! upper bound admits the day count wins. The final threshold is always
//! unbounded, so every day count lands in exactly one bucket.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rung of a ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Inclusive upper bound in days. `None` admits every remaining count.
    pub upper_bound: Option<i64>,
    /// Stable machine label, e.g. `within_a_week`.
    pub label: String,
    /// Human-readable title.
    pub title: String,
}

impl Threshold {
    pub fn new(upper_bound: Option<i64>, label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            upper_bound,
            label: label.into(),
            title: title.into(),
        }
    }
}

/// The bucket a day count was assigned to.
///
/// `rank` is the threshold position, so buckets order the same way the
/// ladder does.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketLabel {
    pub rank: usize,
    pub label: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("ladder has no thresholds")]
    Empty,
    #[error("last threshold must be unbounded")]
    NotExhaustive,
    #[error("threshold {label:?} is unbounded but not last")]
    UnboundedNotLast { label: String },
    #[error("threshold {label:?} does not increase over the previous bound")]
    NotIncreasing { label: String },
    #[error("label {label:?} appears more than once")]
    DuplicateLabel { label: String },
}

#[derive(Deserialize)]
struct LadderSpec {
    name: String,
    thresholds: Vec<Threshold>,
}

impl TryFrom<LadderSpec> for Ladder {
    type Error = LadderError;

    fn try_from(spec: LadderSpec) -> Result<Self, Self::Error> {
        Ladder::new(spec.name, spec.thresholds)
    }
}

/// An ordered, validated list of thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LadderSpec")]
pub struct Ladder {
    name: String,
    thresholds: Vec<Threshold>,
}

impl Ladder {
    /// Build a ladder, checking that bounds strictly increase and that the
    /// last threshold (and only the last) is unbounded.
    pub fn new(name: impl Into<String>, thresholds: Vec<Threshold>) -> Result<Self, LadderError> {
        let Some(last) = thresholds.last() else {
            return Err(LadderError::Empty);
        };
        if last.upper_bound.is_some() {
            return Err(LadderError::NotExhaustive);
        }
        let mut previous: Option<i64> = None;
        for (idx, threshold) in thresholds.iter().enumerate() {
            if thresholds[..idx].iter().any(|t| t.label == threshold.label) {
                return Err(LadderError::DuplicateLabel {
                    label: threshold.label.clone(),
                });
            }
            match threshold.upper_bound {
                None if idx + 1 != thresholds.len() => {
                    return Err(LadderError::UnboundedNotLast {
                        label: threshold.label.clone(),
                    });
                }
                None => {}
                Some(bound) => {
                    if previous.is_some_and(|prev| bound <= prev) {
                        return Err(LadderError::NotIncreasing {
                            label: threshold.label.clone(),
                        });
                    }
                    previous = Some(bound);
                }
            }
        }
        Ok(Self {
            name: name.into(),
            thresholds,
        })
    }

    /// Forward-looking hearing countdown. Negative counts mean the hearing
    /// already happened.
    pub fn countdown() -> Self {
        Self {
            name: "countdown".to_string(),
            thresholds: vec![
                Threshold::new(Some(-1), "past", "Hearing held"),
                Threshold::new(Some(7), "within_a_week", "Within a week"),
                Threshold::new(Some(14), "more_than_a_week", "More than a week"),
                Threshold::new(Some(31), "within_a_month", "Within a month"),
                Threshold::new(None, "more_than_a_month", "More than a month"),
            ],
        }
    }

    /// Elapsed days since a reference event.
    pub fn elapsed() -> Self {
        Self {
            name: "elapsed".to_string(),
            thresholds: vec![
                Threshold::new(Some(14), "urgent", "Very soon / urgent"),
                Threshold::new(Some(28), "soon", "Soon"),
                Threshold::new(None, "ample", "Ample time"),
            ],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    /// Bucket for a day count. Negative counts are classified too; callers
    /// that treat them as invalid must filter first.
    pub fn bucket_for(&self, days: i64) -> BucketLabel {
        let rank = self
            .thresholds
            .iter()
            .position(|t| t.upper_bound.is_none_or(|bound| days <= bound))
            .unwrap_or(self.thresholds.len() - 1);
        let threshold = &self.thresholds[rank];
        BucketLabel {
            rank,
            label: threshold.label.clone(),
            title: threshold.title.clone(),
        }
    }
}

/// Built-in ladders selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderKind {
    Countdown,
    #[default]
    Elapsed,
}

impl LadderKind {
    pub fn ladder(self) -> Ladder {
        match self {
            Self::Countdown => Ladder::countdown(),
            Self::Elapsed => Ladder::elapsed(),
        }
    }
}
