//! Calendar dates as produced by the date normalizer.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw date string failed to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum DateError {
    /// Empty or whitespace-only input
    #[error("date is empty")]
    Empty,
    /// Wrong number of segments, non-digit segment, or unknown layout
    #[error("date is not DD-MM-YYYY or YYYY-MM-DD")]
    Malformed,
    /// Year segment is not exactly four digits
    #[error("year must have four digits")]
    AmbiguousYear,
    /// Well-formed but not a real calendar day (e.g. 31-02-2024)
    #[error("calendar date does not exist")]
    NonexistentDate,
}

/// A calendar day with no time-of-day component, or the invalid marker.
///
/// Two values compare only by calendar day; see [`NormalizedDate::cmp_days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizedDate {
    Valid(NaiveDate),
    Invalid(DateError),
}

impl NormalizedDate {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Invalid(_) => None,
        }
    }

    pub fn error(&self) -> Option<DateError> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(*error),
        }
    }

    /// Calendar-day ordering. `None` when either side is invalid.
    pub fn cmp_days(&self, other: &Self) -> Option<Ordering> {
        Some(self.date()?.cmp(&other.date()?))
    }
}

impl From<Result<NaiveDate, DateError>> for NormalizedDate {
    fn from(value: Result<NaiveDate, DateError>) -> Self {
        match value {
            Ok(date) => Self::Valid(date),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl From<NaiveDate> for NormalizedDate {
    fn from(value: NaiveDate) -> Self {
        Self::Valid(value)
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Invalid(error) => write!(f, "invalid ({error})"),
        }
    }
}
