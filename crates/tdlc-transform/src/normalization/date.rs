//! Date normalization for tribunal data.
//!
//! The tribunal publishes dates in two dash-separated layouts, and the
//! layout is only known by looking at the value:
//!
//! - `DD-MM-YYYY` (hearing calendar, case index): first segment has 2 digits
//! - `YYYY-MM-DD` (scraped ruling dates): first segment has 4 digits
//!
//! Anything else is invalid. Years must always have four digits, so
//! `05-03-24` is rejected instead of being read as year 24.

use chrono::NaiveDate;
use tdlc_model::{DateError, NormalizedDate};

/// Parse a raw date string into a calendar day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tdlc_transform::normalization::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(parse_date("05-03-2024"), Ok(expected));
/// assert_eq!(parse_date(" 2024-03-05 "), Ok(expected));
/// assert!(parse_date("31-02-2024").is_err());
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }
    let parts: Vec<&str> = trimmed.split('-').collect();
    let [first, second, third] = parts.as_slice() else {
        return Err(DateError::Malformed);
    };
    if !parts.iter().all(|part| is_digits(part)) {
        return Err(DateError::Malformed);
    }
    let (year, month, day) = match first.len() {
        2 => (*third, *second, *first),
        4 => (*first, *second, *third),
        _ => return Err(DateError::Malformed),
    };
    if year.len() != 4 {
        return Err(DateError::AmbiguousYear);
    }
    let year: i32 = year.parse().map_err(|_| DateError::Malformed)?;
    let month: u32 = month.parse().map_err(|_| DateError::Malformed)?;
    let day: u32 = day.parse().map_err(|_| DateError::Malformed)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::NonexistentDate)
}

/// Normalize a raw date string. Never fails; bad input yields
/// [`NormalizedDate::Invalid`].
pub fn normalize(raw: &str) -> NormalizedDate {
    parse_date(raw).into()
}

/// Format as `DD-MM-YYYY`, the layout the tribunal uses for filters.
pub fn format_ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Format as ISO 8601 `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
