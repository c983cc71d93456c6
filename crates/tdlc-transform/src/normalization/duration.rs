//! Calendar-day durations and ladder classification.
//!
//! Dates carry no time of day, so a duration is the plain difference in
//! calendar days: same day = 0, next day = 1.

use chrono::NaiveDate;
use tdlc_model::{Classified, DropReason, Ladder, NormalizedDate};

/// Whole calendar days from `reference` to `outcome` (negative when the
/// outcome comes first).
pub fn days_between(reference: NaiveDate, outcome: NaiveDate) -> i64 {
    (outcome - reference).num_days()
}

/// Day count from reference to outcome and its bucket on `ladder`.
///
/// # Errors
///
/// - [`DropReason::InvalidDate`] if either date is invalid
/// - [`DropReason::NegativeDuration`] if the outcome precedes the reference
///
/// # Examples
/// ```
/// use tdlc_model::{DropReason, Ladder};
/// use tdlc_transform::normalization::{classify, normalize};
///
/// let ladder = Ladder::elapsed();
/// let result = classify(normalize("01-03-2024"), normalize("2024-03-15"), &ladder).unwrap();
/// assert_eq!(result.days, 14);
/// assert_eq!(result.bucket.label, "urgent");
///
/// let backwards = classify(normalize("15-03-2024"), normalize("01-03-2024"), &ladder);
/// assert_eq!(backwards, Err(DropReason::NegativeDuration));
/// ```
pub fn classify(
    reference: NormalizedDate,
    outcome: NormalizedDate,
    ladder: &Ladder,
) -> Result<Classified, DropReason> {
    let (Some(reference), Some(outcome)) = (reference.date(), outcome.date()) else {
        return Err(DropReason::InvalidDate);
    };
    let days = days_between(reference, outcome);
    if days < 0 {
        return Err(DropReason::NegativeDuration);
    }
    Ok(Classified {
        days,
        bucket: ladder.bucket_for(days),
    })
}

/// Days from `today` until `event`, bucketed without dropping past events.
pub fn classify_countdown(today: NaiveDate, event: NaiveDate, ladder: &Ladder) -> Classified {
    let days = days_between(today, event);
    Classified {
        days,
        bucket: ladder.bucket_for(days),
    }
}
