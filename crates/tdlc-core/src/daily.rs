//! Daily status bulletin listing.

use chrono::NaiveDate;
use serde::Serialize;
use tdlc_model::{DailyCase, DailyFiling};
use tdlc_transform::normalization::parse_date;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyStatus {
    #[serde(rename = "causas")]
    pub cases: Vec<DailyCase>,
    #[serde(rename = "tramites")]
    pub filings: Vec<DailyFiling>,
}

/// Cases and filings of the latest bulletin.
///
/// With `date`, only cases whose bulletin date parses to that day are
/// kept. Filings carry no fixed date column and pass through unchanged.
pub fn daily_status(
    cases: Vec<DailyCase>,
    filings: Vec<DailyFiling>,
    date: Option<NaiveDate>,
) -> DailyStatus {
    let cases = match date {
        Some(date) => cases
            .into_iter()
            .filter(|case| parse_date(&case.date).is_ok_and(|parsed| parsed == date))
            .collect(),
        None => cases,
    };
    DailyStatus { cases, filings }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_cases_by_date() {
        let case = |date: &str, role: &str| DailyCase {
            date: date.to_string(),
            case_role: role.to_string(),
            ..DailyCase::default()
        };
        let cases = vec![case("03-06-2024", "C-1"), case("04-06-2024", "C-2"), case("", "C-3")];
        let day = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();

        let status = daily_status(cases.clone(), Vec::new(), Some(day));
        assert_eq!(status.cases.len(), 1);
        assert_eq!(status.cases[0].case_role, "C-2");

        assert_eq!(daily_status(cases, Vec::new(), None).cases.len(), 3);
    }
}
