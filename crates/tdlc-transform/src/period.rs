//! Calendar period keys used for trend grouping.
//!
//! Keys are zero-padded (`2024-03`, `2024-Q1`) so lexicographic order is
//! chronological order.

use chrono::{Datelike, NaiveDate};

/// `YYYY-MM` key of the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Quarter number (1-4) of `date`.
pub fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// `YYYY-Qn` key of the quarter containing `date`.
pub fn quarter_key(date: NaiveDate) -> String {
    format!("{:04}-Q{}", date.year(), quarter_of(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_keys_are_padded() {
        assert_eq!(month_key(date(2024, 3, 5)), "2024-03");
        assert_eq!(month_key(date(2024, 12, 31)), "2024-12");
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(quarter_key(date(2024, 1, 1)), "2024-Q1");
        assert_eq!(quarter_key(date(2024, 3, 31)), "2024-Q1");
        assert_eq!(quarter_key(date(2024, 4, 1)), "2024-Q2");
        assert_eq!(quarter_key(date(2024, 9, 30)), "2024-Q3");
        assert_eq!(quarter_key(date(2024, 10, 1)), "2024-Q4");
    }

    #[test]
    fn keys_sort_chronologically() {
        let mut keys = vec![
            month_key(date(2024, 11, 1)),
            month_key(date(2023, 12, 1)),
            month_key(date(2024, 2, 1)),
        ];
        keys.sort();
        assert_eq!(keys, vec!["2023-12", "2024-02", "2024-11"]);
    }
}
