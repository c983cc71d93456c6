//! Normalization functions for case dates and durations.
//!
//! - **date**: `DD-MM-YYYY` / `YYYY-MM-DD` parsing
//! - **duration**: calendar-day differences and ladder classification

pub mod date;
pub mod duration;

pub use date::{format_ddmmyyyy, format_iso, normalize, parse_date};
pub use duration::{classify, classify_countdown, days_between};
