//! TDLC data transformation utilities.
//!
//! - **normalization**: date parsing and duration classification
//! - **period**: calendar month and quarter keys
//! - **text**: case-role and hearing-kind normalization

pub mod normalization;
pub mod period;
pub mod text;

pub use normalization::{classify, classify_countdown, days_between, normalize, parse_date};
pub use period::{month_key, quarter_key};
pub use text::{is_held_hearing, is_relevant_hearing, normalize_case_role};
