//! Case-timeline engine for TDLC case data.
//!
//! Pipeline: tribunal tables → [`cases::build_case_events`] →
//! [`timeline::build_timeline`] → [`aggregate::aggregate`] and the
//! listings built on top of it.
//!
//! Every analysis takes `today` as an argument; nothing here reads the clock.

pub mod aggregate;
pub mod awaiting;
pub mod calendar;
pub mod cases;
pub mod daily;
pub mod series;
pub mod summary;
pub mod timeline;
pub mod totals;

pub use aggregate::{UNKNOWN_CATEGORY, aggregate, bucket_counts, round_to};
pub use awaiting::{AwaitingCase, awaiting_ruling, case_status_link, expected_days_by_procedure};
pub use calendar::{ALL_KINDS, CalendarEntry, CalendarQuery, hearing_calendar};
pub use cases::{CaseEvents, CaseLookup, CaseTables, build_case_events, latest_relevant_hearings};
pub use daily::{DailyStatus, daily_status};
pub use series::{EvolutionPoint, QuarterPoint, evolution_series, quarterly_trend};
pub use summary::{TimelineSummary, summarize};
pub use timeline::{Timeline, build_timeline};
pub use totals::{CaseTotals, case_totals};
