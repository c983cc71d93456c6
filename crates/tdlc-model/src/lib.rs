//! Data model for TDLC case-timeline analysis.
//!
//! - **records**: tribunal CSV rows and the [`CaseEvent`] fed to the engine
//! - **date**: [`NormalizedDate`] and its [`DateError`] kinds
//! - **ladder**: threshold ladders and bucket labels
//! - **duration**: duration records and drop accounting
//! - **aggregate**: grouped means
//! - **options**: analysis configuration

pub mod aggregate;
pub mod date;
pub mod duration;
pub mod error;
pub mod ladder;
pub mod options;
pub mod records;

pub use aggregate::{Aggregate, AggregateGroup};
pub use date::{DateError, NormalizedDate};
pub use duration::{Classified, DropCounts, DropReason, DurationRecord};
pub use error::{Result, TdlcError};
pub use ladder::{BucketLabel, Ladder, LadderError, LadderKind, Threshold};
pub use options::{
    ALL_PROCEDURES, AnalysisOptions, DateWindow, DurationBasis, ProcedureFilter,
    default_hearing_keywords,
};
pub use records::{CaseDetail, CaseEvent, CaseIndexEntry, DailyCase, DailyFiling, Hearing};
