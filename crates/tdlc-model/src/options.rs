//! Configuration options for case-timeline analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value of the procedure filter meaning "every procedure".
pub const ALL_PROCEDURES: &str = "todos";

/// Which event a duration is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBasis {
    /// Latest public or "vista" hearing of the case.
    #[default]
    SinceHearing,
    /// First procedural filing of the case.
    SinceFirstFiling,
}

/// Restricts analyses to one procedure type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureFilter {
    #[default]
    All,
    Only(String),
}

impl ProcedureFilter {
    /// Parse a filter value; `todos` (any case) or blank means all.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_PROCEDURES) {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    /// Case-insensitive comparison against a case's procedure.
    pub fn matches(&self, procedure: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => {
                procedure.is_some_and(|p| p.trim().to_lowercase() == wanted.to_lowercase())
            }
        }
    }
}

/// Inclusive window on ruling dates. Open ends are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Options shared by the duration analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub basis: DurationBasis,
    /// Window applied to ruling dates.
    pub ruling_window: DateWindow,
    pub procedure: ProcedureFilter,
    /// Lowercase substrings that mark a hearing as relevant.
    pub hearing_keywords: Vec<String>,
    /// Only count hearings whose status says they were held.
    pub require_held: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            basis: DurationBasis::default(),
            ruling_window: DateWindow::default(),
            procedure: ProcedureFilter::default(),
            hearing_keywords: default_hearing_keywords(),
            require_held: false,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_basis(mut self, basis: DurationBasis) -> Self {
        self.basis = basis;
        self
    }

    #[must_use]
    pub fn with_ruling_window(mut self, window: DateWindow) -> Self {
        self.ruling_window = window;
        self
    }

    #[must_use]
    pub fn with_procedure(mut self, procedure: ProcedureFilter) -> Self {
        self.procedure = procedure;
        self
    }

    #[must_use]
    pub fn with_require_held(mut self, enable: bool) -> Self {
        self.require_held = enable;
        self
    }
}

/// "vista" and "pública" hearings (with and without the accent).
pub fn default_hearing_keywords() -> Vec<String> {
    ["vista", "pública", "publica"]
        .into_iter()
        .map(String::from)
        .collect()
}
