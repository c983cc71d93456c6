//! Input records: tribunal CSV rows and the case events built from them.
//!
//! Tribunal rows are filled by the loaders in `tdlc-ingest`, which look
//! columns up by name. Daily bulletin rows serialize back to the
//! tribunal's column names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One record fed to the timeline engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseEvent {
    /// Case role ("rol"). Not unique: several hearings may share a case.
    pub case_id: String,
    /// Raw reference date, either `DD-MM-YYYY` or `YYYY-MM-DD`.
    pub reference_date: String,
    /// Raw outcome (ruling) date. `None` while the case awaits a ruling.
    pub outcome_date: Option<String>,
    /// Grouping key such as the procedure type.
    pub category: Option<String>,
}

impl CaseEvent {
    pub fn new(case_id: impl Into<String>, reference_date: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            reference_date: reference_date.into(),
            outcome_date: None,
            category: None,
        }
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome_date: impl Into<String>) -> Self {
        self.outcome_date = Some(outcome_date.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Row of `calendario_audiencias.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hearing {
    pub date: String,
    pub time: String,
    pub case_role: String,
    pub caption: String,
    pub kind: String,
    pub status: String,
    pub resolution_doc: String,
}

/// Row of `rol_idcausa_detalle.csv`: procedural milestones of a case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseDetail {
    pub case_role: String,
    pub case_id: String,
    pub first_filing_date: String,
    pub ruling_detected: bool,
    pub ruling_reference: String,
    pub ruling_date: String,
    pub ruling_link: String,
}

/// Row of `rol_idcausa.csv`: the case index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseIndexEntry {
    pub kind: String,
    pub case_role: String,
    pub filing_date: String,
    pub description: String,
    pub procedure: String,
    pub case_id: String,
    pub link: String,
}

/// Case published in the daily status bulletin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyCase {
    #[serde(rename = "fecha_estado_diario")]
    pub date: String,
    #[serde(rename = "rol")]
    pub case_role: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tramites")]
    pub filings: String,
    pub link: String,
}

/// Filing published in the daily status bulletin. Columns vary between
/// scrapes, so they are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyFiling {
    #[serde(flatten)]
    pub columns: BTreeMap<String, String>,
}

impl DailyFiling {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}
