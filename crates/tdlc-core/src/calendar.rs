//! Hearing calendar listing.

use chrono::NaiveDate;
use serde::Serialize;
use tdlc_model::{BucketLabel, DateWindow, Ladder};
use tdlc_transform::normalization::{classify_countdown, format_ddmmyyyy, parse_date};
use tdlc_transform::text::normalize_case_role;
use tracing::debug;

use crate::cases::{CaseLookup, CaseTables};

/// Filter value meaning "every type" (or every status).
pub const ALL_KINDS: &str = "__ALL__";

/// Filters for [`hearing_calendar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    /// Inclusive window on the hearing date.
    pub window: DateWindow,
    /// Hearing types to keep. `None`, empty or containing [`ALL_KINDS`]
    /// keeps every type.
    pub kinds: Option<Vec<String>>,
    /// Hearing statuses to keep, matched like `kinds`.
    pub statuses: Option<Vec<String>>,
    /// Drop hearings dated before today.
    pub upcoming_only: bool,
    /// Case-insensitive substring of the role or the caption.
    pub search: Option<String>,
}

impl Default for CalendarQuery {
    fn default() -> Self {
        Self {
            window: DateWindow::default(),
            kinds: None,
            statuses: None,
            upcoming_only: true,
            search: None,
        }
    }
}

impl CalendarQuery {
    fn accepts_kind(&self, kind: &str) -> bool {
        accepts_choice(self.kinds.as_deref(), kind)
    }

    fn accepts_status(&self, status: &str) -> bool {
        accepts_choice(self.statuses.as_deref(), status)
    }

    fn accepts_text(&self, role: &str, caption: &str) -> bool {
        let Some(search) = self.search.as_deref().map(str::trim) else {
            return true;
        };
        if search.is_empty() {
            return true;
        }
        let needle = search.to_lowercase();
        role.to_lowercase().contains(&needle) || caption.to_lowercase().contains(&needle)
    }
}

fn accepts_choice(choices: Option<&[String]>, value: &str) -> bool {
    match choices {
        None => true,
        Some(choices) if choices.is_empty() || choices.iter().any(|c| c == ALL_KINDS) => true,
        Some(choices) => choices
            .iter()
            .any(|wanted| wanted.trim().to_lowercase() == value.trim().to_lowercase()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    #[serde(rename = "fecha_audiencia")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "rol")]
    pub case_role: String,
    #[serde(rename = "caratula")]
    pub caption: String,
    #[serde(rename = "tipo_audiencia")]
    pub kind: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "idcausa")]
    pub case_id: String,
    pub link: String,
    /// Days from today until the hearing; negative once it has passed.
    #[serde(rename = "dias_restantes")]
    pub days_until: i64,
    #[serde(rename = "tramo")]
    pub bucket: BucketLabel,
}

/// Hearings matching `query`, sorted by date, time and role, each joined
/// with its case index entry and bucketed on `ladder` by days from `today`.
///
/// Hearings whose date does not parse are left out.
pub fn hearing_calendar(
    tables: &CaseTables,
    query: &CalendarQuery,
    ladder: &Ladder,
    today: NaiveDate,
) -> Vec<CalendarEntry> {
    let lookup = CaseLookup::new(&tables.index);
    let mut rows: Vec<(NaiveDate, CalendarEntry)> = tables
        .hearings
        .iter()
        .filter_map(|hearing| {
            let date = parse_date(&hearing.date).ok()?;
            if query.upcoming_only && date < today {
                return None;
            }
            if !query.window.contains(date) {
                return None;
            }
            if !query.accepts_kind(&hearing.kind) || !query.accepts_status(&hearing.status) {
                return None;
            }
            if !query.accepts_text(&hearing.case_role, &hearing.caption) {
                return None;
            }
            let role = normalize_case_role(&hearing.case_role);
            let entry = lookup.get(&role);
            let countdown = classify_countdown(today, date, ladder);
            Some((
                date,
                CalendarEntry {
                    date: format_ddmmyyyy(date),
                    time: hearing.time.trim().to_string(),
                    case_role: role,
                    caption: hearing.caption.trim().to_string(),
                    kind: hearing.kind.trim().to_string(),
                    status: hearing.status.trim().to_string(),
                    case_id: entry.map(|e| e.case_id.trim().to_string()).unwrap_or_default(),
                    link: entry.map(|e| e.link.trim().to_string()).unwrap_or_default(),
                    days_until: countdown.days,
                    bucket: countdown.bucket,
                },
            ))
        })
        .collect();
    rows.sort_by(|(a_date, a), (b_date, b)| {
        a_date
            .cmp(b_date)
            .then_with(|| a.time.cmp(&b.time))
            .then_with(|| a.case_role.cmp(&b.case_role))
    });
    debug!(hearings = rows.len(), "hearing calendar listed");
    rows.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_marker() {
        let query = CalendarQuery {
            kinds: Some(vec!["Vista".to_string(), ALL_KINDS.to_string()]),
            ..CalendarQuery::default()
        };
        assert!(query.accepts_kind("Conciliación"));

        let query = CalendarQuery {
            kinds: Some(vec!["vista de la causa".to_string()]),
            ..CalendarQuery::default()
        };
        assert!(query.accepts_kind("Vista de la Causa"));
        assert!(!query.accepts_kind("Audiencia pública"));
    }

    #[test]
    fn status_filter_mirrors_kind_filter() {
        let query = CalendarQuery {
            statuses: Some(vec![" REALIZADA ".to_string()]),
            ..CalendarQuery::default()
        };
        assert!(query.accepts_status("Realizada"));
        assert!(!query.accepts_status("Suspendida"));
        assert!(query.accepts_kind("Vista de la causa"));

        let query = CalendarQuery {
            statuses: Some(vec!["Suspendida".to_string(), ALL_KINDS.to_string()]),
            ..CalendarQuery::default()
        };
        assert!(query.accepts_status("Programada"));
        assert!(CalendarQuery::default().accepts_status("Programada"));
        assert!(
            CalendarQuery {
                statuses: Some(Vec::new()),
                ..CalendarQuery::default()
            }
            .accepts_status("Programada")
        );
    }

    #[test]
    fn search_matches_role_or_caption() {
        let query = CalendarQuery {
            search: Some(" fne ".to_string()),
            ..CalendarQuery::default()
        };
        assert!(query.accepts_text("C-1-2024", "FNE contra Empresa"));
        assert!(!query.accepts_text("C-1-2024", "Empresa contra Empresa"));
        assert!(CalendarQuery::default().accepts_text("x", "y"));
    }
}
