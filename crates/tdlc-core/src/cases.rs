//! Assembling case events from the tribunal tables.
//!
//! The three tables are joined on the case role ("rol") after trimming and
//! uppercasing it:
//!
//! - the hearing calendar supplies the latest relevant hearing per case
//! - the case detail supplies the first filing and the ruling
//! - the case index supplies the procedure type and tribunal links

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tdlc_model::{
    AnalysisOptions, CaseDetail, CaseEvent, CaseIndexEntry, DurationBasis, Hearing,
};
use tdlc_transform::normalization::{format_iso, parse_date};
use tdlc_transform::text::{is_held_hearing, is_relevant_hearing, normalize_case_role};
use tracing::debug;

/// The raw tables an analysis runs over.
#[derive(Debug, Clone, Default)]
pub struct CaseTables {
    pub hearings: Vec<Hearing>,
    pub details: Vec<CaseDetail>,
    pub index: Vec<CaseIndexEntry>,
}

/// Case index keyed by normalized role. The first entry for a role wins.
#[derive(Debug, Clone, Default)]
pub struct CaseLookup<'a> {
    by_role: BTreeMap<String, &'a CaseIndexEntry>,
}

impl<'a> CaseLookup<'a> {
    pub fn new(index: &'a [CaseIndexEntry]) -> Self {
        let mut by_role = BTreeMap::new();
        for entry in index {
            by_role
                .entry(normalize_case_role(&entry.case_role))
                .or_insert(entry);
        }
        Self { by_role }
    }

    pub fn get(&self, role: &str) -> Option<&'a CaseIndexEntry> {
        self.by_role.get(&normalize_case_role(role)).copied()
    }

    /// Procedure type of a case, if the index has a non-blank one.
    pub fn procedure(&self, role: &str) -> Option<&'a str> {
        self.get(role)
            .map(|entry| entry.procedure.trim())
            .filter(|procedure| !procedure.is_empty())
    }
}

/// Latest relevant hearing per normalized role.
///
/// Hearings whose date does not parse are ignored. With `require_held`,
/// only hearings whose status says they took place are considered.
pub fn latest_relevant_hearings<'a>(
    hearings: &'a [Hearing],
    keywords: &[String],
    require_held: bool,
) -> BTreeMap<String, (NaiveDate, &'a Hearing)> {
    let mut latest: BTreeMap<String, (NaiveDate, &'a Hearing)> = BTreeMap::new();
    for hearing in hearings {
        if !is_relevant_hearing(&hearing.kind, keywords) {
            continue;
        }
        if require_held && !is_held_hearing(&hearing.status) {
            continue;
        }
        let Ok(date) = parse_date(&hearing.date) else {
            continue;
        };
        latest
            .entry(normalize_case_role(&hearing.case_role))
            .and_modify(|current| {
                if date > current.0 {
                    *current = (date, hearing);
                }
            })
            .or_insert((date, hearing));
    }
    latest
}

/// Case events ready for the timeline, and how many cases had no
/// reference event to measure from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseEvents {
    pub events: Vec<CaseEvent>,
    pub missing_reference: usize,
}

/// Build one case event per case-detail row, honoring the basis, the
/// ruling-date window and the procedure filter in `options`.
///
/// When the window is bounded, cases whose ruling date is missing or does
/// not parse fall outside it.
pub fn build_case_events(tables: &CaseTables, options: &AnalysisOptions) -> CaseEvents {
    let lookup = CaseLookup::new(&tables.index);
    let hearings = match options.basis {
        DurationBasis::SinceHearing => latest_relevant_hearings(
            &tables.hearings,
            &options.hearing_keywords,
            options.require_held,
        ),
        DurationBasis::SinceFirstFiling => BTreeMap::new(),
    };
    let mut result = CaseEvents::default();
    for detail in &tables.details {
        let role = normalize_case_role(&detail.case_role);
        if role.is_empty() {
            continue;
        }
        let procedure = lookup.procedure(&role);
        if !options.procedure.matches(procedure) {
            continue;
        }
        if !options.ruling_window.is_unbounded() {
            let in_window = parse_date(&detail.ruling_date)
                .is_ok_and(|ruling| options.ruling_window.contains(ruling));
            if !in_window {
                continue;
            }
        }
        let reference = match options.basis {
            DurationBasis::SinceHearing => hearings.get(&role).map(|(date, _)| format_iso(*date)),
            DurationBasis::SinceFirstFiling => {
                Some(detail.first_filing_date.trim().to_string()).filter(|raw| !raw.is_empty())
            }
        };
        let Some(reference) = reference else {
            result.missing_reference += 1;
            continue;
        };
        let mut event = CaseEvent::new(role, reference);
        if !detail.ruling_date.trim().is_empty() {
            event = event.with_outcome(detail.ruling_date.trim());
        }
        if let Some(procedure) = procedure {
            event = event.with_category(procedure);
        }
        result.events.push(event);
    }
    debug!(
        basis = ?options.basis,
        events = result.events.len(),
        missing_reference = result.missing_reference,
        "case events built"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdlc_model::default_hearing_keywords;

    fn hearing(role: &str, date: &str, kind: &str, status: &str) -> Hearing {
        Hearing {
            date: date.to_string(),
            case_role: role.to_string(),
            kind: kind.to_string(),
            status: status.to_string(),
            ..Hearing::default()
        }
    }

    #[test]
    fn latest_hearing_ignores_irrelevant_and_unparseable() {
        let hearings = vec![
            hearing("c-1", "01-03-2024", "Vista de la causa", "Realizada"),
            hearing("C-1 ", "10-03-2024", "Audiencia pública", "Suspendida"),
            hearing("C-1", "20-03-2024", "Conciliación", "Realizada"),
            hearing("C-1", "fecha", "Vista", "Realizada"),
        ];
        let keywords = default_hearing_keywords();

        let latest = latest_relevant_hearings(&hearings, &keywords, false);
        assert_eq!(latest["C-1"].0, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

        let held = latest_relevant_hearings(&hearings, &keywords, true);
        assert_eq!(held["C-1"].0, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn lookup_normalizes_roles() {
        let index = vec![CaseIndexEntry {
            case_role: " c-1 ".to_string(),
            procedure: "Contencioso".to_string(),
            ..CaseIndexEntry::default()
        }];
        let lookup = CaseLookup::new(&index);
        assert_eq!(lookup.procedure("C-1"), Some("Contencioso"));
        assert_eq!(lookup.procedure("C-2"), None);
    }
}
