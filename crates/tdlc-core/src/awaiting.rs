//! Cases heard but still awaiting a ruling, with an estimate of the wait.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tdlc_model::{BucketLabel, CaseEvent, Ladder};
use tdlc_transform::normalization::{days_between, format_ddmmyyyy, format_iso};
use tdlc_transform::text::normalize_case_role;
use tracing::debug;

use crate::aggregate::{aggregate, by_category};
use crate::cases::{CaseLookup, CaseTables, latest_relevant_hearings};
use crate::timeline::build_timeline;

/// Public case page on the tribunal site.
pub const CASE_STATUS_URL: &str = "https://consultas.tdlc.cl/estadoDiario?idCausa=";

pub fn case_status_link(case_id: &str) -> String {
    format!("{CASE_STATUS_URL}{}", case_id.trim())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwaitingCase {
    #[serde(rename = "rol")]
    pub case_role: String,
    #[serde(rename = "idCausa")]
    pub case_id: String,
    #[serde(rename = "caratula")]
    pub caption: String,
    #[serde(rename = "procedimiento")]
    pub procedure: Option<String>,
    #[serde(rename = "fecha_ingreso")]
    pub filing_date: String,
    /// Latest held hearing, `DD-MM-YYYY`.
    #[serde(rename = "fecha_audiencia")]
    pub hearing_date: String,
    #[serde(rename = "dias_desde_audiencia")]
    pub days_since_hearing: i64,
    #[serde(rename = "dias_estimados_restantes")]
    pub estimated_remaining: i64,
    #[serde(rename = "tramo")]
    pub bucket: BucketLabel,
    pub link: String,
}

/// Rounded mean hearing-to-ruling days per procedure, over ruled cases
/// whose latest relevant hearing was held.
pub fn expected_days_by_procedure(
    tables: &CaseTables,
    keywords: &[String],
) -> BTreeMap<String, i64> {
    let lookup = CaseLookup::new(&tables.index);
    let hearings = latest_relevant_hearings(&tables.hearings, keywords, true);
    let events: Vec<CaseEvent> = tables
        .details
        .iter()
        .filter(|detail| detail.ruling_detected)
        .filter_map(|detail| {
            let role = normalize_case_role(&detail.case_role);
            let (hearing_date, _) = hearings.get(&role)?;
            let mut event =
                CaseEvent::new(role.as_str(), format_iso(*hearing_date)).with_outcome(&detail.ruling_date);
            if let Some(procedure) = lookup.procedure(&role) {
                event = event.with_category(procedure);
            }
            Some(event)
        })
        .collect();
    let timeline = build_timeline(&events, &Ladder::elapsed());
    aggregate(&timeline.records, by_category)
        .groups
        .into_values()
        .map(|group| {
            let expected = group.rounded_mean();
            (group.key, expected)
        })
        .collect()
}

/// Unruled cases with a held relevant hearing, sorted by estimated days
/// remaining (ties by role).
///
/// The bucket classifies the days elapsed since the hearing on `ladder`.
/// Procedures with no ruled history estimate zero days remaining.
pub fn awaiting_ruling(
    tables: &CaseTables,
    keywords: &[String],
    ladder: &Ladder,
    today: NaiveDate,
) -> Vec<AwaitingCase> {
    let lookup = CaseLookup::new(&tables.index);
    let hearings = latest_relevant_hearings(&tables.hearings, keywords, true);
    let expected = expected_days_by_procedure(tables, keywords);

    let mut cases: Vec<AwaitingCase> = tables
        .details
        .iter()
        .filter(|detail| !detail.ruling_detected)
        .filter_map(|detail| {
            let role = normalize_case_role(&detail.case_role);
            let (hearing_date, _) = hearings.get(&role)?;
            let entry = lookup.get(&role);
            let procedure = lookup.procedure(&role).map(str::to_string);
            let days_since_hearing = days_between(*hearing_date, today);
            let expected_days = procedure
                .as_deref()
                .and_then(|procedure| expected.get(procedure))
                .copied()
                .unwrap_or(0);
            let case_id = match detail.case_id.trim() {
                "" => entry.map(|entry| entry.case_id.trim().to_string()).unwrap_or_default(),
                id => id.to_string(),
            };
            Some(AwaitingCase {
                link: case_status_link(&case_id),
                case_role: role,
                case_id,
                caption: entry.map(|entry| entry.description.clone()).unwrap_or_default(),
                procedure,
                filing_date: entry.map(|entry| entry.filing_date.clone()).unwrap_or_default(),
                hearing_date: format_ddmmyyyy(*hearing_date),
                days_since_hearing,
                estimated_remaining: (expected_days - days_since_hearing).max(0),
                bucket: ladder.bucket_for(days_since_hearing),
            })
        })
        .collect();
    cases.sort_by(|a, b| {
        a.estimated_remaining
            .cmp(&b.estimated_remaining)
            .then_with(|| a.case_role.cmp(&b.case_role))
    });
    debug!(
        cases = cases.len(),
        procedures = expected.len(),
        "awaiting-ruling cases listed"
    );
    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_uses_trimmed_id() {
        assert_eq!(
            case_status_link(" 4567 "),
            "https://consultas.tdlc.cl/estadoDiario?idCausa=4567"
        );
    }
}
