//! Analyses over small in-memory tribunal tables.

use chrono::NaiveDate;
use tdlc_core::{
    CalendarQuery, CaseTables, awaiting_ruling, build_case_events, build_timeline, case_totals,
    evolution_series, expected_days_by_procedure, hearing_calendar, quarterly_trend,
};
use tdlc_model::{
    AnalysisOptions, CaseDetail, CaseIndexEntry, DateWindow, DurationBasis, Hearing, Ladder,
    ProcedureFilter, Threshold, default_hearing_keywords,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn hearing(role: &str, date: &str, kind: &str, status: &str) -> Hearing {
    Hearing {
        date: date.to_string(),
        time: "10:00".to_string(),
        case_role: role.to_string(),
        caption: format!("Caso {role}"),
        kind: kind.to_string(),
        status: status.to_string(),
        resolution_doc: String::new(),
    }
}

fn detail(role: &str, id: &str, first: &str, ruling: Option<&str>) -> CaseDetail {
    CaseDetail {
        case_role: role.to_string(),
        case_id: id.to_string(),
        first_filing_date: first.to_string(),
        ruling_detected: ruling.is_some(),
        ruling_reference: String::new(),
        ruling_date: ruling.unwrap_or_default().to_string(),
        ruling_link: String::new(),
    }
}

fn index(role: &str, id: &str, procedure: &str) -> CaseIndexEntry {
    CaseIndexEntry {
        kind: "Causa".to_string(),
        case_role: role.to_string(),
        filing_date: "02-01-2023".to_string(),
        description: format!("Demanda {role}"),
        procedure: procedure.to_string(),
        case_id: id.to_string(),
        link: format!("https://consultas.tdlc.cl/rol?idCausa={id}"),
    }
}

fn tables() -> CaseTables {
    CaseTables {
        hearings: vec![
            hearing("C-1-2023", "01-03-2024", "Vista de la causa", "Realizada"),
            hearing("C-1-2023", "15-02-2024", "Audiencia pública", "Realizada"),
            hearing("c-2-2023", "01-03-2024", "Vista de la causa", "Realizada"),
            hearing("C-3-2023", "10-03-2024", "Audiencia pública", "Realizada"),
            hearing("C-4-2023", "01-04-2024", "Vista de la causa", "Realizada"),
            hearing("C-5-2023", "20-06-2024", "Conciliación", "Programada"),
            hearing("NC-6-2023", "05-06-2024", "Audiencia pública", "Programada"),
        ],
        details: vec![
            detail("C-1-2023", "101", "01-01-2024", Some("11-03-2024")),
            detail("C-2-2023", "102", "01-01-2024", Some("21-03-2024")),
            detail("C-3-2023", "103", "01-01-2024", Some("05-03-2024")),
            detail("C-4-2023", "104", "01-01-2024", None),
            detail("C-5-2023", "105", "01-02-2024", Some("2024-07-01")),
            detail("NC-6-2023", "106", "bad", None),
        ],
        index: vec![
            index("C-1-2023", "101", "Contencioso"),
            index("C-2-2023", "102", "Contencioso"),
            index("C-3-2023", "103", "Contencioso"),
            index("C-4-2023", "104", "Contencioso"),
            index("C-5-2023", "105", "Contencioso"),
            index("NC-6-2023", "106", "No Contencioso"),
        ],
    }
}

#[test]
fn since_hearing_uses_latest_relevant_hearing() {
    let events = build_case_events(&tables(), &AnalysisOptions::default());
    // C-5 has no relevant hearing; NC-6 has one but no ruling yet.
    assert_eq!(events.missing_reference, 1);
    assert_eq!(events.events.len(), 5);

    let timeline = build_timeline(&events.events, &Ladder::elapsed());
    let days: Vec<(&str, i64)> = timeline
        .records
        .iter()
        .map(|record| (record.case_id.as_str(), record.days))
        .collect();
    assert_eq!(days, vec![("C-1-2023", 10), ("C-2-2023", 20)]);
    assert_eq!(timeline.dropped.negative_duration, 1);
    assert_eq!(timeline.dropped.missing_outcome, 2);
    assert_eq!(timeline.records[0].category.as_deref(), Some("Contencioso"));
}

#[test]
fn since_first_filing_and_filters() {
    let options = AnalysisOptions::default()
        .with_basis(DurationBasis::SinceFirstFiling)
        .with_ruling_window(DateWindow::new(Some(day(2024, 3, 10)), None))
        .with_procedure(ProcedureFilter::parse("contencioso"));
    let events = build_case_events(&tables(), &options);
    let roles: Vec<&str> = events.events.iter().map(|e| e.case_id.as_str()).collect();
    assert_eq!(roles, vec!["C-1-2023", "C-2-2023", "C-5-2023"]);

    let timeline = build_timeline(&events.events, &Ladder::elapsed());
    assert_eq!(timeline.records[2].days, 151);
    assert_eq!(timeline.records[2].bucket.label, "ample");
}

#[test]
fn awaiting_estimates_from_ruled_history() {
    let tables = tables();
    let keywords = default_hearing_keywords();
    let expected = expected_days_by_procedure(&tables, &keywords);
    assert_eq!(expected.get("Contencioso"), Some(&15));

    let today = day(2024, 4, 11);
    let awaiting = awaiting_ruling(&tables, &keywords, &Ladder::elapsed(), today);
    // NC-6's hearing has not been held yet.
    assert_eq!(awaiting.len(), 1);
    let case = &awaiting[0];
    assert_eq!(case.case_role, "C-4-2023");
    assert_eq!(case.case_id, "104");
    assert_eq!(case.hearing_date, "01-04-2024");
    assert_eq!(case.days_since_hearing, 10);
    assert_eq!(case.estimated_remaining, 5);
    assert_eq!(case.bucket.label, "urgent");
    assert_eq!(case.caption, "Demanda C-4-2023");
    assert_eq!(case.link, "https://consultas.tdlc.cl/estadoDiario?idCausa=104");

    let later = awaiting_ruling(&tables, &keywords, &Ladder::elapsed(), day(2024, 6, 1));
    assert_eq!(later[0].estimated_remaining, 0);
    assert_eq!(later[0].bucket.label, "ample");
}

#[test]
fn calendar_lists_upcoming_hearings() {
    let today = day(2024, 6, 1);
    let entries = hearing_calendar(
        &tables(),
        &CalendarQuery::default(),
        &Ladder::countdown(),
        today,
    );
    let roles: Vec<&str> = entries.iter().map(|e| e.case_role.as_str()).collect();
    assert_eq!(roles, vec!["NC-6-2023", "C-5-2023"]);
    assert_eq!(entries[0].days_until, 4);
    assert_eq!(entries[0].bucket.label, "within_a_week");
    assert_eq!(entries[0].case_id, "106");
    assert_eq!(entries[1].days_until, 19);
    assert_eq!(entries[1].bucket.label, "within_a_month");

    let query = CalendarQuery {
        upcoming_only: false,
        window: DateWindow::new(Some(day(2024, 3, 1)), Some(day(2024, 3, 31))),
        kinds: Some(vec!["Vista de la causa".to_string()]),
        statuses: Some(vec!["realizada".to_string()]),
        search: Some("c-1".to_string()),
    };
    let entries = hearing_calendar(&tables(), &query, &Ladder::countdown(), today);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].date, "01-03-2024");
    assert_eq!(entries[0].days_until, -92);
    assert_eq!(entries[0].bucket.label, "past");

    let scheduled = CalendarQuery {
        upcoming_only: false,
        statuses: Some(vec!["Programada".to_string()]),
        ..CalendarQuery::default()
    };
    let entries = hearing_calendar(&tables(), &scheduled, &Ladder::countdown(), today);
    let roles: Vec<&str> = entries.iter().map(|e| e.case_role.as_str()).collect();
    assert_eq!(roles, vec!["NC-6-2023", "C-5-2023"]);
}

#[test]
fn series_are_sorted() {
    let options = AnalysisOptions::default().with_basis(DurationBasis::SinceFirstFiling);
    let events = build_case_events(&tables(), &options);
    let timeline = build_timeline(&events.events, &Ladder::elapsed());

    let points = evolution_series(&timeline.records);
    let roles: Vec<&str> = points.iter().map(|p| p.case_role.as_str()).collect();
    assert_eq!(roles, vec!["C-3-2023", "C-1-2023", "C-2-2023", "C-5-2023"]);

    let quarters = quarterly_trend(&timeline.records);
    assert_eq!(quarters.len(), 2);
    assert_eq!(quarters[0].quarter, "2024-Q1");
    assert_eq!(quarters[0].count, 3);
    assert_eq!(quarters[0].mean_days, 71.33);
    assert_eq!(quarters[1].quarter, "2024-Q3");
    assert_eq!(quarters[1].mean_days, 151.0);
}

#[test]
fn evolution_points_carry_the_ladder_bucket() {
    let options = AnalysisOptions::default().with_basis(DurationBasis::SinceFirstFiling);
    let events = build_case_events(&tables(), &options);

    let labels = |ladder: &Ladder| -> Vec<String> {
        let timeline = build_timeline(&events.events, ladder);
        evolution_series(&timeline.records)
            .into_iter()
            .map(|point| point.bucket.label)
            .collect()
    };
    assert_eq!(labels(&Ladder::elapsed()), vec!["ample"; 4]);
    assert_eq!(labels(&Ladder::countdown()), vec!["more_than_a_month"; 4]);

    let custom = Ladder::new(
        "custom",
        vec![
            Threshold::new(Some(75), "fast", "Fast"),
            Threshold::new(None, "slow", "Slow"),
        ],
    )
    .unwrap();
    assert_eq!(labels(&custom), vec!["fast", "fast", "slow", "slow"]);
}

#[test]
fn totals_count_distinct_roles() {
    let totals = case_totals(&tables().details);
    assert_eq!(totals.total_cases, 6);
    assert_eq!(totals.with_ruling, 4);
}
