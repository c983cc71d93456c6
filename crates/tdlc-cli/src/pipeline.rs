//! Analysis pipeline with explicit stages.
//!
//! 1. **Ingest**: discover the data files and load the tables
//! 2. **Assemble**: join the tables into case events
//! 3. **Timeline**: normalize, classify and drop invalid events
//!
//! The commands aggregate or list the results of the last stage.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use tdlc_core::{CaseTables, Timeline, build_case_events, build_timeline};
use tdlc_ingest::{
    DataFile, DataLayout, load_case_details, load_case_index, load_daily_cases,
    load_daily_filings, load_hearings,
};
use tdlc_model::{
    AnalysisOptions, DailyCase, DailyFiling, DateWindow, Ladder, LadderKind, TdlcError,
};
use tdlc_transform::parse_date;

// ============================================================================
// Arguments
// ============================================================================

/// Parse a date given on the command line.
pub fn parse_date_arg(value: &str) -> tdlc_model::Result<NaiveDate> {
    parse_date(value).map_err(|source| TdlcError::Date {
        value: value.to_string(),
        source,
    })
}

/// Inclusive window from optional `--from`/`--to` values.
pub fn date_window(from: Option<&str>, to: Option<&str>) -> tdlc_model::Result<DateWindow> {
    let start = from.map(parse_date_arg).transpose()?;
    let end = to.map(parse_date_arg).transpose()?;
    if let (Some(start), Some(end)) = (start, end)
        && start > end
    {
        return Err(TdlcError::Message(format!(
            "window starts after it ends ({start} > {end})"
        )));
    }
    Ok(DateWindow::new(start, end))
}

/// The date analyses count from: `--today` if given, else the local date.
pub fn resolve_today(value: Option<&str>) -> tdlc_model::Result<NaiveDate> {
    match value {
        Some(value) => parse_date_arg(value),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Read and validate a ladder from a JSON file.
pub fn load_ladder_file(path: &Path) -> tdlc_model::Result<Ladder> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|error| TdlcError::Message(error.to_string()))
}

/// The ladder file when given, otherwise the built-in `kind`.
pub fn resolve_ladder(kind: LadderKind, file: Option<&Path>) -> Result<Ladder> {
    match file {
        Some(path) => {
            load_ladder_file(path).with_context(|| format!("load ladder {}", path.display()))
        }
        None => Ok(kind.ladder()),
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Load the case tables found under `data_dir`.
///
/// Files listed in `required` must exist; the others are loaded when
/// present and left empty otherwise.
pub fn ingest(data_dir: &Path, required: &[DataFile]) -> Result<CaseTables> {
    let span = info_span!("ingest", data_dir = %data_dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let layout = DataLayout::discover(data_dir)?;
    for file in required {
        layout.require(*file)?;
    }
    let mut tables = CaseTables::default();
    if let Some(path) = layout.path(DataFile::Hearings) {
        tables.hearings =
            load_hearings(path).with_context(|| format!("load hearings {}", path.display()))?;
    }
    if let Some(path) = layout.path(DataFile::CaseDetails) {
        tables.details = load_case_details(path)
            .with_context(|| format!("load case details {}", path.display()))?;
    }
    if let Some(path) = layout.path(DataFile::CaseIndex) {
        tables.index = load_case_index(path)
            .with_context(|| format!("load case index {}", path.display()))?;
    }
    info!(
        hearings = tables.hearings.len(),
        details = tables.details.len(),
        index = tables.index.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(tables)
}

/// Load the daily status bulletin. A missing filings file reads as empty.
pub fn ingest_daily(data_dir: &Path) -> Result<(Vec<DailyCase>, Vec<DailyFiling>)> {
    let span = info_span!("ingest_daily", data_dir = %data_dir.display());
    let _guard = span.enter();
    let layout = DataLayout::discover(data_dir)?;
    let cases_path = layout.require(DataFile::DailyCases)?;
    let cases = load_daily_cases(cases_path)
        .with_context(|| format!("load daily cases {}", cases_path.display()))?;
    let filings = match layout.path(DataFile::DailyFilings) {
        Some(path) => load_daily_filings(path)
            .with_context(|| format!("load daily filings {}", path.display()))?,
        None => Vec::new(),
    };
    info!(
        cases = cases.len(),
        filings = filings.len(),
        "daily bulletin loaded"
    );
    Ok((cases, filings))
}

// ============================================================================
// Stages 2-3: Assemble and Timeline
// ============================================================================

/// Join the tables into case events and classify them on `ladder`.
pub fn run_timeline(tables: &CaseTables, options: &AnalysisOptions, ladder: &Ladder) -> Timeline {
    let span = info_span!("timeline", basis = ?options.basis, ladder = ladder.name());
    let _guard = span.enter();
    let start = Instant::now();
    let events = build_case_events(tables, options);
    if events.missing_reference > 0 {
        info!(
            cases = events.missing_reference,
            "cases without a reference event skipped"
        );
    }
    let timeline = build_timeline(&events.events, ladder);
    info!(
        events = events.events.len(),
        records = timeline.len(),
        invalid_date = timeline.dropped.invalid_date,
        negative_duration = timeline.dropped.negative_duration,
        missing_outcome = timeline.dropped.missing_outcome,
        duration_ms = start.elapsed().as_millis(),
        "timeline complete"
    );
    timeline
}
