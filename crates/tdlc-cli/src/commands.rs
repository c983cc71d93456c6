use anyhow::Result;
use serde::Serialize;
use tracing::info_span;

use tdlc_cli::pipeline::{
    date_window, ingest, ingest_daily, parse_date_arg, resolve_ladder, resolve_today,
    run_timeline,
};
use tdlc_core::{
    CalendarQuery, awaiting_ruling, case_totals, daily_status, evolution_series, hearing_calendar,
    quarterly_trend, summarize,
};
use tdlc_ingest::DataFile;
use tdlc_model::{
    AnalysisOptions, DurationBasis, Ladder, LadderKind, ProcedureFilter,
    default_hearing_keywords,
};
use tdlc_report::{
    AverageReport, MeanSummary, evolution_chart, quarterly_chart, to_json, write_json,
};
use tdlc_transform::normalization::{classify, normalize};

use crate::cli::{
    AveragesArgs, AwaitingArgs, BasisArg, CalendarArgs, ClassifyArgs, DailyArgs, FilterArgs,
    GroupByArg, LadderArg, LadderArgs, OutputFormatArg, SeriesArgs, TrendArgs,
};
use crate::summary::{
    print_average_report, print_awaiting, print_calendar, print_chart, print_classified,
    print_daily, print_evolution, print_mean_summary, print_quarterly, print_totals,
};
use crate::types::{ClassifyOutcome, RunContext};

pub fn run_averages(ctx: &RunContext, args: &AveragesArgs) -> Result<()> {
    let _span = info_span!("averages").entered();
    let options = analysis_options(&args.filters)?;
    let ladder = resolve_ladder(
        ladder_kind(args.ladder.ladder, LadderKind::Elapsed),
        args.ladder.ladder_file.as_deref(),
    )?;
    let tables = ingest(&ctx.data_dir, required_tables(options.basis))?;
    let timeline = run_timeline(&tables, &options, &ladder);
    let summary = summarize(&timeline);
    let (aggregate, label) = match args.group_by {
        GroupByArg::Procedure => (&summary.by_procedure, "Procedure"),
        GroupByArg::Month => (&summary.by_month, "Month"),
        GroupByArg::Quarter => (&summary.by_quarter, "Quarter"),
    };
    if args.mean_only {
        emit(ctx, &MeanSummary::new(aggregate), print_mean_summary)
    } else {
        let report =
            AverageReport::new(aggregate, summary.dropped).with_buckets(summary.by_bucket);
        emit(ctx, &report, |report| print_average_report(report, label))
    }
}

pub fn run_evolution(ctx: &RunContext, args: &SeriesArgs) -> Result<()> {
    let _span = info_span!("evolution").entered();
    let options = analysis_options(&args.filters)?;
    let ladder = series_ladder(&args.ladder)?;
    let tables = ingest(&ctx.data_dir, required_tables(options.basis))?;
    let timeline = run_timeline(&tables, &options, &ladder);
    let points = evolution_series(&timeline.records);
    if args.chart {
        emit(ctx, &evolution_chart(&points), print_chart)
    } else {
        emit(ctx, &points, |points| print_evolution(points))
    }
}

pub fn run_quarterly(ctx: &RunContext, args: &TrendArgs) -> Result<()> {
    let _span = info_span!("quarterly").entered();
    let options = analysis_options(&args.filters)?;
    let tables = ingest(&ctx.data_dir, required_tables(options.basis))?;
    let timeline = run_timeline(&tables, &options, &Ladder::elapsed());
    let points = quarterly_trend(&timeline.records);
    if args.chart {
        emit(ctx, &quarterly_chart(&points), print_chart)
    } else {
        emit(ctx, &points, |points| print_quarterly(points))
    }
}

pub fn run_awaiting(ctx: &RunContext, args: &AwaitingArgs) -> Result<()> {
    let _span = info_span!("awaiting").entered();
    let today = resolve_today(args.today.as_deref())?;
    let ladder = resolve_ladder(
        ladder_kind(args.ladder.ladder, LadderKind::Elapsed),
        args.ladder.ladder_file.as_deref(),
    )?;
    let tables = ingest(
        &ctx.data_dir,
        &[DataFile::Hearings, DataFile::CaseDetails, DataFile::CaseIndex],
    )?;
    let filter = ProcedureFilter::parse(&args.procedure);
    let mut cases = awaiting_ruling(&tables, &default_hearing_keywords(), &ladder, today);
    cases.retain(|case| filter.matches(case.procedure.as_deref()));
    emit(ctx, &cases, |cases| print_awaiting(cases))
}

pub fn run_calendar(ctx: &RunContext, args: &CalendarArgs) -> Result<()> {
    let _span = info_span!("calendar").entered();
    let today = resolve_today(args.today.as_deref())?;
    let ladder = resolve_ladder(
        ladder_kind(Some(args.ladder), LadderKind::Countdown),
        args.ladder_file.as_deref(),
    )?;
    let query = CalendarQuery {
        window: date_window(args.from.as_deref(), args.to.as_deref())?,
        kinds: (!args.kinds.is_empty()).then(|| args.kinds.clone()),
        statuses: (!args.statuses.is_empty()).then(|| args.statuses.clone()),
        upcoming_only: !args.include_past,
        search: args.search.clone(),
    };
    let tables = ingest(&ctx.data_dir, &[DataFile::Hearings])?;
    let entries = hearing_calendar(&tables, &query, &ladder, today);
    emit(ctx, &entries, |entries| print_calendar(entries))
}

pub fn run_totals(ctx: &RunContext) -> Result<()> {
    let _span = info_span!("totals").entered();
    let tables = ingest(&ctx.data_dir, &[DataFile::CaseDetails])?;
    emit(ctx, &case_totals(&tables.details), print_totals)
}

pub fn run_daily(ctx: &RunContext, args: &DailyArgs) -> Result<()> {
    let _span = info_span!("daily").entered();
    let date = args.date.as_deref().map(parse_date_arg).transpose()?;
    let (cases, filings) = ingest_daily(&ctx.data_dir)?;
    emit(ctx, &daily_status(cases, filings, date), print_daily)
}

pub fn run_classify(ctx: &RunContext, args: &ClassifyArgs) -> Result<()> {
    let ladder = resolve_ladder(
        ladder_kind(args.ladder.ladder, LadderKind::Elapsed),
        args.ladder.ladder_file.as_deref(),
    )?;
    let reference = normalize(&args.reference);
    let outcome = normalize(&args.outcome);
    let result = classify(reference, outcome, &ladder);
    let (days, bucket, dropped) = match result {
        Ok(classified) => (Some(classified.days), Some(classified.bucket), None),
        Err(reason) => (None, None, Some(reason)),
    };
    let outcome = ClassifyOutcome {
        reference: reference.to_string(),
        outcome: outcome.to_string(),
        ladder: ladder.name().to_string(),
        days,
        bucket,
        dropped,
    };
    emit(ctx, &outcome, print_classified)
}

/// Write the JSON file when asked, then print as JSON or as a table.
fn emit<T: Serialize>(ctx: &RunContext, value: &T, print_table: impl FnOnce(&T)) -> Result<()> {
    if let Some(path) = &ctx.output {
        write_json(path, value)?;
    }
    match ctx.format {
        OutputFormatArg::Json => println!("{}", to_json(value, true)?),
        OutputFormatArg::Table => print_table(value),
    }
    Ok(())
}

fn analysis_options(filters: &FilterArgs) -> Result<AnalysisOptions> {
    let basis = match filters.basis {
        BasisArg::Hearing => DurationBasis::SinceHearing,
        BasisArg::FirstFiling => DurationBasis::SinceFirstFiling,
    };
    let window = date_window(filters.from.as_deref(), filters.to.as_deref())?;
    Ok(AnalysisOptions::new()
        .with_basis(basis)
        .with_ruling_window(window)
        .with_procedure(ProcedureFilter::parse(&filters.procedure))
        .with_require_held(filters.held_only))
}

fn required_tables(basis: DurationBasis) -> &'static [DataFile] {
    match basis {
        DurationBasis::SinceHearing => &[
            DataFile::Hearings,
            DataFile::CaseDetails,
            DataFile::CaseIndex,
        ],
        DurationBasis::SinceFirstFiling => &[DataFile::CaseDetails],
    }
}

fn series_ladder(args: &LadderArgs) -> Result<Ladder> {
    resolve_ladder(
        ladder_kind(args.ladder, LadderKind::Elapsed),
        args.ladder_file.as_deref(),
    )
}

fn ladder_kind(arg: Option<LadderArg>, default: LadderKind) -> LadderKind {
    match arg {
        Some(LadderArg::Countdown) => LadderKind::Countdown,
        Some(LadderArg::Elapsed) => LadderKind::Elapsed,
        None => default,
    }
}
