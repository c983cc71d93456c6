use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tdlc_core::{AwaitingCase, CalendarEntry, CaseTotals, DailyStatus, EvolutionPoint, QuarterPoint};
use tdlc_model::{BucketLabel, DropCounts};
use tdlc_report::{AverageReport, ChartData, MeanSummary};

use crate::types::ClassifyOutcome;

pub fn print_average_report(report: &AverageReport, group_label: &str) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(group_label), header_cell("Mean days")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, mean) in &report.por_grupo {
        table.add_row(vec![Cell::new(key), Cell::new(mean)]);
    }
    table.add_row(vec![
        Cell::new("ALL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.promedio_global).add_attribute(Attribute::Bold),
    ]);
    println!("Cases: {}", report.total);
    println!("{table}");
    if !report.por_tramo.is_empty() {
        let buckets: Vec<String> = report
            .por_tramo
            .iter()
            .map(|(label, count)| format!("{label} {count}"))
            .collect();
        println!("Buckets: {}", buckets.join(", "));
    }
    print_drops(&report.descartados);
}

pub fn print_mean_summary(summary: &MeanSummary) {
    match summary.promedio_dias {
        Some(mean) => println!("Mean days: {mean:.2} over {} cases", summary.n_causas),
        None => println!("No cases qualified"),
    }
}

pub fn print_evolution(points: &[EvolutionPoint]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Ruling"),
        header_cell("Days"),
        header_cell("Bucket"),
        header_cell("Procedure"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.case_role),
            Cell::new(point.ruling_date.format("%d-%m-%Y")),
            Cell::new(point.days),
            bucket_cell(&point.bucket),
            optional_cell(point.procedure.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn print_quarterly(points: &[QuarterPoint]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Quarter"),
        header_cell("Mean days"),
        header_cell("Cases"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for point in points {
        table.add_row(vec![
            Cell::new(&point.quarter),
            Cell::new(format!("{:.2}", point.mean_days)),
            Cell::new(point.count),
        ]);
    }
    println!("{table}");
}

pub fn print_chart(chart: &ChartData) {
    let mut header = vec![header_cell("Label")];
    header.extend(chart.datasets.iter().map(|dataset| header_cell(&dataset.label)));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for (idx, label) in chart.labels.iter().enumerate() {
        let mut row = vec![Cell::new(label)];
        row.extend(chart.datasets.iter().map(|dataset| match dataset.data.get(idx) {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        }));
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_awaiting(cases: &[AwaitingCase]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Caption"),
        header_cell("Hearing"),
        header_cell("Days since"),
        header_cell("Est. remaining"),
        header_cell("Bucket"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for case in cases {
        table.add_row(vec![
            Cell::new(&case.case_role)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            optional_cell(Some(&case.caption)),
            Cell::new(&case.hearing_date),
            Cell::new(case.days_since_hearing),
            Cell::new(case.estimated_remaining),
            bucket_cell(&case.bucket),
            Cell::new(&case.link),
        ]);
    }
    println!("{table}");
}

pub fn print_calendar(entries: &[CalendarEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Time"),
        header_cell("Case"),
        header_cell("Caption"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Days"),
        header_cell("Bucket"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.date),
            optional_cell(Some(&entry.time)),
            Cell::new(&entry.case_role)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            optional_cell(Some(&entry.caption)),
            optional_cell(Some(&entry.kind)),
            optional_cell(Some(&entry.status)),
            Cell::new(entry.days_until),
            bucket_cell(&entry.bucket),
        ]);
    }
    println!("{table}");
}

pub fn print_totals(totals: &CaseTotals) {
    println!("Cases: {}", totals.total_cases);
    println!("With ruling: {}", totals.with_ruling);
}

pub fn print_daily(status: &DailyStatus) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Case"),
        header_cell("Description"),
        header_cell("Filings"),
    ]);
    apply_table_style(&mut table);
    for case in &status.cases {
        table.add_row(vec![
            Cell::new(&case.date),
            Cell::new(&case.case_role)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            optional_cell(Some(&case.description)),
            optional_cell(Some(&case.filings)),
        ]);
    }
    println!("{table}");
    println!("Filings published: {}", status.filings.len());
}

pub fn print_classified(outcome: &ClassifyOutcome) {
    println!("Reference: {}", outcome.reference);
    println!("Outcome: {}", outcome.outcome);
    match (&outcome.dropped, outcome.days, &outcome.bucket) {
        (Some(reason), _, _) => println!("Dropped: {reason}"),
        (None, Some(days), Some(bucket)) => {
            println!("Days: {days}");
            println!("Bucket ({}): {} - {}", outcome.ladder, bucket.label, bucket.title);
        }
        _ => {}
    }
}

fn print_drops(dropped: &DropCounts) {
    if dropped.is_empty() {
        return;
    }
    eprintln!(
        "Left out: {} invalid date, {} ruling before reference, {} awaiting ruling",
        dropped.invalid_date, dropped.negative_duration, dropped.missing_outcome
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn bucket_cell(bucket: &BucketLabel) -> Cell {
    let color = match bucket.rank {
        0 => Color::Red,
        1 => Color::Yellow,
        _ => Color::Green,
    };
    Cell::new(&bucket.label).fg(color)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
