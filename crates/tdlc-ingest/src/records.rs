//! Typed loaders for the tribunal's CSV files.
//!
//! Columns are looked up by name, case-insensitively. A missing column
//! reads as an empty string so older scrapes with fewer columns still load.

use std::path::Path;

use tdlc_model::{CaseDetail, CaseIndexEntry, DailyCase, DailyFiling, Hearing};

use crate::csv_table::{CsvRecord, read_csv_table};
use crate::error::Result;

/// Interpret a scraped boolean flag (`True`, `1`, `yes`, `sí`).
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "si" | "sí" | "y"
    )
}

pub fn load_hearings(path: &Path) -> Result<Vec<Hearing>> {
    load_with(path, |record| Hearing {
        date: record.get_owned("fecha"),
        time: record.get_owned("hora"),
        case_role: record.get_owned("rol"),
        caption: record.get_owned("caratula"),
        kind: record.get_owned("tipo_audiencia"),
        status: record.get_owned("estado"),
        resolution_doc: record.get_owned("doc_resolucion"),
    })
}

pub fn load_case_details(path: &Path) -> Result<Vec<CaseDetail>> {
    load_with(path, |record| CaseDetail {
        case_role: record.get_owned("rol"),
        case_id: record.get_owned("idCausa"),
        first_filing_date: record.get_owned("fecha_primer_tramite"),
        ruling_detected: parse_flag(record.get("fallo_detectado")),
        ruling_reference: record.get_owned("referencia_fallo"),
        ruling_date: record.get_owned("fecha_fallo"),
        ruling_link: record.get_owned("link_fallo"),
    })
}

pub fn load_case_index(path: &Path) -> Result<Vec<CaseIndexEntry>> {
    load_with(path, |record| CaseIndexEntry {
        kind: record.get_owned("tipo"),
        case_role: record.get_owned("rol"),
        filing_date: record.get_owned("fecha_ingreso"),
        description: record.get_owned("descripcion"),
        procedure: record.get_owned("procedimiento"),
        case_id: record.get_owned("idcausa"),
        link: record.get_owned("link"),
    })
}

pub fn load_daily_cases(path: &Path) -> Result<Vec<DailyCase>> {
    load_with(path, |record| DailyCase {
        date: record.get_owned("fecha_estado_diario"),
        case_role: record.get_owned("rol"),
        description: record.get_owned("descripcion"),
        filings: record.get_owned("tramites"),
        link: record.get_owned("link"),
    })
}

pub fn load_daily_filings(path: &Path) -> Result<Vec<DailyFiling>> {
    load_with(path, |record| DailyFiling {
        columns: record
            .pairs()
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect(),
    })
}

fn load_with<T>(path: &Path, build: impl Fn(CsvRecord<'_>) -> T) -> Result<Vec<T>> {
    let table = read_csv_table(path)?;
    Ok(table.records().map(build).collect())
}
