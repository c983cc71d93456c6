use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A CSV file read as strings, with trimmed headers and cells.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a column, matching the header case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Borrowing view over the rows with by-name cell access.
    pub fn records(&self) -> impl Iterator<Item = CsvRecord<'_>> {
        self.rows.iter().map(move |cells| CsvRecord {
            table: self,
            cells: cells.as_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One row of a [`CsvTable`].
#[derive(Debug, Clone, Copy)]
pub struct CsvRecord<'a> {
    table: &'a CsvTable,
    cells: &'a [String],
}

impl<'a> CsvRecord<'a> {
    /// Cell under `column`, or `""` when the column is missing.
    pub fn get(&self, column: &str) -> &'a str {
        self.table
            .column_index(column)
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_owned(&self, column: &str) -> String {
        self.get(column).to_string()
    }

    /// Header/value pairs in file order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.table
            .headers
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file whose first non-blank row is the header.
///
/// Blank rows are skipped. Short rows are padded with empty cells and
/// extra cells beyond the header are dropped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_none() {
            headers = Some(record.iter().map(normalize_header).collect());
            continue;
        }
        let width = headers.as_ref().map_or(0, Vec::len);
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
        rows.push(row);
    }
    let headers = headers.unwrap_or_default();
    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}
