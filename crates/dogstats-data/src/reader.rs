//! Loading the registration table from a workbook or CSV file.
//!
//! The loader is picked by file extension: spreadsheets go through
//! `calamine` (first worksheet), anything else is read as CSV. Column labels
//! and cell values are trimmed on the way in; breed normalization and
//! ordering are left to [`crate::table`].

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use calamine::{open_workbook_auto, Data, Range, Reader};
use dogstats_core::error::{Result, StatsError};
use dogstats_core::models::Record;
use tracing::debug;

/// Column labels every input must carry, after trimming.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Breed", "Year", "Month", "Total"];

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

static EMPTY_CELL: Data = Data::Empty;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every row of the file at `path`.
///
/// Fails with [`StatsError::FileRead`] when the file cannot be opened,
/// [`StatsError::MissingColumns`] when the header lacks a required column,
/// and with a decoding error on the first row that does not parse.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = if is_spreadsheet(path) {
        drop(file);
        load_workbook(path)?
    } else {
        read_records(file)?
    };

    debug!("Read {} rows from {}", records.len(), path.display());

    Ok(records)
}

/// Decode records from any CSV source.
///
/// Extra columns are ignored. The header is checked before any row is read.
pub fn read_records<R: Read>(source: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    check_columns(rdr.headers()?.iter())?;

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        records.push(record);
    }

    Ok(records)
}

/// Decode records from a worksheet whose first row is the header.
///
/// Blank rows are skipped. Row numbers in errors are 1-based, counting the
/// header, to match what a spreadsheet shows.
pub fn records_from_range(range: &Range<Data>) -> Result<Vec<Record>> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(StatsError::MissingColumns(
            REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        ));
    };

    let labels: Vec<String> = header.iter().map(cell_text).collect();
    check_columns(labels.iter().map(String::as_str))?;
    let position = |name: &str| labels.iter().position(|l| l == name).unwrap_or(0);
    let (breed_col, year_col, month_col, total_col) = (
        position("Breed"),
        position("Year"),
        position("Month"),
        position("Total"),
    );

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        let row_number = i + 2;
        let cell = |col: usize| row.get(col).unwrap_or(&EMPTY_CELL);

        let year = cell_int(cell(year_col))
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| invalid_cell(row_number, "Year", cell(year_col)))?;
        let total = cell_int(cell(total_col))
            .and_then(|v| u64::try_from(v).ok())
            .ok_or_else(|| invalid_cell(row_number, "Total", cell(total_col)))?;

        records.push(Record {
            breed: cell_text(cell(breed_col)),
            year,
            month: cell_text(cell(month_col)),
            total,
        });
    }

    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read the first worksheet of the workbook at `path`.
fn load_workbook(path: &Path) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .with_context(|| format!("Workbook {} has no worksheets", path.display()))?
        .with_context(|| format!("Failed to read first worksheet of {}", path.display()))?;

    records_from_range(&range)
}

/// Fail with the list of required columns absent from `labels`.
fn check_columns<'a>(labels: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let labels: Vec<&str> = labels.into_iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !labels.contains(*c))
        .map(|c| c.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StatsError::MissingColumns(missing))
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// Whole-number cell value; spreadsheets often store integers as floats.
fn cell_int(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn invalid_cell(row: usize, column: &str, cell: &Data) -> StatsError {
    StatsError::InvalidCell {
        row,
        column: column.to_string(),
        value: cell_text(cell),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
