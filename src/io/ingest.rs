//! CSV ingest for observation tables.
//!
//! This module is responsible for turning a CSV export into an
//! `ObservationTable` that the demand and trend pipelines can consume.
//!
//! Design goals:
//! - **Lenient headers**: known columns are matched case-insensitively, other
//!   columns (dates, tickers, ...) are ignored
//! - **Strict values**: rows are never skipped, since dropping one would shift
//!   every lag after it; a bad cell fails the whole load with its line number
//! - **Separation of concerns**: missing columns are not an ingest error, the
//!   operation that needs the column reports it

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{DEMAND, ObservationTable, PRICE, VOLUME};
use crate::error::AppError;

/// Columns loaded from the CSV; anything else is ignored.
pub const KNOWN_COLUMNS: [&str; 3] = [PRICE, VOLUME, DEMAND];

/// Load an observation table from a CSV file.
pub fn load_table(path: &Path) -> Result<ObservationTable, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_table(file)
}

/// Read an observation table from any CSV source with a header row.
pub fn read_table<R: Read>(source: R) -> Result<ObservationTable, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let present: Vec<(&str, usize)> = KNOWN_COLUMNS
        .iter()
        .filter_map(|name| header_map.get(*name).map(|idx| (*name, *idx)))
        .collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); present.len()];

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error on line {line}: {e}")))?;

        for ((name, col_idx), values) in present.iter().zip(columns.iter_mut()) {
            values.push(parse_value(&record, *col_idx, name, line)?);
        }
    }

    let mut table = ObservationTable::new();
    for ((name, _), values) in present.into_iter().zip(columns) {
        table.insert_column(name, values);
    }
    Ok(table)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, the first column is never matched.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_value(record: &StringRecord, idx: usize, name: &str, line: usize) -> Result<f64, AppError> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::new(2, format!("Missing `{name}` value on line {line}.")))?;

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::new(
            2,
            format!("Invalid `{name}` value '{raw}' on line {line}."),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_columns_and_ignores_others() {
        let csv = "date,price,volume,demand,ticker\n\
                   2024-01-01,10,1,5,ABC\n\
                   2024-01-02,20,2,15,ABC\n\
                   2024-01-03,30,3,25,ABC\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.column(PRICE), Some(&[10.0, 20.0, 30.0][..]));
        assert_eq!(table.column(VOLUME), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(table.column(DEMAND), Some(&[5.0, 15.0, 25.0][..]));
        assert_eq!(table.column_names().count(), 3);
    }

    #[test]
    fn headers_are_case_insensitive_and_bom_stripped() {
        let csv = "\u{feff}Price, VOLUME ,Demand\n1.5,2,3\n";
        let table = read_table(csv.as_bytes()).unwrap();
        assert_eq!(table.column(PRICE), Some(&[1.5][..]));
        assert_eq!(table.column(VOLUME), Some(&[2.0][..]));
        assert_eq!(table.column(DEMAND), Some(&[3.0][..]));
    }

    #[test]
    fn absent_columns_stay_absent() {
        let table = read_table("date,price\n2024-01-01,10\n".as_bytes()).unwrap();
        assert!(table.column(PRICE).is_some());
        assert!(table.column(VOLUME).is_none());
        assert!(table.column(DEMAND).is_none());
    }

    #[test]
    fn header_only_file_gives_empty_columns() {
        let table = read_table("price,volume,demand\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column(PRICE), Some(&[][..]));
    }

    #[test]
    fn bad_value_reports_line_number() {
        let csv = "price,volume,demand\n1,2,3\n4,oops,6\n";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("line 3"), "{err}");
        assert!(err.to_string().contains("volume"), "{err}");
    }

    #[test]
    fn missing_cell_is_an_error() {
        let csv = "price,volume,demand\n1,2,3\n4,5\n";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing `demand` value on line 3"), "{err}");
    }
}
