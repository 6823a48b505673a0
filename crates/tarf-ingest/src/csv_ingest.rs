use std::path::Path;

use polars::prelude::{Column, CsvWriter, DataFrame, NamedFrom, SerWriter, Series};

use crate::IngestError;

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

fn normalize_cell(raw: &str) -> Option<String> {
    let value = raw.trim().trim_matches('\u{feff}');
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Read a raw violation-record CSV into an all-string DataFrame.
///
/// Headers are whitespace- and BOM-normalized; empty cells become nulls
/// so downstream null checks see them as missing rather than "".
/// No typing or cleaning happens here; that is the pipeline's job.
pub fn read_violations_csv(path: &Path) -> Result<DataFrame, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, column) in columns.iter_mut().enumerate() {
            column.push(record.get(idx).and_then(normalize_cell));
        }
    }

    let height = columns.first().map_or(0, Vec::len);
    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = height,
        "read violation csv"
    );

    let series: Vec<Column> = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into())
        .collect();
    Ok(DataFrame::new(series)?)
}

/// Write a prepared frame back out as CSV with headers.
pub fn write_frame_csv(df: &mut DataFrame, path: &Path) -> Result<(), IngestError> {
    let mut file = std::fs::File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}
