//! Cleaning of raw violation records into analysis-ready frames.
//!
//! The cleaner is record-scoped and copy-based: the caller's frame is
//! never mutated. Rows that fail to parse are excluded from the output
//! and reported as [`RecordFault`]s so the caller owns the
//! skip-vs-fail decision.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};

use tarf_model::ForecastError;

use crate::data_utils::{any_to_f64, any_to_string};
use crate::time::DATETIME_FORMAT;

/// Source columns with no predictive use; dropped when present, skipped
/// when absent.
pub const DROP_COLUMNS: &[&str] = &[
    "SeqID",
    "Date Of Stop",
    "Time Of Stop",
    "Agency",
    "SubAgency",
    "Belts",
    "Personal Injury",
    "Property Damage",
    "Fatal",
    "Commercial License",
    "HAZMAT",
    "Commercial Vehicle",
    "Alcohol",
    "Work Zone",
    "Search Conducted",
    "Search Disposition",
    "Search Outcome",
    "Search Reason",
    "Search Reason For Stop",
    "Search Type",
    "Search Arrest Reason",
    "Violation Type",
    "Charge",
    "Article",
    "Driver City",
    "Driver State",
    "DL State",
    "Arrest Type",
    "Geolocation",
];

/// Date/time layouts accepted for the stop timestamp. The source batch
/// uses US-style dates; ISO is accepted for re-cleaned frames.
const STOP_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// A single record the cleaner could not parse, with enough context for
/// the caller to decide whether the batch should continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFault {
    /// Zero-based row index in the input frame.
    pub row: usize,
    pub field: String,
    pub value: String,
}

impl RecordFault {
    pub fn to_error(&self) -> ForecastError {
        ForecastError::Parse {
            row: self.row,
            field: self.field.clone(),
            value: self.value.clone(),
        }
    }
}

/// Result of a cleaning pass: the surviving rows plus the faults that
/// were excluded along the way.
#[derive(Debug)]
pub struct CleanOutcome {
    pub frame: DataFrame,
    pub faults: Vec<RecordFault>,
}

/// Clean a raw violation batch.
///
/// - merges `Date Of Stop` + `Time Of Stop` into an ISO `DateTime`
///   column, faulting rows whose combined string parses under no
///   accepted layout
/// - removes rows with a zero latitude, then a zero longitude, then
///   rows with either coordinate missing
/// - binarizes `Accident`: exactly "Yes" is 1, anything else is 0
/// - drops the fixed extraneous column list
pub fn clean_violations(input: &DataFrame) -> Result<CleanOutcome> {
    let mut df = input.clone();

    let faults = merge_stop_datetime(&mut df)?;
    df = filter_zero_coordinate(&df, "Latitude")?;
    df = filter_zero_coordinate(&df, "Longitude")?;
    df = drop_missing_coordinates(&df)?;
    binarize_outcome(&mut df)?;

    for name in DROP_COLUMNS {
        if df.column(name).is_ok() {
            df.drop_in_place(name)?;
        }
    }

    Ok(CleanOutcome { frame: df, faults })
}

/// Combine the stop date and time columns into one ISO `DateTime`
/// column, removing rows that fail to parse and returning their faults.
fn merge_stop_datetime(df: &mut DataFrame) -> Result<Vec<RecordFault>> {
    let date_col = df
        .column("Date Of Stop")
        .context("missing Date Of Stop column")?
        .clone();
    let time_col = df
        .column("Time Of Stop")
        .context("missing Time Of Stop column")?
        .clone();

    let mut faults = Vec::new();
    let mut keep = Vec::with_capacity(df.height());
    let mut timestamps: Vec<Option<String>> = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let date = any_to_string(date_col.get(idx).unwrap_or(AnyValue::Null));
        let time = any_to_string(time_col.get(idx).unwrap_or(AnyValue::Null));
        let combined = format!("{} {}", date.trim(), time.trim());
        match parse_stop_datetime(combined.trim()) {
            Some(ts) => {
                timestamps.push(Some(ts.format(DATETIME_FORMAT).to_string()));
                keep.push(true);
            }
            None => {
                faults.push(RecordFault {
                    row: idx,
                    field: "DateTime".to_string(),
                    value: combined.trim().to_string(),
                });
                timestamps.push(None);
                keep.push(false);
            }
        }
    }

    df.with_column(Series::new("DateTime".into(), timestamps))?;
    if faults.is_empty() {
        return Ok(faults);
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    *df = df.filter(&mask)?;
    Ok(faults)
}

fn parse_stop_datetime(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }
    STOP_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Remove rows whose coordinate is exactly zero, the source's sentinel
/// for "position unknown". Nulls survive this pass; they are handled by
/// the dedicated missing-coordinate pass.
fn filter_zero_coordinate(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let col = df
        .column(column)
        .with_context(|| format!("missing {column} column"))?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_f64(col.get(idx).unwrap_or(AnyValue::Null));
        keep.push(value != Some(0.0));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Remove rows where either coordinate is missing or non-numeric.
fn drop_missing_coordinates(df: &DataFrame) -> Result<DataFrame> {
    let lat = df.column("Latitude")?.clone();
    let lon = df.column("Longitude")?.clone();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let lat_value = any_to_f64(lat.get(idx).unwrap_or(AnyValue::Null));
        let lon_value = any_to_f64(lon.get(idx).unwrap_or(AnyValue::Null));
        keep.push(lat_value.is_some() && lon_value.is_some());
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Rewrite `Accident` as a 1/0 indicator. Only the literal "Yes" maps
/// to 1; "No", empty, and unexpected values all map to 0. The permissive
/// default is intentional, not an error path.
fn binarize_outcome(df: &mut DataFrame) -> Result<()> {
    let col = df.column("Accident").context("missing Accident column")?;
    let mut values: Vec<i32> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw = any_to_string(col.get(idx).unwrap_or(AnyValue::Null));
        values.push(i32::from(raw.trim() == "Yes"));
    }
    df.with_column(Series::new("Accident".into(), values))?;
    Ok(())
}

/// Keep only rows whose `State` is in the supported set.
pub fn filter_states(df: &DataFrame, states: &[&str]) -> Result<DataFrame> {
    let col = df.column("State").context("missing State column")?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(col.get(idx).unwrap_or(AnyValue::Null));
        keep.push(states.contains(&value.trim()));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Add rounded-coordinate and date-only columns used as join keys
/// against a weather archive.
pub fn prepare_weather_keys(df: &DataFrame) -> Result<DataFrame> {
    let lat = df.column("Latitude")?.clone();
    let lon = df.column("Longitude")?.clone();
    let datetime = df.column("DateTime")?.clone();

    let mut lat_round: Vec<Option<f64>> = Vec::with_capacity(df.height());
    let mut lon_round: Vec<Option<f64>> = Vec::with_capacity(df.height());
    let mut date_only: Vec<Option<String>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        lat_round.push(any_to_f64(lat.get(idx).unwrap_or(AnyValue::Null)).map(round4));
        lon_round.push(any_to_f64(lon.get(idx).unwrap_or(AnyValue::Null)).map(round4));
        let raw = any_to_string(datetime.get(idx).unwrap_or(AnyValue::Null));
        let date = NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
            .ok()
            .map(|ts| ts.date().format("%Y-%m-%d").to_string());
        date_only.push(date);
    }

    let mut out = df.clone();
    out.with_column(Series::new("lat_round".into(), lat_round))?;
    out.with_column(Series::new("lon_round".into(), lon_round))?;
    out.with_column(Series::new("date_only".into(), date_only))?;
    Ok(out)
}

/// Remove rows whose weather join produced no data in `column`.
pub fn drop_missing_weather(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let col = df
        .column(column)
        .with_context(|| format!("missing {column} column"))?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        keep.push(!matches!(col.get(idx).unwrap_or(AnyValue::Null), AnyValue::Null));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
