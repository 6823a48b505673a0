//! Calendar and time-of-day feature derivation.

use std::fmt;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use tarf_model::ForecastError;

use crate::data_utils::any_to_string;

/// Layout of the `DateTime` column the cleaner emits.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Part-of-day tier: Morning [5,12), Afternoon [12,17), Evening
/// [17,21), Night otherwise. Night wraps midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl PartOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for PartOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorize an hour of day. Total over 0-23; anything larger is a
/// domain error.
pub fn part_of_day(hour: u32) -> std::result::Result<PartOfDay, ForecastError> {
    if hour > 23 {
        return Err(ForecastError::Domain(format!("hour {hour} outside 0-23")));
    }
    Ok(classify_hour(hour))
}

fn classify_hour(hour: u32) -> PartOfDay {
    match hour {
        5..=11 => PartOfDay::Morning,
        12..=16 => PartOfDay::Afternoon,
        17..=20 => PartOfDay::Evening,
        _ => PartOfDay::Night,
    }
}

/// Categorical time features derived from one timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFeatures {
    /// 0-23.
    pub hour: u32,
    /// Full English weekday name, e.g. "Friday".
    pub day_of_week: String,
    /// 1-12.
    pub month: u32,
    pub part_of_day: PartOfDay,
}

/// Derive time features from a timestamp. Pure; the hour a timestamp
/// carries is always in range.
pub fn derive_time_features(timestamp: NaiveDateTime) -> TimeFeatures {
    let hour = timestamp.hour();
    TimeFeatures {
        hour,
        day_of_week: timestamp.format("%A").to_string(),
        month: timestamp.month(),
        part_of_day: classify_hour(hour),
    }
}

/// Batch path: parse the `DateTime` column and append `Hour`,
/// `DayOfWeek`, `Month`, and `PartOfDay` columns.
///
/// The column is expected in the cleaner's ISO layout; a malformed
/// value here means the frame skipped cleaning and is a hard error.
pub fn add_time_features(df: &DataFrame) -> Result<DataFrame> {
    let datetime = df.column("DateTime").context("missing DateTime column")?;

    let mut hours: Vec<i64> = Vec::with_capacity(df.height());
    let mut day_names: Vec<String> = Vec::with_capacity(df.height());
    let mut months: Vec<i64> = Vec::with_capacity(df.height());
    let mut parts: Vec<&'static str> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let raw = any_to_string(datetime.get(idx).unwrap_or(AnyValue::Null));
        let ts = NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)
            .map_err(|_| {
                ForecastError::Parse {
                    row: idx,
                    field: "DateTime".to_string(),
                    value: raw.clone(),
                }
            })
            .context("DateTime column is not in cleaned form")?;
        let features = derive_time_features(ts);
        hours.push(i64::from(features.hour));
        day_names.push(features.day_of_week);
        months.push(i64::from(features.month));
        parts.push(features.part_of_day.as_str());
    }

    let mut out = df.clone();
    out.with_column(Series::new("Hour".into(), hours))?;
    out.with_column(Series::new("DayOfWeek".into(), day_names))?;
    out.with_column(Series::new("Month".into(), months))?;
    out.with_column(Series::new("PartOfDay".into(), parts))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn derives_all_features_from_timestamp() {
        // 2024-01-05 is a Friday.
        let ts = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(22, 15, 0)
            .unwrap();
        let features = derive_time_features(ts);
        assert_eq!(features.hour, 22);
        assert_eq!(features.day_of_week, "Friday");
        assert_eq!(features.month, 1);
        assert_eq!(features.part_of_day, PartOfDay::Night);
    }

    #[test]
    fn out_of_range_hour_is_a_domain_error() {
        assert!(matches!(part_of_day(24), Err(ForecastError::Domain(_))));
        assert!(part_of_day(23).is_ok());
    }
}
