//! End-to-end batch path: raw frame to feature frame.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tarf_core::build_feature_frame;

fn raw_with_weather() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "Date Of Stop".into(),
            vec!["01/05/2024", "06/10/2024", "bogus"],
        )
        .into(),
        Series::new(
            "Time Of Stop".into(),
            vec!["22:15:00", "08:00:00", "10:00:00"],
        )
        .into(),
        Series::new("Latitude".into(), vec![39.0, 39.1, 39.2]).into(),
        Series::new("Longitude".into(), vec![-77.0, -77.1, -77.2]).into(),
        Series::new("Accident".into(), vec!["Yes", "No", "Yes"]).into(),
        Series::new("weathercode".into(), vec![61i64, 0, 3]).into(),
        Series::new("State".into(), vec!["PA", "NY", "CA"]).into(),
    ])
    .unwrap()
}

#[test]
fn builds_feature_frame_with_time_and_weather_columns() {
    let (frame, faults) = build_feature_frame(&raw_with_weather()).unwrap();

    assert_eq!(frame.height(), 2);
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].row, 2);

    let conditions = frame.column("WeatherCondition").unwrap().str().unwrap();
    assert_eq!(conditions.get(0), Some("Slight Rain"));
    assert_eq!(conditions.get(1), Some("Clear"));

    let parts = frame.column("PartOfDay").unwrap().str().unwrap();
    assert_eq!(parts.get(0), Some("Night"));
    assert_eq!(parts.get(1), Some("Morning"));

    let accidents = frame.column("Accident").unwrap().i32().unwrap();
    assert_eq!(accidents.get(0), Some(1));
    assert_eq!(accidents.get(1), Some(0));
}

#[test]
fn missing_weathercode_column_skips_enrichment() {
    let df = DataFrame::new(vec![
        Series::new("Date Of Stop".into(), vec!["01/05/2024"]).into(),
        Series::new("Time Of Stop".into(), vec!["22:15:00"]).into(),
        Series::new("Latitude".into(), vec![39.0]).into(),
        Series::new("Longitude".into(), vec![-77.0]).into(),
        Series::new("Accident".into(), vec!["Yes"]).into(),
    ])
    .unwrap();

    let (frame, faults) = build_feature_frame(&df).unwrap();
    assert!(faults.is_empty());
    assert!(frame.column("WeatherCondition").is_err());
    assert!(frame.column("Hour").is_ok());
}
