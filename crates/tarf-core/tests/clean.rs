//! Tests for the violation-record cleaner.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tarf_core::{clean_violations, filter_states, prepare_weather_keys};

fn raw_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "Date Of Stop".into(),
            vec![
                Some("09/24/2013"),
                Some("09/25/2013"),
                Some("09/26/2013"),
                Some("09/27/2013"),
                Some("not-a-date"),
            ],
        )
        .into(),
        Series::new(
            "Time Of Stop".into(),
            vec![
                Some("17:11:00"),
                Some("08:30:00"),
                Some("12:00:00"),
                Some("23:45:00"),
                Some("09:00:00"),
            ],
        )
        .into(),
        Series::new(
            "Latitude".into(),
            vec![Some("39.0837"), Some("0.0"), Some("39.1000"), None, Some("39.2000")],
        )
        .into(),
        Series::new(
            "Longitude".into(),
            vec![
                Some("-77.1500"),
                Some("-77.2000"),
                Some("0.0"),
                Some("-77.3000"),
                Some("-77.4000"),
            ],
        )
        .into(),
        Series::new(
            "Accident".into(),
            vec![Some("Yes"), Some("No"), Some("Yes"), Some("Maybe"), Some("Yes")],
        )
        .into(),
        Series::new(
            "SeqID".into(),
            vec![Some("a"), Some("b"), Some("c"), Some("d"), Some("e")],
        )
        .into(),
        Series::new(
            "State".into(),
            vec![Some("PA"), Some("NY"), Some("CA"), Some("PA"), Some("XX")],
        )
        .into(),
    ])
    .unwrap()
}

#[test]
fn removes_zero_and_missing_coordinates_and_bad_timestamps() {
    let raw = raw_frame();
    let outcome = clean_violations(&raw).unwrap();

    // Row 0 is the only survivor: row 1 has zero latitude, row 2 zero
    // longitude, row 3 a missing latitude, row 4 an unparseable date.
    assert_eq!(outcome.frame.height(), 1);
    assert_eq!(outcome.faults.len(), 1);
    assert_eq!(outcome.faults[0].row, 4);
    assert_eq!(outcome.faults[0].field, "DateTime");
    assert!(outcome.faults[0].value.contains("not-a-date"));

    // Input frame is untouched.
    assert_eq!(raw.height(), 5);
}

#[test]
fn binarizes_outcome_permissively() {
    let df = DataFrame::new(vec![
        Series::new("Date Of Stop".into(), vec!["01/01/2020"; 4]).into(),
        Series::new("Time Of Stop".into(), vec!["10:00:00"; 4]).into(),
        Series::new("Latitude".into(), vec![39.0, 39.1, 39.2, 39.3]).into(),
        Series::new("Longitude".into(), vec![-77.0, -77.1, -77.2, -77.3]).into(),
        Series::new(
            "Accident".into(),
            vec![Some("Yes"), Some("No"), Some(""), Some("Maybe")],
        )
        .into(),
    ])
    .unwrap();

    let outcome = clean_violations(&df).unwrap();
    let accidents: Vec<i32> = outcome
        .frame
        .column("Accident")
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .map(Option::unwrap)
        .collect();
    assert_eq!(accidents, vec![1, 0, 0, 0]);
}

#[test]
fn merges_date_and_time_into_iso_datetime() {
    let df = DataFrame::new(vec![
        Series::new("Date Of Stop".into(), vec!["09/24/2013"]).into(),
        Series::new("Time Of Stop".into(), vec!["17:11:00"]).into(),
        Series::new("Latitude".into(), vec![39.0]).into(),
        Series::new("Longitude".into(), vec![-77.0]).into(),
        Series::new("Accident".into(), vec!["No"]).into(),
    ])
    .unwrap();

    let outcome = clean_violations(&df).unwrap();
    let datetime = outcome.frame.column("DateTime").unwrap().str().unwrap();
    assert_eq!(datetime.get(0), Some("2013-09-24T17:11:00"));
}

#[test]
fn drops_extraneous_columns_and_tolerates_absence() {
    let raw = raw_frame();
    let outcome = clean_violations(&raw).unwrap();
    // SeqID is on the drop list and present; most listed columns are
    // absent, which is not an error.
    assert!(outcome.frame.column("SeqID").is_err());
    assert!(outcome.frame.column("Date Of Stop").is_err());
    assert!(outcome.frame.column("State").is_ok());
}

#[test]
fn filters_to_supported_states() {
    let df = DataFrame::new(vec![
        Series::new("State".into(), vec!["PA", "XX", "NY"]).into(),
    ])
    .unwrap();
    let filtered = filter_states(&df, &["PA", "NY"]).unwrap();
    assert_eq!(filtered.height(), 2);
}

#[test]
fn weather_keys_round_coordinates_and_split_date() {
    let df = DataFrame::new(vec![
        Series::new("Latitude".into(), vec![39.083_712_9]).into(),
        Series::new("Longitude".into(), vec![-77.152_246_1]).into(),
        Series::new("DateTime".into(), vec!["2013-09-24T17:11:00"]).into(),
    ])
    .unwrap();

    let keyed = prepare_weather_keys(&df).unwrap();
    let lat = keyed.column("lat_round").unwrap().f64().unwrap().get(0);
    let lon = keyed.column("lon_round").unwrap().f64().unwrap().get(0);
    let date = keyed.column("date_only").unwrap().str().unwrap().get(0);
    assert_eq!(lat, Some(39.0837));
    assert_eq!(lon, Some(-77.1522));
    assert_eq!(date, Some("2013-09-24"));
}
