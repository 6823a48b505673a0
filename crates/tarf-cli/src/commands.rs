//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;

use tarf_core::{build_feature_frame, derive_time_features, filter_states, part_of_day};
use tarf_ingest::{read_violations_csv, write_frame_csv};
use tarf_model::{
    FeatureRecord, PredictionResult, RiskTier, SUPPORTED_STATES, gender_token,
    vehicle_type_token, weather_condition,
};
use tarf_predict::RiskClassifier;

use crate::cli::{PrepareArgs, PredictArgs};

/// What `prepare` did, for the summary table.
pub struct PrepareSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub faults: usize,
}

/// One live-query outcome, for the result table.
pub struct PredictionOutcome {
    pub record: FeatureRecord,
    pub result: PredictionResult,
    pub tier: RiskTier,
}

pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareSummary> {
    let raw = read_violations_csv(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let rows_read = raw.height();

    let states: Vec<&str> = if args.states.is_empty() {
        SUPPORTED_STATES.to_vec()
    } else {
        args.states.iter().map(String::as_str).collect()
    };
    let raw = filter_states(&raw, &states)?;

    let (mut frame, faults) = build_feature_frame(&raw)?;
    for fault in &faults {
        tracing::warn!(
            row = fault.row,
            field = %fault.field,
            value = %fault.value,
            "skipped unparseable record"
        );
    }
    if args.fail_on_faults && !faults.is_empty() {
        bail!(faults[0].to_error());
    }

    let output = args
        .output_path
        .clone()
        .unwrap_or_else(|| args.input.with_extension("features.csv"));
    write_frame_csv(&mut frame, &output)
        .with_context(|| format!("write {}", output.display()))?;

    Ok(PrepareSummary {
        input: args.input.clone(),
        output,
        rows_read,
        rows_kept: frame.height(),
        faults: faults.len(),
    })
}

pub fn run_predict(args: &PredictArgs) -> Result<PredictionOutcome> {
    let now = Local::now().naive_local();
    let time = derive_time_features(now);
    let hour = args.hour.unwrap_or(time.hour);
    let part = part_of_day(hour)?;

    let record = FeatureRecord {
        state: args.state.clone(),
        vehicle_type: vehicle_type_token(&args.vehicle)
            .map_or_else(|| args.vehicle.clone(), ToString::to_string),
        gender: gender_token(&args.gender)
            .map_or_else(|| args.gender.clone(), ToString::to_string),
        temperature: args.temperature,
        precipitation: args.precipitation,
        snowfall: args.snowfall,
        windspeed: args.windspeed,
        hour,
        day_of_week: time.day_of_week,
        month: time.month,
        part_of_day: part.as_str().to_string(),
        weather_condition: weather_condition(args.weather_code).to_string(),
    };

    let classifier = RiskClassifier::from_artifacts(&args.model, &args.columns)?;
    let (result, tier) = classifier.assess(&record);
    tracing::debug!(
        probability = result.probability,
        label = result.label,
        "estimator invoked"
    );
    Ok(PredictionOutcome {
        record,
        result,
        tier,
    })
}
