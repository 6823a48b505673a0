//! Batch composition: raw violation frame to feature frame.

use anyhow::Result;
use polars::prelude::DataFrame;

use tarf_model::MODEL_FEATURES;

use crate::clean::{CleanOutcome, RecordFault, clean_violations};
use crate::time::add_time_features;
use crate::weather::add_weather_condition;

/// Run the full batch path: clean, derive time features, and map
/// weather codes.
///
/// Weather enrichment is skipped (with a warning) when the frame has no
/// `weathercode` column, since the weather join is owned by an external
/// collaborator and may not have run yet. Faulted rows are excluded
/// from the frame and returned for the caller's fault policy.
pub fn build_feature_frame(raw: &DataFrame) -> Result<(DataFrame, Vec<RecordFault>)> {
    let CleanOutcome { frame, faults } = clean_violations(raw)?;
    tracing::info!(
        rows_in = raw.height(),
        rows_kept = frame.height(),
        faults = faults.len(),
        "cleaned violation records"
    );

    let frame = add_time_features(&frame)?;
    let frame = if frame.column("weathercode").is_ok() {
        add_weather_condition(&frame)?
    } else {
        tracing::warn!("no weathercode column; skipping weather-condition enrichment");
        frame
    };
    let missing: Vec<&str> = MODEL_FEATURES
        .iter()
        .filter(|feature| frame.column(feature).is_err())
        .copied()
        .collect();
    if !missing.is_empty() {
        tracing::warn!(?missing, "feature frame lacks model features");
    }
    tracing::info!(rows = frame.height(), "feature frame ready");
    Ok((frame, faults))
}
