//! Weather-condition enrichment from WMO classification codes.

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame, IntoSeries, StringChunkedBuilder};

use tarf_model::terminology::{UNKNOWN_CONDITION, weather_condition};

use crate::data_utils::any_to_i64;

/// Append a `WeatherCondition` column mapped from the `weathercode`
/// column. Codes outside the catalog (and missing codes) map to
/// "Other"; live sources emit codes the catalog has never seen and
/// that must not fail a batch.
pub fn add_weather_condition(df: &DataFrame) -> Result<DataFrame> {
    let codes = df
        .column("weathercode")
        .context("missing weathercode column")?;

    let mut builder = StringChunkedBuilder::new("WeatherCondition".into(), df.height());
    for idx in 0..df.height() {
        let label = match any_to_i64(codes.get(idx).unwrap_or(AnyValue::Null)) {
            Some(code) => weather_condition(code),
            None => UNKNOWN_CONDITION,
        };
        builder.append_value(label);
    }

    let mut out = df.clone();
    out.with_column(builder.finish().into_series())?;
    Ok(out)
}
