//! Loading and cross-checking of the trained artifacts.
//!
//! Two files come out of the training process: the estimator and the
//! model column schema. Either missing or unloadable is fatal for the
//! session; the caller must not attempt partial inference. Loading also
//! cross-checks that the two artifacts correspond, so schema drift
//! between independently produced files is caught here instead of
//! silently degrading predictions.

use std::path::Path;

use serde::de::DeserializeOwned;

use tarf_model::{ForecastError, ModelColumnSchema, Result};

use crate::estimator::LogisticEstimator;

/// Load both artifacts and verify they correspond.
pub fn load_assets(
    model_path: &Path,
    columns_path: &Path,
) -> Result<(LogisticEstimator, ModelColumnSchema)> {
    let schema: ModelColumnSchema = read_artifact(columns_path)?;
    let estimator: LogisticEstimator = read_artifact(model_path)?;

    if estimator.weight_count() != schema.len() {
        return Err(ForecastError::ModelUnavailable(format!(
            "estimator has {} weights but schema has {} columns",
            estimator.weight_count(),
            schema.len()
        )));
    }
    if estimator.feature_names() != schema.columns() {
        return Err(ForecastError::ModelUnavailable(
            "estimator feature names do not match schema columns".to_string(),
        ));
    }

    tracing::info!(
        schema_version = schema.version,
        estimator_version = estimator.version,
        columns = schema.len(),
        "loaded trained artifacts"
    );
    Ok((estimator, schema))
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(ForecastError::ArtifactNotFound {
            path: path.to_path_buf(),
        });
    }
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|error| {
        ForecastError::ModelUnavailable(format!("{}: {error}", path.display()))
    })
}
