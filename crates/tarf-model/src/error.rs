use std::path::PathBuf;

use thiserror::Error;

/// Shared error taxonomy for the forecasting pipeline.
///
/// Unseen categorical values and unknown weather codes are deliberately
/// absent here: they degrade gracefully (zero-filled columns, the "Other"
/// condition label) instead of failing.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A single record's field could not be parsed. Carries enough
    /// context (row, field, value) for the caller to decide between
    /// skip-and-continue and fail-fast.
    #[error("record {row}: cannot parse {field} value {value:?}")]
    Parse {
        row: usize,
        field: String,
        value: String,
    },

    /// An input value outside its documented domain (e.g. hour > 23).
    #[error("domain error: {0}")]
    Domain(String),

    /// A trained artifact (estimator or column schema) is missing on disk.
    /// Fatal for the session: no prediction is possible without it.
    #[error("model artifact not found: {path}")]
    ArtifactNotFound { path: PathBuf },

    /// The trained artifacts exist but could not be loaded or do not
    /// correspond to each other. Fatal for the session, not retryable.
    #[error("prediction model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
