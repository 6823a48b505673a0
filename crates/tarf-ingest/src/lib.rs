//! Raw record ingestion for the accident-risk forecaster.
//!
//! The batch source format is a collaborator concern; this crate owns
//! only the CSV boundary: reading raw violation rows into an all-string
//! polars frame and writing prepared frames back out.

mod csv_ingest;

pub use csv_ingest::{read_violations_csv, write_frame_csv};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("frame error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
}
