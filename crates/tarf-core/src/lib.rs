//! Feature engineering and prediction alignment for the accident-risk
//! forecaster.
//!
//! Every stage is a pure, record-scoped transformation over its own
//! copy of the data: cleaning, time-feature derivation,
//! weather-condition mapping, and schema alignment. Nothing here does
//! I/O; frames come from `tarf-ingest` and trained artifacts from
//! `tarf-predict`.

pub mod align;
pub mod clean;
pub mod data_utils;
pub mod pipeline;
pub mod time;
pub mod weather;

pub use align::{AlignmentReport, align_frame, align_record};
pub use clean::{
    CleanOutcome, DROP_COLUMNS, RecordFault, clean_violations, drop_missing_weather,
    filter_states, prepare_weather_keys,
};
pub use data_utils::{any_to_f64, any_to_i64, any_to_string, parse_f64, parse_i64};
pub use pipeline::build_feature_frame;
pub use time::{
    DATETIME_FORMAT, PartOfDay, TimeFeatures, add_time_features, derive_time_features,
    part_of_day,
};
pub use weather::add_weather_condition;
