pub mod error;
pub mod features;
pub mod risk;
pub mod schema;
pub mod terminology;

pub use error::{ForecastError, Result};
pub use features::{
    AlignedFeatureVector, CATEGORICAL_FEATURES, FeatureRecord, MODEL_FEATURES, PredictionResult,
};
pub use risk::RiskTier;
pub use schema::{ColumnKind, ModelColumnSchema};
pub use terminology::{
    GENDERS, SUPPORTED_STATES, UNKNOWN_CONDITION, VEHICLE_TYPES, WEATHER_CODES, gender_token,
    vehicle_type_token, weather_condition,
};
