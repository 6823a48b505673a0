//! Feature catalog and the record/vector types that flow through the
//! alignment pipeline.

use serde::{Deserialize, Serialize};

/// Every feature the trained model consumes, continuous and categorical.
pub const MODEL_FEATURES: &[&str] = &[
    "temperature",
    "precipitation",
    "snowfall",
    "windspeed",
    "Hour",
    "DayOfWeek",
    "Month",
    "PartOfDay",
    "WeatherCondition",
    "VehicleType",
    "State",
    "Gender",
];

/// Features that one-hot encode at training time. `Month` appears here
/// even though a given training run may have left it numeric; the schema
/// layout decides which representation is actually in force.
pub const CATEGORICAL_FEATURES: &[&str] = &[
    "DayOfWeek",
    "Month",
    "PartOfDay",
    "WeatherCondition",
    "VehicleType",
    "State",
    "Gender",
];

/// A single live query, assembled by the caller after geocoding and
/// weather retrieval have already happened.
///
/// Categorical fields hold training tokens (e.g. `02 - Automobile`,
/// `M`), not presentation labels; see [`crate::terminology`] for the
/// label-to-token maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub state: String,
    pub vehicle_type: String,
    pub gender: String,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    pub precipitation: f64,
    pub snowfall: f64,
    /// Wind speed in km/h.
    pub windspeed: f64,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// Full English weekday name, e.g. "Friday".
    pub day_of_week: String,
    /// Month number, 1-12.
    pub month: u32,
    pub part_of_day: String,
    pub weather_condition: String,
}

impl FeatureRecord {
    /// Numeric value of a feature, for schema columns that pass through
    /// unencoded. `Hour` and `Month` are reachable from both lookups
    /// because their training-time representation varies.
    pub fn continuous_value(&self, feature: &str) -> Option<f64> {
        match feature {
            "temperature" => Some(self.temperature),
            "precipitation" => Some(self.precipitation),
            "snowfall" => Some(self.snowfall),
            "windspeed" => Some(self.windspeed),
            "Hour" => Some(f64::from(self.hour)),
            "Month" => Some(f64::from(self.month)),
            _ => None,
        }
    }

    /// Categorical value of a feature, for indicator columns.
    pub fn categorical_value(&self, feature: &str) -> Option<String> {
        match feature {
            "DayOfWeek" => Some(self.day_of_week.clone()),
            "Month" => Some(self.month.to_string()),
            "PartOfDay" => Some(self.part_of_day.clone()),
            "WeatherCondition" => Some(self.weather_condition.clone()),
            "VehicleType" => Some(self.vehicle_type.clone()),
            "State" => Some(self.state.clone()),
            "Gender" => Some(self.gender.clone()),
            "Hour" => Some(self.hour.to_string()),
            _ => None,
        }
    }
}

/// A numeric row whose positions are exactly the model column schema,
/// in schema order. Constructed only by the aligner, which guarantees
/// the length invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedFeatureVector {
    values: Vec<f64>,
}

impl AlignedFeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of a single estimator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Hard classification: 1 = accident, 0 = no accident.
    pub label: u8,
    /// Accident probability in [0, 1].
    pub probability: f64,
}
