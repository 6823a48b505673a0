//! Controlled terminology: the WMO weather-code catalog and the
//! label-to-token maps for categorical inputs.
//!
//! Lookups here never fail. Live data sources emit codes and labels
//! outside the enumerated sets, and an unknown value must degrade to a
//! usable fallback rather than abort a query.

/// Jurisdictions the trained model has seen.
pub const SUPPORTED_STATES: &[&str] = &["DC", "PA", "FL", "NC", "NY", "CA"];

/// WMO weather interpretation codes and their condition labels, as
/// emitted by the Open-Meteo API family.
pub const WEATHER_CODES: &[(i64, &str)] = &[
    (0, "Clear"),
    (1, "Mainly Clear"),
    (2, "Partly Cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing Rime Fog"),
    (51, "Light Drizzle"),
    (53, "Moderate Drizzle"),
    (55, "Dense Drizzle"),
    (56, "Light Freezing Drizzle"),
    (57, "Dense Freezing Drizzle"),
    (61, "Slight Rain"),
    (63, "Moderate Rain"),
    (65, "Heavy Rain"),
    (66, "Light Freezing Rain"),
    (67, "Heavy Freezing Rain"),
    (71, "Slight Snowfall"),
    (73, "Moderate Snowfall"),
    (75, "Heavy Snowfall"),
    (77, "Snow Grains"),
    (80, "Slight Rain Showers"),
    (81, "Moderate Rain Showers"),
    (82, "Violent Rain Showers"),
    (85, "Slight Snow Showers"),
    (86, "Heavy Snow Showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with Slight Hail"),
    (99, "Thunderstorm with Heavy Hail"),
];

/// Condition label used for any code outside the catalog.
pub const UNKNOWN_CONDITION: &str = "Other";

/// Map a WMO weather code to its condition label. Unknown codes map to
/// [`UNKNOWN_CONDITION`], never an error.
pub fn weather_condition(code: i64) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map_or(UNKNOWN_CONDITION, |(_, label)| label)
}

/// Presentation vehicle labels and their training tokens.
pub const VEHICLE_TYPES: &[(&str, &str)] = &[
    ("Automobile", "02 - Automobile"),
    ("Station Wagon", "03 - Station Wagon"),
    ("Light Duty Truck", "05 - Light Duty Truck"),
    ("Heavy Duty Truck", "06 - Heavy Duty Truck"),
    ("Other", "28 - Other"),
    ("Unknown", "29 - Unknown"),
];

/// Map a vehicle presentation label to its training token.
pub fn vehicle_type_token(label: &str) -> Option<&'static str> {
    VEHICLE_TYPES
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, token)| *token)
}

/// Presentation gender labels and their training tokens.
pub const GENDERS: &[(&str, &str)] = &[("Male", "M"), ("Female", "F"), ("Unknown", "U")];

/// Map a gender presentation label to its training token.
pub fn gender_token(label: &str) -> Option<&'static str> {
    GENDERS
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, token)| *token)
}
