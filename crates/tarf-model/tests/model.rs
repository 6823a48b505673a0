//! Public-API tests for the forecaster data model.

use tarf_model::{
    ColumnKind, FeatureRecord, ModelColumnSchema, RiskTier, weather_condition,
};

fn sample_record() -> FeatureRecord {
    FeatureRecord {
        state: "PA".to_string(),
        vehicle_type: "02 - Automobile".to_string(),
        gender: "M".to_string(),
        temperature: 2.0,
        precipitation: 0.5,
        snowfall: 0.0,
        windspeed: 20.0,
        hour: 22,
        day_of_week: "Friday".to_string(),
        month: 1,
        part_of_day: "Night".to_string(),
        weather_condition: "Slight Rain".to_string(),
    }
}

#[test]
fn layout_covers_every_schema_column() {
    let schema = ModelColumnSchema::new(
        1,
        vec![
            "temperature".to_string(),
            "windspeed".to_string(),
            "DayOfWeek_Friday".to_string(),
            "PartOfDay_Night".to_string(),
            "State_PA".to_string(),
        ],
    );
    let layout = schema.layout();
    assert_eq!(layout.len(), schema.len());

    let record = sample_record();
    for kind in &layout {
        match kind {
            ColumnKind::Continuous { feature } => {
                assert!(record.continuous_value(feature).is_some(), "{feature}");
            }
            ColumnKind::Indicator { feature, .. } => {
                assert!(record.categorical_value(feature).is_some(), "{feature}");
            }
        }
    }
}

#[test]
fn risk_tiers_order() {
    assert!(RiskTier::Low < RiskTier::Moderate);
    assert!(RiskTier::Moderate < RiskTier::High);
    assert_eq!(RiskTier::from_probability(0.50).label(), "High Risk");
}

#[test]
fn weather_catalog_has_fallback() {
    assert_eq!(weather_condition(45), "Fog");
    assert_eq!(weather_condition(1234), "Other");
}
