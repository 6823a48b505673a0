//! Model column schema: the fixed, ordered feature-column list produced
//! at training time.
//!
//! The schema is the single source of truth for the shape of every
//! vector handed to the estimator. It is loaded once, never mutated, and
//! versioned so the estimator artifact can be cross-checked against it.

use serde::{Deserialize, Serialize};

use crate::features::CATEGORICAL_FEATURES;

/// An ordered, immutable list of the columns the trained estimator
/// expects, in training order.
///
/// Column names are either a continuous feature name verbatim
/// (e.g. `temperature`) or `Feature_value` for a one-hot indicator
/// (e.g. `VehicleType_02 - Automobile`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelColumnSchema {
    pub version: u32,
    columns: Vec<String>,
}

impl ModelColumnSchema {
    pub fn new(version: u32, columns: Vec<String>) -> Self {
        Self { version, columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Derive the column layout once from the column names.
    ///
    /// A column belongs to a categorical feature when it is named
    /// `Feature_value` for one of the known categorical features;
    /// everything else is numeric passthrough. This makes encoding a
    /// direct lookup instead of something inferred from whatever values
    /// happen to appear in the current batch.
    pub fn layout(&self) -> Vec<ColumnKind> {
        self.columns.iter().map(|name| column_kind(name)).collect()
    }
}

/// How a single schema column is populated from a feature record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Numeric column named exactly after a feature; takes the record's
    /// value directly.
    Continuous { feature: String },
    /// One-hot indicator: 1.0 iff the record's value for `feature`
    /// equals `category`.
    Indicator { feature: String, category: String },
}

fn column_kind(name: &str) -> ColumnKind {
    for feature in CATEGORICAL_FEATURES {
        if let Some(category) = name
            .strip_prefix(*feature)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return ColumnKind::Indicator {
                feature: (*feature).to_string(),
                category: category.to_string(),
            };
        }
    }
    ColumnKind::Continuous {
        feature: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_columns_split_on_feature_prefix() {
        let schema = ModelColumnSchema::new(
            1,
            vec![
                "temperature".to_string(),
                "VehicleType_02 - Automobile".to_string(),
                "State_PA".to_string(),
            ],
        );
        let layout = schema.layout();
        assert_eq!(
            layout[0],
            ColumnKind::Continuous {
                feature: "temperature".to_string()
            }
        );
        assert_eq!(
            layout[1],
            ColumnKind::Indicator {
                feature: "VehicleType".to_string(),
                category: "02 - Automobile".to_string(),
            }
        );
        assert_eq!(
            layout[2],
            ColumnKind::Indicator {
                feature: "State".to_string(),
                category: "PA".to_string(),
            }
        );
    }

    #[test]
    fn bare_categorical_name_is_numeric_passthrough() {
        // A training run that never one-hot encoded Month leaves a bare
        // numeric column; the layout must honor that.
        let schema = ModelColumnSchema::new(1, vec!["Month".to_string(), "Hour".to_string()]);
        let layout = schema.layout();
        assert!(matches!(layout[0], ColumnKind::Continuous { .. }));
        assert!(matches!(layout[1], ColumnKind::Continuous { .. }));
    }

    #[test]
    fn category_value_may_contain_underscores() {
        let schema = ModelColumnSchema::new(1, vec!["WeatherCondition_Fog_Heavy".to_string()]);
        match &schema.layout()[0] {
            ColumnKind::Indicator { feature, category } => {
                assert_eq!(feature, "WeatherCondition");
                assert_eq!(category, "Fog_Heavy");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
