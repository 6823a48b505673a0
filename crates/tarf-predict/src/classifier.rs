//! The classifier wrapper: schema-aligned single-record inference.

use std::fmt;
use std::path::Path;

use tarf_core::align_record;
use tarf_model::{FeatureRecord, ModelColumnSchema, PredictionResult, Result, RiskTier};

use crate::artifacts::load_assets;
use crate::estimator::Estimator;

/// A loaded estimator bound to the schema it was trained against.
///
/// Load once and reuse for the process lifetime; both halves are
/// read-only afterwards, so concurrent callers need no coordination.
pub struct RiskClassifier {
    estimator: Box<dyn Estimator>,
    schema: ModelColumnSchema,
}

impl fmt::Debug for RiskClassifier {
    // The estimator is an opaque trait object; only the schema binding
    // is meaningful to show.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskClassifier")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl RiskClassifier {
    pub fn new(estimator: Box<dyn Estimator>, schema: ModelColumnSchema) -> Self {
        Self { estimator, schema }
    }

    /// Load the classifier from the trained artifacts. Fails with
    /// `ArtifactNotFound` / `ModelUnavailable`; both are fatal for the
    /// session.
    pub fn from_artifacts(model_path: &Path, columns_path: &Path) -> Result<Self> {
        let (estimator, schema) = load_assets(model_path, columns_path)?;
        Ok(Self::new(Box::new(estimator), schema))
    }

    pub fn schema(&self) -> &ModelColumnSchema {
        &self.schema
    }

    /// Predict for a single live query: align the record against the
    /// schema and invoke the estimator once with that vector.
    pub fn predict_one(&self, record: &FeatureRecord) -> PredictionResult {
        let vector = align_record(record, &self.schema);
        PredictionResult {
            label: self.estimator.predict(&vector),
            probability: self.estimator.predict_probability(&vector),
        }
    }

    /// Prediction plus its presentation tier.
    pub fn assess(&self, record: &FeatureRecord) -> (PredictionResult, RiskTier) {
        let result = self.predict_one(record);
        (result, RiskTier::from_probability(result.probability))
    }
}
