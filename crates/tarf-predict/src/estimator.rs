//! The opaque trained estimator behind a narrow trait.

use serde::{Deserialize, Serialize};

use tarf_model::AlignedFeatureVector;

/// The two operations the pipeline needs from a trained classifier.
/// Everything about how the probability is produced stays behind this
/// seam.
pub trait Estimator: Send + Sync {
    /// Hard classification over one aligned row: 1 = accident.
    fn predict(&self, features: &AlignedFeatureVector) -> u8;

    /// Accident probability in [0, 1] over one aligned row.
    fn predict_probability(&self, features: &AlignedFeatureVector) -> f64;
}

/// A logistic model over the aligned feature vector, as exported by the
/// training process.
///
/// Invariant (enforced at load time): `weights` and `feature_names`
/// have the schema's length and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticEstimator {
    pub version: u32,
    intercept: f64,
    weights: Vec<f64>,
    feature_names: Vec<String>,
}

impl LogisticEstimator {
    pub fn new(
        version: u32,
        intercept: f64,
        weights: Vec<f64>,
        feature_names: Vec<String>,
    ) -> Self {
        Self {
            version,
            intercept,
            weights,
            feature_names,
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    fn decision(&self, features: &AlignedFeatureVector) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(features.values())
                .map(|(weight, value)| weight * value)
                .sum::<f64>()
    }
}

impl Estimator for LogisticEstimator {
    fn predict(&self, features: &AlignedFeatureVector) -> u8 {
        u8::from(self.predict_probability(features) >= 0.5)
    }

    fn predict_probability(&self, features: &AlignedFeatureVector) -> f64 {
        let decision = self.decision(features);
        1.0 / (1.0 + (-decision).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_stays_in_unit_interval() {
        let estimator = LogisticEstimator::new(
            1,
            -2.0,
            vec![0.5, -3.0],
            vec!["a".to_string(), "b".to_string()],
        );
        for values in [vec![0.0, 0.0], vec![100.0, 0.0], vec![0.0, 100.0]] {
            let p = estimator.predict_probability(&AlignedFeatureVector::new(values));
            assert!((0.0..=1.0).contains(&p), "p = {p}");
        }
    }

    #[test]
    fn label_follows_half_threshold() {
        let estimator =
            LogisticEstimator::new(1, 0.0, vec![1.0], vec!["a".to_string()]);
        assert_eq!(estimator.predict(&AlignedFeatureVector::new(vec![2.0])), 1);
        assert_eq!(estimator.predict(&AlignedFeatureVector::new(vec![-2.0])), 0);
        // Zero decision is exactly p = 0.5, which classifies as 1.
        assert_eq!(estimator.predict(&AlignedFeatureVector::new(vec![0.0])), 1);
    }
}
