//! Discrete risk tiers derived from a raw accident probability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk bucket for presentation. Thresholds are fixed:
/// below 0.25 is Low, below 0.50 is Moderate, 0.50 and above is High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Categorize a probability. Total over [0, 1]; the probability is
    /// assumed pre-validated by the estimator contract.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.25 {
            Self::Low
        } else if probability < 0.50 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_low() {
        assert_eq!(RiskTier::from_probability(0.10), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.25), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.49), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.50), RiskTier::High);
        assert_eq!(RiskTier::from_probability(0.99), RiskTier::High);
    }

    #[test]
    fn boundary_zero_and_one() {
        assert_eq!(RiskTier::from_probability(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(1.0), RiskTier::High);
    }
}
