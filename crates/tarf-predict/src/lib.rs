//! Trained-artifact loading and risk classification for the
//! accident-risk forecaster.

pub mod artifacts;
pub mod classifier;
pub mod estimator;

pub use artifacts::load_assets;
pub use classifier::RiskClassifier;
pub use estimator::{Estimator, LogisticEstimator};
