//! Serializable study configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one Monte Carlo study.
///
/// Every knob of the reference run is exposed as a parameter; `Default`
/// reproduces the reference study exactly. Two identical configs have the
/// same [`fingerprint`](StudyConfig::fingerprint), which together with the
/// seed pins the output bit-for-bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// True shape values, traversed in order (outer loop).
    pub shapes: Vec<f64>,

    /// Sample sizes, traversed in order (middle loop).
    pub sample_sizes: Vec<usize>,

    /// Total observation budget per (shape, size) cell: each cell runs
    /// `round(total_budget / n)` repetitions.
    pub total_budget: usize,

    /// Bootstrap resamples per repetition.
    pub bootstrap_count: usize,

    /// Master seed for the single shared stream.
    pub seed: u64,

    /// Initial root bracket for the direct MLE.
    pub direct_bracket: (f64, f64),

    /// Initial root bracket for MLE calls on bootstrap resamples.
    pub bootstrap_bracket: (f64, f64),
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            shapes: vec![0.5, 1.0, 2.0, 4.0],
            sample_sizes: vec![10, 100, 500],
            total_budget: 30_000,
            bootstrap_count: 100,
            seed: 38,
            direct_bracket: crate::solver::DIRECT_BRACKET,
            bootstrap_bracket: crate::solver::BOOTSTRAP_BRACKET,
        }
    }
}

/// Malformed-configuration errors, detected eagerly before any simulation
/// work starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("shapes list is empty")]
    EmptyShapes,
    #[error("sample_sizes list is empty")]
    EmptySampleSizes,
    #[error("shape {0} is not a positive finite number")]
    InvalidShape(f64),
    #[error("sample size must be at least 1")]
    ZeroSampleSize,
    #[error("total_budget must be at least 1")]
    ZeroBudget,
    #[error("bootstrap_count must be at least 1")]
    ZeroBootstrapCount,
    #[error("bracket [{lo}, {hi}] must satisfy 0 < lo < hi")]
    InvalidBracket { lo: f64, hi: f64 },
}

impl StudyConfig {
    /// Validate the whole configuration up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyShapes);
        }
        if self.sample_sizes.is_empty() {
            return Err(ConfigError::EmptySampleSizes);
        }
        if let Some(&bad) = self
            .shapes
            .iter()
            .find(|s| !s.is_finite() || **s <= 0.0)
        {
            return Err(ConfigError::InvalidShape(bad));
        }
        if self.sample_sizes.iter().any(|&n| n == 0) {
            return Err(ConfigError::ZeroSampleSize);
        }
        if self.total_budget == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        if self.bootstrap_count == 0 {
            return Err(ConfigError::ZeroBootstrapCount);
        }
        for &(lo, hi) in [&self.direct_bracket, &self.bootstrap_bracket] {
            if !lo.is_finite() || !hi.is_finite() || lo <= 0.0 || lo >= hi {
                return Err(ConfigError::InvalidBracket { lo, hi });
            }
        }
        Ok(())
    }

    /// Deterministic content hash of this configuration.
    ///
    /// Two runs with identical configs carry the same fingerprint, so
    /// artifacts can be matched back to the exact study that produced them.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(self).expect("StudyConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
