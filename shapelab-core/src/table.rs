//! Results table: one row per simulation repetition.

use serde::{Deserialize, Serialize};

/// One repetition of the study: the drawn sample's size and true shape,
/// plus both estimates computed from it.
///
/// Immutable once produced; rows are owned by the [`ResultsTable`] they are
/// appended to. The bootstrap estimate may be negative: the reflection
/// `2*mle - mean(bootstrap)` can overshoot for strongly biased small-sample
/// estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "n")]
    pub sample_size: usize,
    #[serde(rename = "k")]
    pub true_shape: f64,
    #[serde(rename = "ML")]
    pub mle: f64,
    #[serde(rename = "ML_bootstrap")]
    pub bootstrap: f64,
}

/// Append-only, ordered collection of observations.
///
/// Insertion order is the grid traversal order (shape outer, size middle,
/// repetition inner) and is part of the reproducibility contract: two runs
/// with the same config compare equal row-for-row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsTable {
    rows: Vec<Observation>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pre-existing rows (aggregation tests, replays).
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    /// Append one observation; only the driver appends during a run.
    pub(crate) fn push(&mut self, obs: Observation) {
        self.rows.push(obs);
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows belonging to one (shape, size) cell.
    pub fn cell_count(&self, true_shape: f64, sample_size: usize) -> usize {
        self.rows
            .iter()
            .filter(|o| o.true_shape == true_shape && o.sample_size == sample_size)
            .count()
    }
}
