//! Statistics aggregation — pure functions over a finished results table.
//!
//! Every statistic is recomputed fresh from the table; nothing here mutates
//! shared state. MSE is computed through the explicit decomposition
//! `bias^2 + sample_variance`, because that is the decomposition the two
//! estimators are judged by. Skewness and kurtosis are the third and
//! (excess) fourth standardized moments of the estimate distribution.

use serde::{Deserialize, Serialize};

use shapelab_core::table::ResultsTable;

/// Grouping key for one cell of the study grid. Derived on demand from the
/// table; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub true_shape: f64,
    pub sample_size: usize,
}

/// The two estimator variants under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorKind {
    #[serde(rename = "ML")]
    Mle,
    #[serde(rename = "ML_bootstrap")]
    Bootstrap,
}

impl std::fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // f.pad honors caller width/alignment flags
        f.pad(match self {
            EstimatorKind::Mle => "ML",
            EstimatorKind::Bootstrap => "ML_bootstrap",
        })
    }
}

/// Per-cell statistics for both estimators.
///
/// Kept flat (no nested key struct) so a row serializes directly to one CSV
/// line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellStats {
    pub true_shape: f64,
    pub sample_size: usize,
    pub observations: usize,
    pub bias_mle: f64,
    pub bias_bootstrap: f64,
    pub mse_mle: f64,
    pub mse_bootstrap: f64,
    pub skewness_mle: f64,
    pub skewness_bootstrap: f64,
    pub kurtosis_mle: f64,
    pub kurtosis_bootstrap: f64,
}

impl CellStats {
    pub fn cell(&self) -> GridCell {
        GridCell {
            true_shape: self.true_shape,
            sample_size: self.sample_size,
        }
    }
}

/// Shape-of-distribution breakdown per (true shape, estimator), pooled
/// across sample sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorMoments {
    pub true_shape: f64,
    pub estimator: EstimatorKind,
    pub observations: usize,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Group the table by (shape, size) and compute per-cell statistics, one
/// entry per cell in first-seen (= traversal) order.
pub fn aggregate(table: &ResultsTable) -> Vec<CellStats> {
    let mut groups: Vec<(GridCell, Vec<f64>, Vec<f64>)> = Vec::new();

    for obs in table.rows() {
        let cell = GridCell {
            true_shape: obs.true_shape,
            sample_size: obs.sample_size,
        };
        match groups.iter_mut().find(|(c, _, _)| *c == cell) {
            Some((_, mles, boots)) => {
                mles.push(obs.mle);
                boots.push(obs.bootstrap);
            }
            None => groups.push((cell, vec![obs.mle], vec![obs.bootstrap])),
        }
    }

    groups
        .into_iter()
        .map(|(cell, mles, boots)| {
            let (bias_mle, mse_mle) = bias_and_mse(&mles, cell.true_shape);
            let (bias_bootstrap, mse_bootstrap) = bias_and_mse(&boots, cell.true_shape);
            CellStats {
                true_shape: cell.true_shape,
                sample_size: cell.sample_size,
                observations: mles.len(),
                bias_mle,
                bias_bootstrap,
                mse_mle,
                mse_bootstrap,
                skewness_mle: skewness(&mles),
                skewness_bootstrap: skewness(&boots),
                kurtosis_mle: excess_kurtosis(&mles),
                kurtosis_bootstrap: excess_kurtosis(&boots),
            }
        })
        .collect()
}

/// Per-(shape, estimator) moment breakdown, estimates pooled across sample
/// sizes. Shapes appear in first-seen order, the MLE entry before the
/// bootstrap entry.
pub fn estimator_moments(table: &ResultsTable) -> Vec<EstimatorMoments> {
    let mut shapes: Vec<(f64, Vec<f64>, Vec<f64>)> = Vec::new();

    for obs in table.rows() {
        match shapes.iter_mut().find(|(s, _, _)| *s == obs.true_shape) {
            Some((_, mles, boots)) => {
                mles.push(obs.mle);
                boots.push(obs.bootstrap);
            }
            None => shapes.push((obs.true_shape, vec![obs.mle], vec![obs.bootstrap])),
        }
    }

    let mut out = Vec::with_capacity(shapes.len() * 2);
    for (shape, mles, boots) in shapes {
        out.push(EstimatorMoments {
            true_shape: shape,
            estimator: EstimatorKind::Mle,
            observations: mles.len(),
            skewness: skewness(&mles),
            kurtosis: excess_kurtosis(&mles),
        });
        out.push(EstimatorMoments {
            true_shape: shape,
            estimator: EstimatorKind::Bootstrap,
            observations: boots.len(),
            skewness: skewness(&boots),
            kurtosis: excess_kurtosis(&boots),
        });
    }
    out
}

// ─── Moment helpers ──────────────────────────────────────────────────

pub fn mean_f64(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased (n-1) sample variance. Zero for fewer than two values.
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = mean_f64(values);
    values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
}

/// Bias and MSE against the true value, MSE via `bias^2 + variance`.
fn bias_and_mse(estimates: &[f64], truth: f64) -> (f64, f64) {
    let bias = mean_f64(estimates) - truth;
    (bias, bias * bias + sample_variance(estimates))
}

/// Skewness (third standardized moment, population formula).
fn skewness(values: &[f64]) -> f64 {
    standardized_moment(values, 3)
}

/// Excess kurtosis (fourth standardized moment minus 3).
fn excess_kurtosis(values: &[f64]) -> f64 {
    let m4 = standardized_moment(values, 4);
    if m4 == 0.0 {
        0.0
    } else {
        m4 - 3.0
    }
}

fn standardized_moment(values: &[f64], order: i32) -> f64 {
    let n = values.len() as f64;
    if n < 1.0 {
        return 0.0;
    }
    let mean = mean_f64(values);
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    if std < 1e-15 {
        return 0.0;
    }
    values
        .iter()
        .map(|&x| ((x - mean) / std).powi(order))
        .sum::<f64>()
        / n
}
