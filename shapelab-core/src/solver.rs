//! Bracketed root-finding for the Weibull shape MLE.
//!
//! The maximum-likelihood shape estimate is the root of the score equation
//!
//! ```text
//! score(k) = sum(x_i^k * ln x_i) / sum(x_i^k) - 1/k - mean(ln x_i)
//! ```
//!
//! `score` is undefined at k = 0 and tends to -inf as k -> 0+, while for any
//! sample with spread it tends to `max(ln x) - mean(ln x) > 0` as k -> inf,
//! so a root exists whenever the sample is non-degenerate. The solver
//! tolerates the root lying outside the caller's bracket by extending the
//! bracket geometrically before bisecting.

use thiserror::Error;

/// Initial bracket for the direct MLE on a freshly drawn sample.
pub const DIRECT_BRACKET: (f64, f64) = (0.3, 10.0);

/// Initial bracket for MLE calls on bootstrap resamples.
pub const BOOTSTRAP_BRACKET: (f64, f64) = (1.0, 10.0);

/// Extension policy: halve `lo` and double `hi` at most this many times
/// while hunting for a sign change.
const MAX_EXTENSIONS: usize = 40;

/// Bisection iteration cap; the interval halves each step, so this is far
/// more than enough to reach the tolerance from any extended bracket.
const MAX_BISECTIONS: usize = 200;

/// Absolute width at which the bracket is considered converged.
const TOLERANCE: f64 = 1e-9;

/// Errors from root-finding on the score equation.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("sample is empty or contains non-positive or non-finite values")]
    InvalidSample,
    #[error("degenerate sample: all {n} values equal, the score equation has no root")]
    DegenerateSample { n: usize },
    #[error("no sign change found in [{lo:.3e}, {hi:.3e}] after bracket extension")]
    NoSignChange { lo: f64, hi: f64 },
}

/// Solve the score equation for the shape parameter by bracketed bisection.
///
/// The bracket `(lo, hi)` must satisfy `0 < lo < hi`; if the root lies
/// outside it, the bracket is extended geometrically (`lo/2`, `2*hi`) up to
/// a fixed number of attempts before giving up with
/// [`SolveError::NoSignChange`]. A sample whose values are all identical has
/// a constant score and fails with [`SolveError::DegenerateSample`].
///
/// Pure function: calling it twice with the same inputs returns the same
/// value.
pub fn solve(sample: &[f64], bracket: (f64, f64)) -> Result<f64, SolveError> {
    if sample.is_empty() || sample.iter().any(|&x| !x.is_finite() || x <= 0.0) {
        return Err(SolveError::InvalidSample);
    }

    let ln_x: Vec<f64> = sample.iter().map(|x| x.ln()).collect();
    let n = ln_x.len() as f64;
    let mean_ln = ln_x.iter().sum::<f64>() / n;
    let max_ln = ln_x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_ln = ln_x.iter().copied().fold(f64::INFINITY, f64::min);

    // Zero spread in log-space: the weighted term collapses to mean_ln and
    // score(k) = -1/k, which never crosses zero.
    if min_ln == max_ln {
        return Err(SolveError::DegenerateSample { n: sample.len() });
    }

    // Weights are exp(k * (ln x_i - max ln x)) in (0, 1], so the weighted
    // mean cannot overflow no matter how far the bracket gets extended.
    let score = |k: f64| -> f64 {
        let mut w_sum = 0.0;
        let mut w_ln_sum = 0.0;
        for &lx in &ln_x {
            let w = (k * (lx - max_ln)).exp();
            w_sum += w;
            w_ln_sum += w * lx;
        }
        w_ln_sum / w_sum - 1.0 / k - mean_ln
    };

    let (mut lo, mut hi) = bracket;
    let mut f_lo = score(lo);
    let mut f_hi = score(hi);

    let mut extensions = 0;
    while f_lo.signum() == f_hi.signum() {
        if extensions == MAX_EXTENSIONS {
            return Err(SolveError::NoSignChange { lo, hi });
        }
        lo *= 0.5;
        hi *= 2.0;
        f_lo = score(lo);
        f_hi = score(hi);
        extensions += 1;
    }

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if hi - lo <= TOLERANCE || mid == lo || mid == hi {
            return Ok(mid);
        }
        let f_mid = score(mid);
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Ok(0.5 * (lo + hi))
}
