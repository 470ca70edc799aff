//! Simulation driver: grid traversal and the per-repetition pipeline.
//!
//! The run is strictly sequential and consumes one seeded stream in a fixed
//! order — shape outer, size middle, repetition inner; within a repetition,
//! base-sample uniforms first, then the bootstrap resamples. That traversal
//! order is load-bearing: it is the only thing that makes the output
//! bit-reproducible under a fixed seed. Any estimation failure aborts the
//! whole run; a batch study with silently missing repetitions would corrupt
//! the downstream bias/MSE statistics far more dangerously than an explicit
//! abort.

use thiserror::Error;

use crate::bootstrap;
use crate::config::{ConfigError, StudyConfig};
use crate::rng::SimStream;
use crate::solver::{self, SolveError};
use crate::table::{Observation, ResultsTable};
use crate::weibull;

/// Repetitions allotted to a cell: `round(total_budget / n)`.
///
/// Half-way cases round away from zero, so a budget of 10 over n = 4 yields
/// 3 repetitions.
pub fn repetitions_for(total_budget: usize, sample_size: usize) -> usize {
    (total_budget as f64 / sample_size as f64).round() as usize
}

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid study configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(
        "estimation failed at shape {true_shape}, n={sample_size}, \
         repetition {repetition} (bracket {bracket:?}): {source}"
    )]
    Estimation {
        true_shape: f64,
        sample_size: usize,
        repetition: usize,
        bracket: (f64, f64),
        #[source]
        source: SolveError,
    },
}

/// Run the full study grid and collect every repetition into one table.
///
/// For each repetition: draw `n` uniforms from the shared stream, generate
/// a unit-mean Weibull sample, solve for the direct MLE with the direct
/// bracket, then bootstrap-correct with exactly `bootstrap_count` resamples
/// and the bootstrap bracket. Errors propagate with the failing
/// (shape, n, repetition) triple attached; no retry, no skip-and-continue.
pub fn run(config: &StudyConfig) -> Result<ResultsTable, DriverError> {
    config.validate()?;

    let mut stream = SimStream::seed_from(config.seed);
    let mut table = ResultsTable::new();

    for &shape in &config.shapes {
        for &n in &config.sample_sizes {
            let reps = repetitions_for(config.total_budget, n);
            for rep in 0..reps {
                let uniforms = stream.open_unit_vec(n);
                let sample = weibull::generate(shape, &uniforms);

                let mle = solver::solve(&sample, config.direct_bracket).map_err(|source| {
                    DriverError::Estimation {
                        true_shape: shape,
                        sample_size: n,
                        repetition: rep,
                        bracket: config.direct_bracket,
                        source,
                    }
                })?;

                let corrected = bootstrap::correct(
                    &sample,
                    mle,
                    config.bootstrap_count,
                    config.bootstrap_bracket,
                    &mut stream,
                )
                .map_err(|source| DriverError::Estimation {
                    true_shape: shape,
                    sample_size: n,
                    repetition: rep,
                    bracket: config.bootstrap_bracket,
                    source,
                })?;

                table.push(Observation {
                    sample_size: n,
                    true_shape: shape,
                    mle,
                    bootstrap: corrected,
                });
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetitions_match_the_reference_budget() {
        assert_eq!(repetitions_for(30_000, 10), 3000);
        assert_eq!(repetitions_for(30_000, 100), 300);
        assert_eq!(repetitions_for(30_000, 500), 60);
    }

    #[test]
    fn repetitions_round_away_from_zero_at_half() {
        assert_eq!(repetitions_for(10, 4), 3); // 2.5 rounds up
        assert_eq!(repetitions_for(100, 7), 14); // 14.28 rounds down
        assert_eq!(repetitions_for(1, 3), 0); // 0.33 rounds to zero
    }

    #[test]
    fn invalid_config_fails_before_any_work() {
        let config = StudyConfig {
            shapes: vec![],
            ..StudyConfig::default()
        };
        assert!(matches!(run(&config), Err(DriverError::Config(_))));
    }
}
