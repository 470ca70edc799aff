//! Study orchestration — validate, simulate, aggregate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shapelab_core::config::ConfigError;
use shapelab_core::driver::DriverError;
use shapelab_core::{driver, ResultsTable, StudyConfig};

use crate::aggregate::{self, CellStats, EstimatorMoments};

/// Errors from running a study.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("simulation error: {0}")]
    Simulation(#[from] DriverError),
}

/// Everything a finished study produces: the raw table, both derived
/// summaries, and the config + fingerprint that reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyResult {
    pub fingerprint: String,
    pub config: StudyConfig,
    pub table: ResultsTable,
    pub cells: Vec<CellStats>,
    pub moments: Vec<EstimatorMoments>,
}

/// Run the configured study end to end.
///
/// Validation happens before any simulation work; the driver re-checks, but
/// failing here keeps config errors out of the simulation error path.
pub fn run_study(config: &StudyConfig) -> Result<StudyResult, StudyError> {
    config.validate()?;

    let table = driver::run(config)?;
    let cells = aggregate::aggregate(&table);
    let moments = aggregate::estimator_moments(&table);

    Ok(StudyResult {
        fingerprint: config.fingerprint(),
        config: config.clone(),
        table,
        cells,
        moments,
    })
}
