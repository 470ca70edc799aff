//! CSV and JSON artifact export for a finished study.
//!
//! Artifacts written into the output directory:
//! - `observations.csv` — the raw results table, columns `n,k,ML,ML_bootstrap`
//! - `cell_stats.csv` — per-(shape, n) bias/MSE/moment summary
//! - `estimator_moments.csv` — per-(shape, estimator) skewness/kurtosis
//! - `study.json` — config, fingerprint, and both summaries (not the raw table)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::aggregate::{CellStats, EstimatorMoments};
use crate::study::StudyResult;
use shapelab_core::StudyConfig;

/// Errors from artifact export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths of the artifacts one export produced.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub observations: PathBuf,
    pub cell_stats: PathBuf,
    pub estimator_moments: PathBuf,
    pub study_json: PathBuf,
}

/// Manifest written alongside the CSVs; the raw table stays CSV-only to
/// keep the JSON small.
#[derive(Serialize)]
struct StudyManifest<'a> {
    fingerprint: &'a str,
    config: &'a StudyConfig,
    cells: &'a [CellStats],
    moments: &'a [EstimatorMoments],
}

/// Write all artifacts for a finished study, creating the directory.
pub fn write_artifacts(
    output_dir: impl AsRef<Path>,
    result: &StudyResult,
) -> Result<ArtifactPaths, ExportError> {
    let dir = output_dir.as_ref();
    fs::create_dir_all(dir)?;

    let observations = dir.join("observations.csv");
    let mut writer = csv::Writer::from_path(&observations)?;
    for row in result.table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let cell_stats = dir.join("cell_stats.csv");
    let mut writer = csv::Writer::from_path(&cell_stats)?;
    for cell in &result.cells {
        writer.serialize(cell)?;
    }
    writer.flush()?;

    let estimator_moments = dir.join("estimator_moments.csv");
    let mut writer = csv::Writer::from_path(&estimator_moments)?;
    for entry in &result.moments {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    let study_json = dir.join("study.json");
    let manifest = StudyManifest {
        fingerprint: &result.fingerprint,
        config: &result.config,
        cells: &result.cells,
        moments: &result.moments,
    };
    fs::write(&study_json, serde_json::to_string_pretty(&manifest)?)?;

    Ok(ArtifactPaths {
        observations,
        cell_stats,
        estimator_moments,
        study_json,
    })
}
