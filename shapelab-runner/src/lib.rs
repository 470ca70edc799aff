//! Shapelab Runner — study orchestration on top of `shapelab-core`.
//!
//! This crate builds on the estimation engine to provide:
//! - Per-cell bias/MSE/moment aggregation over a finished results table
//! - The per-(shape, estimator) moment breakdown used by distribution plots
//! - A single `run_study` entry point bundling table + summaries + fingerprint
//! - CSV/JSON artifact export

pub mod aggregate;
pub mod export;
pub mod study;

pub use aggregate::{
    aggregate, estimator_moments, CellStats, EstimatorKind, EstimatorMoments, GridCell,
};
pub use export::{write_artifacts, ArtifactPaths, ExportError};
pub use study::{run_study, StudyError, StudyResult};
