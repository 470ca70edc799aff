//! Shapelab Core — the Weibull shape-estimation engine.
//!
//! This crate contains the heart of the Monte Carlo study:
//! - Unit-mean Weibull variate generation via inverse-transform sampling
//! - The MLE score equation and bracketed root-finding with auto-extension
//! - Bootstrap bias-reflection correction
//! - The sequential simulation driver and append-only results table
//! - One seeded pseudo-random stream shared by the whole run

pub mod bootstrap;
pub mod config;
pub mod driver;
pub mod rng;
pub mod solver;
pub mod special;
pub mod table;
pub mod weibull;

pub use config::{ConfigError, StudyConfig};
pub use driver::{repetitions_for, run, DriverError};
pub use rng::SimStream;
pub use solver::{solve, SolveError};
pub use table::{Observation, ResultsTable};
