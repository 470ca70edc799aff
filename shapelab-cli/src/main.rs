//! Shapelab CLI — run the Monte Carlo study and export its artifacts.
//!
//! Commands:
//! - `run` — execute a study from a TOML config file (or the built-in
//!   reference configuration), print the summary tables, and write CSV/JSON
//!   artifacts

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use shapelab_core::StudyConfig;
use shapelab_runner::{run_study, write_artifacts, StudyResult};

#[derive(Parser)]
#[command(
    name = "shapelab",
    about = "Shapelab CLI — Weibull shape-estimator Monte Carlo study"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a study and export its artifacts.
    Run {
        /// Path to a TOML config file; missing fields fall back to the
        /// reference study.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the master seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Override the total observation budget per cell.
        #[arg(long)]
        budget: Option<usize>,

        /// Override the number of bootstrap resamples per repetition.
        #[arg(long)]
        bootstrap: Option<usize>,

        /// Output directory for CSV/JSON artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Print the summary but skip writing artifacts.
        #[arg(long, default_value_t = false)]
        no_export: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            seed,
            budget,
            bootstrap,
            output_dir,
            no_export,
        } => run_cmd(config, seed, budget, bootstrap, output_dir, no_export),
    }
}

fn run_cmd(
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    budget: Option<usize>,
    bootstrap: Option<usize>,
    output_dir: PathBuf,
    no_export: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<StudyConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => StudyConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(budget) = budget {
        config.total_budget = budget;
    }
    if let Some(bootstrap) = bootstrap {
        config.bootstrap_count = bootstrap;
    }

    println!(
        "Running study: {} shapes x {} sample sizes, budget {}, {} bootstrap resamples, seed {}",
        config.shapes.len(),
        config.sample_sizes.len(),
        config.total_budget,
        config.bootstrap_count,
        config.seed
    );

    let result = run_study(&config).context("study failed")?;
    print_summary(&result);

    if !no_export {
        let paths = write_artifacts(&output_dir, &result)
            .with_context(|| format!("writing artifacts to {}", output_dir.display()))?;
        println!("\nArtifacts:");
        println!("  {}", paths.observations.display());
        println!("  {}", paths.cell_stats.display());
        println!("  {}", paths.estimator_moments.display());
        println!("  {}", paths.study_json.display());
    }

    Ok(())
}

fn print_summary(result: &StudyResult) {
    println!("\nFingerprint: {}", result.fingerprint);
    println!("Observations: {}", result.table.len());

    println!(
        "\n{:>6} {:>6} {:>6} {:>12} {:>12} {:>12} {:>12}",
        "k", "n", "reps", "bias(ML)", "bias(boot)", "MSE(ML)", "MSE(boot)"
    );
    for cell in &result.cells {
        println!(
            "{:>6.2} {:>6} {:>6} {:>12.5} {:>12.5} {:>12.5} {:>12.5}",
            cell.true_shape,
            cell.sample_size,
            cell.observations,
            cell.bias_mle,
            cell.bias_bootstrap,
            cell.mse_mle,
            cell.mse_bootstrap
        );
    }

    println!(
        "\n{:>6} {:>14} {:>12} {:>12}",
        "k", "estimator", "skewness", "kurtosis"
    );
    for entry in &result.moments {
        println!(
            "{:>6.2} {:>14} {:>12.4} {:>12.4}",
            entry.true_shape, entry.estimator, entry.skewness, entry.kurtosis
        );
    }
}
