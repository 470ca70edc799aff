//! End-to-end study tests: statistical behavior of the two estimators and
//! artifact consistency on a scaled-down grid.

use shapelab_core::StudyConfig;
use shapelab_runner::{run_study, write_artifacts};

#[test]
fn mse_shrinks_as_samples_grow() {
    // Scaled-down version of the reference grid: the consistency of the MLE
    // shows up as a falling MSE from n=10 to n=100.
    let config = StudyConfig {
        shapes: vec![2.0],
        sample_sizes: vec![10, 100],
        total_budget: 2_000,
        bootstrap_count: 20,
        seed: 38,
        ..StudyConfig::default()
    };
    let result = run_study(&config).unwrap();
    assert_eq!(result.cells.len(), 2);

    let small = &result.cells[0];
    let large = &result.cells[1];
    assert_eq!(small.sample_size, 10);
    assert_eq!(large.sample_size, 100);

    assert!(
        large.mse_mle < small.mse_mle,
        "MLE MSE did not shrink: n=10 {} vs n=100 {}",
        small.mse_mle,
        large.mse_mle
    );
    assert!(
        large.mse_bootstrap < small.mse_bootstrap,
        "bootstrap MSE did not shrink: n=10 {} vs n=100 {}",
        small.mse_bootstrap,
        large.mse_bootstrap
    );
}

#[test]
fn mle_bias_is_positive_at_small_n() {
    // The shape MLE overestimates on small samples; the bootstrap
    // correction exists to pull that bias down.
    let config = StudyConfig {
        shapes: vec![2.0],
        sample_sizes: vec![10],
        total_budget: 2_000,
        bootstrap_count: 30,
        seed: 38,
        ..StudyConfig::default()
    };
    let result = run_study(&config).unwrap();
    let cell = &result.cells[0];

    assert!(cell.bias_mle > 0.0, "expected upward bias, got {}", cell.bias_mle);
    assert!(
        cell.bias_bootstrap.abs() < cell.bias_mle.abs(),
        "correction did not reduce bias: ML {} vs bootstrap {}",
        cell.bias_mle,
        cell.bias_bootstrap
    );
}

#[test]
fn mse_decomposition_holds_on_a_real_study() {
    let config = StudyConfig {
        shapes: vec![1.0],
        sample_sizes: vec![20],
        total_budget: 400,
        bootstrap_count: 10,
        seed: 7,
        ..StudyConfig::default()
    };
    let result = run_study(&config).unwrap();
    let cell = &result.cells[0];

    let mles: Vec<f64> = result.table.rows().iter().map(|o| o.mle).collect();
    let expected =
        cell.bias_mle * cell.bias_mle + shapelab_runner::aggregate::sample_variance(&mles);
    assert!((cell.mse_mle - expected).abs() < 1e-12);
}

#[test]
fn artifacts_reflect_the_study_that_produced_them() {
    let config = StudyConfig {
        shapes: vec![0.5, 4.0],
        sample_sizes: vec![10],
        total_budget: 50,
        bootstrap_count: 5,
        seed: 38,
        ..StudyConfig::default()
    };
    let result = run_study(&config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path(), &result).unwrap();

    let cell_text = std::fs::read_to_string(&paths.cell_stats).unwrap();
    // Header + one line per (shape, n) cell.
    assert_eq!(cell_text.lines().count(), 1 + result.cells.len());

    let moment_text = std::fs::read_to_string(&paths.estimator_moments).unwrap();
    assert_eq!(moment_text.lines().count(), 1 + result.moments.len());
    assert!(moment_text.contains("ML_bootstrap"));
}
