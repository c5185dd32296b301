//! End-to-end tests through the public builder API.
//!
//! These tests exercise the fluent `Burg` builder, the structured fit
//! result, the executor, and the round trip between the estimator and the
//! Toeplitz solver:
//! - Builder defaults, flags, and duplicate-parameter rejection
//! - Structured hierarchy results and their Display rendering
//! - Recovery of AR(1) dynamics through the builder
//! - Symmetric Zohar solves of the Yule-Walker system reproducing the
//!   fitted coefficients
//! - Exact-precision fits over rational data

use approx::assert_abs_diff_eq;
use num_rational::Ratio;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

use burg_rs::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Generate an AR(1) series `x_n = phi * x_{n-1} + e_n` with unit-variance
/// Gaussian innovations and a reproducible seed.
fn ar1_series(n: usize, phi: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut x = Vec::with_capacity(n);
    let mut prev = 0.0;
    for _ in 0..n {
        let v = phi * prev + noise.sample(&mut rng);
        x.push(v);
        prev = v;
    }
    x
}

// ============================================================================
// Builder Behavior
// ============================================================================

/// The default configuration fits a single AR(1) model.
#[test]
fn test_builder_defaults() {
    let x = [1.0, 2.0, 1.5, 2.5, 1.0, 3.0];
    let fit = Burg::new().fit(&x).unwrap();
    assert_eq!(fit.order, 1);
    assert_eq!(fit.samples, 6);
    assert_eq!(fit.models.len(), 1);
    assert_eq!(fit.model().unwrap().params.len(), 1);
    assert_eq!(fit.autocor.len(), 1);
}

/// Setting a parameter twice is rejected at fit time.
#[test]
fn test_duplicate_parameter_rejected() {
    let x = [1.0, 2.0, 3.0];
    let err = Burg::new().max_order(2).max_order(3).fit(&x).unwrap_err();
    assert_eq!(
        err,
        BurgError::DuplicateParameter {
            parameter: "max_order"
        }
    );
    assert_eq!(
        format!("{}", err),
        "Parameter 'max_order' was set multiple times. Each parameter can only be configured once."
    );
}

/// Hierarchy mode yields one model per order with the jagged coefficient
/// layout, each ending in its reflection coefficient.
#[test]
fn test_hierarchy_structure() {
    let x = ar1_series(256, 0.5, 5);
    let fit = Burg::new()
        .max_order(4)
        .subtract_mean()
        .hierarchy()
        .fit(&x)
        .unwrap();

    assert_eq!(fit.order, 4);
    assert_eq!(fit.models.len(), 4);
    for (k, model) in fit.models.iter().enumerate() {
        assert_eq!(model.order, k + 1);
        assert_eq!(model.params.len(), k + 1);
        assert_eq!(model.reflection(), model.params.last().copied());
    }
    assert_eq!(fit.autocor.len(), 4);
}

/// An empty input produces an empty fit without error.
#[test]
fn test_empty_input_fit() {
    let x: [f64; 0] = [];
    let fit = Burg::new().max_order(5).fit(&x).unwrap();
    assert_eq!(fit.samples, 0);
    assert_eq!(fit.order, 0);
    assert!(fit.models.is_empty());
    assert!(fit.autocor.is_empty());
}

/// A constant series fits without panicking and reports its value as the
/// mean.
#[test]
fn test_constant_series_fit() {
    let x = [5.0, 5.0, 5.0, 5.0, 5.0];
    let fit = Burg::new().max_order(2).subtract_mean().fit(&x).unwrap();
    assert_eq!(fit.mean, 5.0);
    assert_eq!(fit.order, 2);
}

/// The Display rendering includes the summary and per-model rows.
#[test]
fn test_fit_display() {
    let x = ar1_series(64, 0.4, 13);
    let fit = Burg::new()
        .max_order(2)
        .subtract_mean()
        .hierarchy()
        .fit(&x)
        .unwrap();
    let rendered = format!("{}", fit);
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("Samples: 64"));
    assert!(rendered.contains("Models:"));
    assert!(rendered.contains("Autocorrelations (lag 1..=2):"));
}

/// The executor can be reused across fits and matches the builder.
#[test]
fn test_executor_reuse() {
    let first = ar1_series(128, 0.3, 17);
    let second = ar1_series(200, 0.8, 18);

    let config = BurgConfig {
        max_order: 3,
        subtract_mean: true,
        hierarchy: true,
    };
    let mut executor = BurgExecutor::new();
    for data in [&first, &second] {
        let from_executor = executor.fit(data, &config);
        let from_builder = Burg::new()
            .max_order(3)
            .subtract_mean()
            .hierarchy()
            .fit(data)
            .unwrap();
        assert_eq!(from_executor, from_builder);
    }
}

// ============================================================================
// Statistical Recovery
// ============================================================================

/// AR(1) truth through the builder: lag-one coefficient near -0.7 under
/// the crate's sign convention, innovation variance near one.
#[test]
fn test_ar1_recovery_through_builder() {
    let x = ar1_series(1024, 0.7, 42);
    let fit = Burg::new()
        .max_order(10)
        .subtract_mean()
        .hierarchy()
        .fit(&x)
        .unwrap();

    let ar1 = &fit.models[0];
    assert_abs_diff_eq!(ar1.params[0], -0.7, epsilon = 0.1);

    let final_model = fit.model().unwrap();
    assert_abs_diff_eq!(final_model.sigma2e, 1.0, epsilon = 0.2);
    assert!(final_model.gain > 1.0);
    assert_abs_diff_eq!(fit.autocor[0], 0.7, epsilon = 0.12);
}

// ============================================================================
// Round Trip
// ============================================================================

/// The fitted coefficients satisfy the Yule-Walker system built from the
/// emitted autocorrelations: a symmetric Zohar solve of that system
/// reproduces the final model.
#[test]
fn test_yule_walker_round_trip() {
    let x = ar1_series(1024, 0.7, 42);
    let fit = Burg::new().max_order(6).subtract_mean().fit(&x).unwrap();

    let k = fit.order;
    let rho = &fit.autocor;
    assert_eq!(rho.len(), k);

    // Order-k Yule-Walker system: Toeplitz(1, rho_1..rho_{k-1}) * a = -rho.
    let coeffs = &rho[..k - 1];
    let rhs: Vec<f64> = rho.iter().map(|&v| -v).collect();
    let mut solved = vec![0.0; k];
    zohar_symmetric_solve(coeffs, &rhs, &mut solved).unwrap();

    let params = &fit.model().unwrap().params;
    for (&got, &want) in solved.iter().zip(params.iter()) {
        assert_abs_diff_eq!(got, want, epsilon = 1e-8);
    }
}

// ============================================================================
// Exact Precision
// ============================================================================

/// A hand-computed rational fit is reproduced bit for bit: the recursion
/// is exact when the working precision is exact.
#[test]
fn test_exact_rational_fit() {
    let x: Vec<Ratio<i64>> = [1, 2, 1, 3].map(Ratio::from_integer).to_vec();
    let fit = Burg::new().max_order(1).subtract_mean().fit(&x).unwrap();

    assert_eq!(fit.mean, Ratio::new(7, 4));
    assert_eq!(fit.order, 1);

    let model = fit.model().unwrap();
    assert_eq!(model.params, vec![Ratio::new(7, 9)]);
    assert_eq!(model.sigma2e, Ratio::new(22, 81));
    assert_eq!(model.gain, Ratio::new(81, 32));
    assert_eq!(fit.autocor, vec![Ratio::new(-7, 9)]);
}
