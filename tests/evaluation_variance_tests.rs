//! Tests for the finite-sample empirical variance estimates.
//!
//! These tests pin down the per-method formulae:
//! - The order-zero mean-handling split
//! - The method-specific denominators for positive orders
//! - The unfactored least-squares denominators (sign behavior included)
//! - Generic evaluation across precisions
//!
//! ## Test Organization
//!
//! 1. **Order Zero** - mean subtracted versus retained
//! 2. **Positive Orders** - per-method table values
//! 3. **Precision** - f32 and exact rational evaluation

use approx::assert_relative_eq;
use num_rational::Ratio;

use burg_rs::prelude::*;

// ============================================================================
// Order Zero
// ============================================================================

/// With the mean subtracted, order zero costs one estimated parameter:
/// 1/N for every method.
#[test]
fn test_order_zero_mean_subtracted() {
    for method in [
        EstimationMethod::YuleWalker,
        EstimationMethod::Burg,
        EstimationMethod::LeastSquaresFB,
        EstimationMethod::LeastSquaresF,
    ] {
        let v: f64 = method.empirical_variance(MeanHandling::Subtracted, 100, 0);
        assert_relative_eq!(v, 0.01);
    }
}

/// With the mean retained, order zero costs nothing.
#[test]
fn test_order_zero_mean_retained() {
    for method in [
        EstimationMethod::YuleWalker,
        EstimationMethod::Burg,
        EstimationMethod::LeastSquaresFB,
        EstimationMethod::LeastSquaresF,
    ] {
        let v: f64 = method.empirical_variance(MeanHandling::Retained, 100, 0);
        assert_eq!(v, 0.0);
    }
}

// ============================================================================
// Positive Orders
// ============================================================================

/// Yule-Walker: (N - i) / (N (N + 2)).
#[test]
fn test_yule_walker_table() {
    let v: f64 = EstimationMethod::YuleWalker.empirical_variance(MeanHandling::Subtracted, 10, 3);
    assert_relative_eq!(v, 7.0 / 120.0);

    // Mean handling is irrelevant for positive orders.
    let w: f64 = EstimationMethod::YuleWalker.empirical_variance(MeanHandling::Retained, 10, 3);
    assert_eq!(v, w);
}

/// Burg: 1 / (N + 1 - i); the table value from N = 100, i = 10 is 1/91.
#[test]
fn test_burg_table() {
    let v: f64 = EstimationMethod::Burg.empirical_variance(MeanHandling::Subtracted, 100, 10);
    assert_relative_eq!(v, 1.0 / 91.0);

    // At full order the denominator collapses to one.
    let v: f64 = EstimationMethod::Burg.empirical_variance(MeanHandling::Subtracted, 12, 12);
    assert_relative_eq!(v, 1.0);
}

/// Forward-backward least squares: 1 / (N + 3/2 - 3i/2).
#[test]
fn test_least_squares_fb_table() {
    let v: f64 =
        EstimationMethod::LeastSquaresFB.empirical_variance(MeanHandling::Subtracted, 10, 4);
    assert_relative_eq!(v, 1.0 / 5.5);
}

/// Forward least squares: 1 / (N + 2 - 2i); the table value from
/// N = 100, i = 10 is 1/82.
#[test]
fn test_least_squares_f_table() {
    let v: f64 =
        EstimationMethod::LeastSquaresF.empirical_variance(MeanHandling::Subtracted, 100, 10);
    assert_relative_eq!(v, 1.0 / 82.0);
}

/// The least-squares denominators are evaluated term by term in the
/// working precision, so orders past the midpoint go negative instead of
/// wrapping the way a factored unsigned expression would.
#[test]
fn test_unfactored_denominators_go_negative() {
    let v: f64 = EstimationMethod::LeastSquaresF.empirical_variance(MeanHandling::Subtracted, 10, 7);
    assert_relative_eq!(v, -0.5);

    let v: f64 =
        EstimationMethod::LeastSquaresFB.empirical_variance(MeanHandling::Subtracted, 10, 9);
    assert_relative_eq!(v, -0.5);
}

// ============================================================================
// Precision
// ============================================================================

/// The same table evaluates under f32.
#[test]
fn test_f32_evaluation() {
    let v: f32 = EstimationMethod::Burg.empirical_variance(MeanHandling::Subtracted, 100, 10);
    assert_relative_eq!(v, 1.0_f32 / 91.0);
}

/// Exact rational evaluation, including the fractional LSFB denominator.
#[test]
fn test_exact_rational_evaluation() {
    let v: Ratio<i64> =
        EstimationMethod::YuleWalker.empirical_variance(MeanHandling::Subtracted, 10, 3);
    assert_eq!(v, Ratio::new(7, 120));

    let v: Ratio<i64> =
        EstimationMethod::LeastSquaresFB.empirical_variance(MeanHandling::Subtracted, 10, 4);
    assert_eq!(v, Ratio::new(2, 11));

    let v: Ratio<i64> = EstimationMethod::Burg.empirical_variance(MeanHandling::Subtracted, 100, 10);
    assert_eq!(v, Ratio::new(1, 91));
}
