#![cfg(feature = "dev")]
//! Tests for pairwise (cascade) summation.
//!
//! These tests verify the summation used for the sample mean:
//! - Correct totals for even, odd, and degenerate lengths
//! - Accumulator-slice reuse
//! - Floating-point error behavior versus a naive fold
//! - Bit-exactness under rational arithmetic
//!
//! ## Test Organization
//!
//! 1. **Basic Computation** - totals and means for small inputs
//! 2. **Edge Cases** - empty, single, oversized accumulators
//! 3. **Numerical Properties** - stability and exactness

use approx::assert_relative_eq;
use num_rational::Ratio;

use burg_rs::internals::math::summation::{
    pairwise_mean, pairwise_mean_into, pairwise_sum, pairwise_sum_into,
};

// ============================================================================
// Basic Computation
// ============================================================================

/// Sum of a small even-length sequence.
#[test]
fn test_sum_even_length() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(pairwise_sum(&data), 10.0);
}

/// Sum of a small odd-length sequence.
#[test]
fn test_sum_odd_length() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(pairwise_sum(&data), 15.0);
}

/// Sums agree with the closed form over a range of lengths, including
/// lengths straddling powers of two.
#[test]
fn test_sum_lengths_around_powers_of_two() {
    for n in [1usize, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 100] {
        let data: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        let expected = (n * (n + 1) / 2) as f64;
        assert_relative_eq!(pairwise_sum(&data), expected);
    }
}

/// Mean of a small sequence.
#[test]
fn test_mean_basic() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(pairwise_mean(&data), 2.5);
}

/// Mean with negative values.
#[test]
fn test_mean_mixed_signs() {
    let data = [-3.0, -1.0, 1.0, 3.0];
    assert_relative_eq!(pairwise_mean(&data), 0.0);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Empty input sums to zero and its mean is the unspecified placeholder.
#[test]
fn test_empty_input() {
    let data: [f64; 0] = [];
    assert_eq!(pairwise_sum(&data), 0.0);
    assert_eq!(pairwise_mean(&data), 0.0);
}

/// A single element is its own sum and mean.
#[test]
fn test_single_element() {
    let data = [42.0];
    assert_relative_eq!(pairwise_sum(&data), 42.0);
    assert_relative_eq!(pairwise_mean(&data), 42.0);
}

/// The accumulator may be longer than the data; trailing entries are
/// left untouched.
#[test]
fn test_oversized_accumulator() {
    let data = [1.0, 2.0, 3.0];
    let mut acc = [7.0; 8];
    let total = pairwise_sum_into(&data, &mut acc);
    assert_relative_eq!(total, 6.0);
    assert_eq!(acc[3..], [7.0; 5]);
}

/// The `_into` variants reuse the caller's buffer across calls.
#[test]
fn test_accumulator_reuse() {
    let mut acc = vec![0.0; 16];
    let a = pairwise_mean_into(&[2.0, 4.0], &mut acc);
    let b = pairwise_mean_into(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut acc);
    assert_relative_eq!(a, 3.0);
    assert_relative_eq!(b, 3.0);
}

// ============================================================================
// Numerical Properties
// ============================================================================

/// Pairwise error stays near the ulp level where a naive fold accumulates
/// linearly: summing many copies of an inexactly representable value.
#[test]
fn test_mean_of_many_inexact_values() {
    let n = 1 << 17;
    let data = vec![0.1_f64; n];
    let mean = pairwise_mean(&data);
    assert_relative_eq!(mean, 0.1, epsilon = 1e-14);
}

/// Pairwise total matches an exact integer-valued sum at large scale.
#[test]
fn test_large_integer_valued_sum() {
    let n = 10_000usize;
    let data: Vec<f64> = (0..n).map(|i| (i % 7) as f64).collect();
    let expected: f64 = data.iter().map(|&v| v as i64).sum::<i64>() as f64;
    assert_relative_eq!(pairwise_sum(&data), expected);
}

/// Under rational arithmetic the cascade is bit-exact even with huge
/// cancellation: the magnitudes that defeat double precision cancel to
/// exactly one half here.
#[test]
fn test_exact_rational_cancellation() {
    let big = 10_000_000_000_000_000_i64;
    let data = [
        Ratio::from_integer(big),
        Ratio::from_integer(1),
        Ratio::from_integer(-big),
        Ratio::from_integer(1),
    ];
    assert_eq!(pairwise_sum(&data), Ratio::from_integer(2));
    assert_eq!(pairwise_mean(&data), Ratio::new(1, 2));
}

/// Rational means are exact for non-integer results.
#[test]
fn test_exact_rational_mean() {
    let data: Vec<Ratio<i64>> = (1..=7).map(Ratio::from_integer).collect();
    assert_eq!(pairwise_mean(&data), Ratio::from_integer(4));

    let data: Vec<Ratio<i64>> = (1..=6).map(Ratio::from_integer).collect();
    assert_eq!(pairwise_mean(&data), Ratio::new(7, 2));
}
