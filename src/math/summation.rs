//! Pairwise summation for numerically stable means.
//!
//! ## Purpose
//!
//! This module computes sums and means by pairwise (cascade) summation:
//! adjacent elements are folded into an accumulator buffer, which is then
//! halved repeatedly until a single total remains.
//!
//! ## Design notes
//!
//! * **Error growth**: O(log N) rounding-error growth in floating point,
//!   versus O(N) for a left-to-right fold.
//! * **Exact types**: The fold is branch-free on values, so it is exact
//!   under rational arithmetic. Kahan compensation would instead cancel
//!   itself to algorithmic noise when the working precision is exact.
//! * **Buffer reuse**: The `_into` variants fold through a caller-provided
//!   accumulator slice; the Burg recursion passes its backward-residual
//!   buffer and recycles it afterwards.
//!
//! ## Invariants
//!
//! * The accumulator slice must be at least as long as the data; its prior
//!   contents are overwritten.
//! * After the fold, `acc[0]` holds the total; entries past index zero are
//!   intermediate garbage.
//!
//! ## Non-goals
//!
//! * Compensated (Kahan/Neumaier) summation.
//! * Parallel reduction.

use crate::math::scalar::Scalar;

// ============================================================================
// Pairwise Summation
// ============================================================================

/// Sum `data` by pairwise cascade through the accumulator slice `acc`.
///
/// `acc[..data.len()]` is zeroed and used as fold storage; the remaining
/// entries are untouched. Returns the total, or zero for empty input.
///
/// # Panics
///
/// Panics if `acc` is shorter than `data`.
pub fn pairwise_sum_into<T: Scalar>(data: &[T], acc: &mut [T]) -> T {
    let n = data.len();
    assert!(acc.len() >= n, "accumulator shorter than data");
    if n == 0 {
        return T::zero();
    }

    // First pass halves the problem: acc[i/2] accumulates data[i].
    for v in acc[..n].iter_mut() {
        *v = T::zero();
    }
    for (i, &x) in data.iter().enumerate() {
        acc[i / 2] = acc[i / 2] + x;
    }

    // Fold from the largest power of two not exceeding n down to one.
    let mut width = 1usize;
    let mut t = n;
    loop {
        t /= 2;
        if t == 0 {
            break;
        }
        width *= 2;
    }
    loop {
        width /= 2;
        if width == 0 {
            break;
        }
        for j in 0..width {
            acc[j] = acc[2 * j] + acc[2 * j + 1];
        }
    }

    acc[0]
}

/// Sum `data` by pairwise cascade, allocating the accumulator internally.
pub fn pairwise_sum<T: Scalar>(data: &[T]) -> T {
    let mut acc = vec![T::zero(); data.len()];
    pairwise_sum_into(data, &mut acc)
}

// ============================================================================
// Mean
// ============================================================================

/// Mean of `data` via [`pairwise_sum_into`].
///
/// Returns zero for empty input; the mean of an empty sequence is
/// undefined and callers must not rely on the value.
pub fn pairwise_mean_into<T: Scalar>(data: &[T], acc: &mut [T]) -> T {
    let n = data.len();
    if n == 0 {
        return T::zero();
    }
    pairwise_sum_into(data, acc) / T::from_usize(n).unwrap()
}

/// Mean of `data` via [`pairwise_sum`], allocating internally.
pub fn pairwise_mean<T: Scalar>(data: &[T]) -> T {
    let mut acc = vec![T::zero(); data.len()];
    pairwise_mean_into(data, &mut acc)
}
