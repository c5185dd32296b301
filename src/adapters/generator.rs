//! Stateful generator over a method's empirical variance sequence.
//!
//! ## Purpose
//!
//! This module provides a call-based cursor over the per-order empirical
//! variance estimates: each invocation returns the estimate for the
//! current order and advances to the next, starting from order zero.
//!
//! ## Design notes
//!
//! * **Minimal state**: Only the sample count and the order cursor; the
//!   method and mean-handling tags select the formula at each call.
//! * **Caller-typed values**: The working precision is chosen per call, so
//!   one generator can feed accumulators of different precisions.
//!
//! ## Invariants
//!
//! * The first call returns the order-zero estimate.
//! * Orders past the sample count violate the variance preconditions and
//!   trip debug assertions; release builds compute garbage.
//!
//! ## Non-goals
//!
//! * Bounded iteration: use
//!   [`EmpiricalVarianceSequence`](crate::adapters::sequence::EmpiricalVarianceSequence)
//!   to compose with iterator algorithms.

use crate::evaluation::variance::{EstimationMethod, MeanHandling};
use crate::math::scalar::Scalar;

// ============================================================================
// Generator
// ============================================================================

/// Call-based cursor over empirical variance estimates for orders
/// `0, 1, 2, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmpiricalVarianceGenerator {
    method: EstimationMethod,
    mean: MeanHandling,
    n: usize,
    i: usize,
}

impl EmpiricalVarianceGenerator {
    /// Create a generator for `n` observations, positioned at order zero.
    pub fn new(method: EstimationMethod, mean: MeanHandling, n: usize) -> Self {
        debug_assert!(n >= 1);
        Self {
            method,
            mean,
            n,
            i: 0,
        }
    }

    /// The order the next call will evaluate.
    pub fn order(&self) -> usize {
        self.i
    }

    /// Return the estimate for the current order and advance the cursor.
    pub fn next_value<T: Scalar>(&mut self) -> T {
        let v = self.method.empirical_variance(self.mean, self.n, self.i);
        self.i += 1;
        v
    }
}
