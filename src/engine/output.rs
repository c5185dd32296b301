//! Structured results of a Burg fit.
//!
//! ## Purpose
//!
//! This module defines the result types assembled by the executor: the
//! per-order models and the fit-wide quantities (mean, effective order,
//! sample count, autocorrelations).
//!
//! ## Design notes
//!
//! * **Jagged hierarchy**: In hierarchy mode the fit holds one model per
//!   order `1..=p`; model `k` carries exactly `k` coefficients, so the
//!   concatenated parameters form the `p(p+1)/2` lower-triangular block.
//! * **Single model otherwise**: Without hierarchy the fit holds just the
//!   final AR(p) model.
//! * **Display**: A plain-text summary table, rendered through `core::fmt`
//!   so it works without `std`.
//!
//! ## Invariants
//!
//! * `models[j].order` is strictly increasing and the last entry has
//!   `order == self.order` whenever `order > 0`.
//! * `autocor.len() == order` regardless of hierarchy mode.
//!
//! ## Non-goals
//!
//! * Serialization; callers wanting persistence consume the public fields.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::math::scalar::Scalar;

// ============================================================================
// Per-Order Model
// ============================================================================

/// A single autoregressive model of fixed order.
///
/// Sign convention: the model predicts
/// `x_n = -params[0] x_{n-1} - ... - params[k-1] x_{n-k} + e_n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArModel<T: Scalar> {
    /// Model order `k`.
    pub order: usize,
    /// Coefficients `a_1..a_k`.
    pub params: Vec<T>,
    /// Innovation variance (mean squared one-step prediction error).
    pub sigma2e: T,
    /// Gain `sigma2x / sigma2e`.
    pub gain: T,
}

impl<T: Scalar> ArModel<T> {
    /// The reflection coefficient of this order, i.e. the last parameter.
    pub fn reflection(&self) -> Option<T> {
        self.params.last().copied()
    }
}

// ============================================================================
// Fit Result
// ============================================================================

/// Result of a Burg fit: one or more models plus the fit-wide quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct BurgFit<T: Scalar> {
    /// Sample mean, computed by pairwise summation. Unspecified for an
    /// empty input.
    pub mean: T,
    /// Effective maximum order after clamping by the sample count.
    pub order: usize,
    /// Number of input values consumed.
    pub samples: usize,
    /// Fitted models: AR(1)..AR(p) in hierarchy mode, the final AR(p)
    /// alone otherwise. Empty when the effective order is zero.
    pub models: Vec<ArModel<T>>,
    /// Lag `1..=order` autocorrelations. The lag-zero value is
    /// identically one and not stored. Autocovariances follow by
    /// multiplying with `gain * sigma2e`.
    pub autocor: Vec<T>,
}

impl<T: Scalar> BurgFit<T> {
    /// The final (highest-order) model, if any order was fit.
    pub fn model(&self) -> Option<&ArModel<T>> {
        self.models.last()
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for BurgFit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.samples)?;
        writeln!(f, "  Mean: {}", self.mean)?;
        writeln!(f, "  Max order: {}", self.order)?;
        if self.models.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Models:")?;
        writeln!(f, "  {:>5}  {:>14}  {:>14}", "Order", "Sigma2e", "Gain")?;
        for m in &self.models {
            writeln!(f, "  {:>5}  {:>14}  {:>14}", m.order, m.sigma2e, m.gain)?;
        }

        writeln!(f)?;
        writeln!(f, "Autocorrelations (lag 1..={}):", self.order)?;
        for (lag, rho) in self.autocor.iter().enumerate() {
            writeln!(f, "  {:>5}  {:>14}", lag + 1, rho)?;
        }
        Ok(())
    }
}
