//! Fit orchestration and result assembly.
//!
//! ## Purpose
//!
//! This module drives the Burg recursion for a configured fit and
//! assembles its flat output sinks into the structured [`BurgFit`]. The
//! executor owns a workspace and the four sink vectors, so repeated fits
//! recycle every allocation.
//!
//! ## Design notes
//!
//! * **Config-driven**: A plain [`BurgConfig`] value carries the maximum
//!   order and the two flags; the executor itself is stateless between
//!   fits apart from buffer capacity.
//! * **Jagged split**: In hierarchy mode the flat parameter sink holds
//!   `p(p+1)/2` values; assembly peels off `k` coefficients per order.
//!
//! ## Invariants
//!
//! * Sink lengths after a fit: `params` holds `p` values (single model)
//!   or `p(p+1)/2` (hierarchy); `sigma2e` and `gain` hold one value per
//!   emitted model; `autocor` holds `p` values.
//!
//! ## Non-goals
//!
//! * Input validation: the recursion accepts any data, including empty
//!   input, by construction.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::algorithms::burg::burg_method_with;
use crate::engine::output::{ArModel, BurgFit};
use crate::math::scalar::Scalar;
use crate::primitives::buffer::BurgWorkspace;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration of a single Burg fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurgConfig {
    /// Desired maximum model order; clamped to `N - 1` by the data.
    pub max_order: usize,
    /// Subtract the sample mean from the working copy before fitting.
    pub subtract_mean: bool,
    /// Emit every model AR(1)..AR(p) instead of only the final AR(p).
    /// The hierarchy is always computed; the flag controls emission.
    pub hierarchy: bool,
}

impl Default for BurgConfig {
    fn default() -> Self {
        Self {
            max_order: 1,
            subtract_mean: false,
            hierarchy: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Reusable driver for Burg fits.
///
/// Owns the recursion workspace and the output sinks; every fit clears
/// and refills them, so capacity stabilizes at the largest problem seen.
#[derive(Debug, Clone, Default)]
pub struct BurgExecutor<T: Scalar> {
    workspace: BurgWorkspace<T>,
    params: Vec<T>,
    sigma2e: Vec<T>,
    gain: Vec<T>,
    autocor: Vec<T>,
}

impl<T: Scalar> BurgExecutor<T> {
    /// Create an executor with empty buffers.
    pub fn new() -> Self {
        Self {
            workspace: BurgWorkspace::new(),
            params: Vec::new(),
            sigma2e: Vec::new(),
            gain: Vec::new(),
            autocor: Vec::new(),
        }
    }

    /// Run a fit over `data` and assemble the structured result.
    pub fn fit(&mut self, data: &[T], config: &BurgConfig) -> BurgFit<T> {
        self.params.clear();
        self.sigma2e.clear();
        self.gain.clear();
        self.autocor.clear();

        let mut mean = T::zero();
        let mut order = config.max_order;
        let samples = burg_method_with(
            &mut self.workspace,
            data.iter().copied(),
            &mut mean,
            &mut order,
            &mut self.params,
            &mut self.sigma2e,
            &mut self.gain,
            &mut self.autocor,
            config.subtract_mean,
            config.hierarchy,
        );

        let models = self.assemble_models(order, config.hierarchy);

        BurgFit {
            mean,
            order,
            samples,
            models,
            autocor: self.autocor.clone(),
        }
    }

    /// Split the flat parameter sink into per-order models.
    fn assemble_models(&self, order: usize, hierarchy: bool) -> Vec<ArModel<T>> {
        if order == 0 {
            return Vec::new();
        }

        let orders: Vec<usize> = if hierarchy {
            (1..=order).collect()
        } else {
            vec![order]
        };

        let mut models = Vec::with_capacity(orders.len());
        let mut offset = 0;
        for (j, &k) in orders.iter().enumerate() {
            models.push(ArModel {
                order: k,
                params: self.params[offset..offset + k].to_vec(),
                sigma2e: self.sigma2e[j],
                gain: self.gain[j],
            });
            offset += k;
        }
        models
    }
}
