//! High-level API for autoregressive estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a Burg fit, plus the public re-exports that the
//! crate prelude draws from.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults; only the
//!   maximum order usually needs setting.
//! * **Validated**: Parameters set more than once are rejected at fit
//!   time with [`BurgError::DuplicateParameter`].
//! * **Precision at the call site**: The builder carries no working-
//!   precision values, so a single configuration fits `f32`, `f64`, or
//!   exact-rational data alike.
//!
//! ### Configuration flow
//!
//! 1. Create a [`BurgBuilder`] via `Burg::new()`.
//! 2. Chain configuration methods (`.max_order()`, `.subtract_mean()`,
//!    `.hierarchy()`).
//! 3. Call `.fit(&data)` to run the estimation.

// Publicly re-exported types
pub use crate::adapters::generator::EmpiricalVarianceGenerator;
pub use crate::adapters::sequence::EmpiricalVarianceSequence;
pub use crate::algorithms::burg::{burg_method, burg_method_with};
pub use crate::algorithms::toeplitz::{
    zohar_linear_solve, zohar_linear_solve_in_place, zohar_linear_solve_with,
    zohar_symmetric_solve, zohar_symmetric_solve_in_place,
};
pub use crate::engine::executor::{BurgConfig, BurgExecutor};
pub use crate::engine::output::{ArModel, BurgFit};
pub use crate::evaluation::variance::{EstimationMethod, MeanHandling};
pub use crate::math::scalar::Scalar;
pub use crate::primitives::buffer::{BurgWorkspace, ZoharWorkspace};
pub use crate::primitives::errors::BurgError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring and running a Burg fit.
#[derive(Debug, Clone, Default)]
pub struct BurgBuilder {
    /// Desired maximum model order.
    max_order: Option<usize>,

    /// Subtract the sample mean before fitting.
    subtract_mean: Option<bool>,

    /// Emit the full AR(1)..AR(p) hierarchy.
    hierarchy: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl BurgBuilder {
    /// Create a new builder with default settings: maximum order one,
    /// mean retained, final model only.
    pub fn new() -> Self {
        Self {
            max_order: None,
            subtract_mean: None,
            hierarchy: None,
            duplicate_param: None,
        }
    }

    /// Set the desired maximum model order. The effective order is
    /// clamped to `N - 1` by the amount of data.
    pub fn max_order(mut self, order: usize) -> Self {
        if self.max_order.is_some() {
            self.duplicate_param = Some("max_order");
        }
        self.max_order = Some(order);
        self
    }

    /// Subtract the sample mean from the working copy before fitting.
    pub fn subtract_mean(mut self) -> Self {
        if self.subtract_mean.is_some() {
            self.duplicate_param = Some("subtract_mean");
        }
        self.subtract_mean = Some(true);
        self
    }

    /// Emit every model AR(1)..AR(p) instead of only the final AR(p).
    pub fn hierarchy(mut self) -> Self {
        if self.hierarchy.is_some() {
            self.duplicate_param = Some("hierarchy");
        }
        self.hierarchy = Some(true);
        self
    }

    /// Run the fit over `data`.
    pub fn fit<T: Scalar>(&self, data: &[T]) -> Result<BurgFit<T>, BurgError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(BurgError::DuplicateParameter { parameter });
        }

        let config = BurgConfig {
            max_order: self.max_order.unwrap_or(1),
            subtract_mean: self.subtract_mean.unwrap_or(false),
            hierarchy: self.hierarchy.unwrap_or(false),
        };
        let mut executor = BurgExecutor::new();
        Ok(executor.fit(data, &config))
    }
}
