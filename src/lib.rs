//! # burg-rs — Autoregressive Estimation for Rust
//!
//! Autoregressive (AR) model estimation on stationary, scalar time series
//! using Burg's method, together with a direct solver for general Toeplitz
//! systems and the finite-sample empirical variance estimates used by
//! model-order selection criteria.
//!
//! ## What is Burg's method?
//!
//! An AR(p) model predicts each sample as a linear combination of the
//! previous `p` samples plus white-noise innovation:
//!
//! ```text
//! x_n + a_1 x_{n-1} + ... + a_p x_{n-p} = e_n
//! ```
//!
//! Burg's method fits the coefficients by minimizing the summed squares of
//! the *forward and backward* one-step prediction errors simultaneously,
//! through a lattice recursion over reflection coefficients. Compared to
//! solving the Yule-Walker equations it avoids windowing artifacts on
//! short series and guarantees a stable model for well-conditioned data.
//!
//! **Key properties:**
//! - Single pass over the input data
//! - Every lower-order model is computed on the way to order `p` and can
//!   be emitted as a hierarchy
//! - Innovation variance, gain, and lag autocorrelations come out of the
//!   same recursion at no extra asymptotic cost
//! - The sample mean is computed by pairwise summation and optionally
//!   removed
//!
//! ## Quick Start
//!
//! ```rust
//! use burg_rs::prelude::*;
//!
//! let x = vec![2.0_f64, 1.0, 3.0, 2.0, 4.0, 3.0, 5.0, 4.0];
//!
//! // Configure and run the fit
//! let fit = Burg::new()
//!     .max_order(2)       // fit AR(2)
//!     .subtract_mean()    // remove the sample mean first
//!     .fit(&x)?;
//!
//! assert_eq!(fit.order, 2);
//! assert_eq!(fit.samples, 8);
//!
//! // The final model: coefficients, innovation variance, gain
//! let model = fit.model().unwrap();
//! assert_eq!(model.params.len(), 2);
//!
//! println!("{}", fit);
//! # Result::<(), BurgError>::Ok(())
//! ```
//!
//! ### Model hierarchy
//!
//! The recursion always computes every model AR(1), AR(2), ..., AR(p);
//! `.hierarchy()` emits all of them instead of only the final one. Model
//! `k` carries exactly `k` coefficients, so the concatenated parameters
//! form a jagged block of `p(p+1)/2` values:
//!
//! ```rust
//! use burg_rs::prelude::*;
//!
//! let x = vec![2.0_f64, 1.0, 3.0, 2.0, 4.0, 3.0, 5.0, 4.0];
//!
//! let fit = Burg::new()
//!     .max_order(3)
//!     .subtract_mean()
//!     .hierarchy()
//!     .fit(&x)?;
//!
//! assert_eq!(fit.models.len(), 3);
//! for (k, model) in fit.models.iter().enumerate() {
//!     assert_eq!(model.order, k + 1);
//!     assert_eq!(model.params.len(), k + 1);
//! }
//!
//! // Lag 1..=p autocorrelations are always emitted in full
//! assert_eq!(fit.autocor.len(), 3);
//! # Result::<(), BurgError>::Ok(())
//! ```
//!
//! ### Raw entry point
//!
//! The builder wraps [`burg_method`](prelude::burg_method), which consumes
//! any single-pass iterator and pushes into four independent sinks; use it
//! when the structured result is unwanted:
//!
//! ```rust
//! use burg_rs::prelude::*;
//!
//! let x = [2.0_f64, 1.0, 3.0, 2.0, 4.0, 3.0];
//! let mut mean = 0.0;
//! let mut order = 3;
//! let (mut params, mut sigma2e) = (Vec::new(), Vec::new());
//! let (mut gain, mut autocor) = (Vec::new(), Vec::new());
//!
//! let consumed = burg_method(
//!     x.iter().copied(),
//!     &mut mean,
//!     &mut order,
//!     &mut params,
//!     &mut sigma2e,
//!     &mut gain,
//!     &mut autocor,
//!     true,  // subtract_mean
//!     true,  // hierarchy
//! );
//!
//! assert_eq!(consumed, 6);
//! assert_eq!(order, 3);
//! assert_eq!(params.len(), 3 * 4 / 2);
//! assert_eq!(autocor.len(), 3);
//! ```
//!
//! ## Toeplitz systems
//!
//! [`zohar_linear_solve`](prelude::zohar_linear_solve) solves `L s = d`
//! for the `(n+1) x (n+1)` general Toeplitz matrix with unit diagonal,
//! first row `(1, a~)` and first column `(1, r)`, in O(n^2) time. The
//! symmetric variants pass one coefficient range for both, and the
//! in-place variants overwrite the right-hand side with the solution:
//!
//! ```rust
//! use burg_rs::prelude::*;
//!
//! // a = 0 makes L the identity
//! let a = [0.0_f64, 0.0, 0.0];
//! let d = [1.0, 2.0, 3.0, 4.0];
//! let mut s = [0.0; 4];
//!
//! zohar_symmetric_solve(&a, &d, &mut s)?;
//! assert_eq!(s, d);
//! # Result::<(), BurgError>::Ok(())
//! ```
//!
//! ## Order-selection inputs
//!
//! Finite-sample order-selection criteria weight each order by an
//! empirical variance estimate depending on the estimation method and on
//! whether the sample mean was subtracted.
//! [`EstimationMethod::empirical_variance`](prelude::EstimationMethod::empirical_variance)
//! evaluates the closed-form table, and two adapters cover the common
//! consumption patterns:
//!
//! ```rust
//! use burg_rs::prelude::*;
//!
//! // Direct evaluation
//! let v: f64 = EstimationMethod::Burg
//!     .empirical_variance(MeanHandling::Subtracted, 100, 10);
//! assert_eq!(v, 1.0 / 91.0);
//!
//! // Call-based generator over orders 0, 1, 2, ...
//! let mut generator = EmpiricalVarianceGenerator::new(
//!     EstimationMethod::YuleWalker,
//!     MeanHandling::Retained,
//!     100,
//! );
//! let v0: f64 = generator.next_value();
//! assert_eq!(v0, 0.0);
//!
//! // Bounded iterator over all N + 1 orders
//! let sum: f64 = EmpiricalVarianceSequence::<f64>::new(
//!     EstimationMethod::YuleWalker,
//!     MeanHandling::Retained,
//!     4,
//! )
//! .sum();
//! assert!(sum > 0.2 && sum < 0.3);
//! ```
//!
//! ## Working precision
//!
//! Every routine is generic over [`Scalar`](prelude::Scalar), a field-like
//! bound (`Signed + FromPrimitive + Copy`) satisfied by `f32`, `f64`, and
//! exact types such as `num_rational::Ratio<i64>`. The pairwise summation
//! used for the mean is chosen for exactly that breadth: O(log N) error
//! growth in floating point and bit-exact results under rational
//! arithmetic.
//!
//! ## Numerical degeneracy
//!
//! The core never guards its arithmetic. An exactly constant input drives
//! the Burg denominator to zero, a perfect predictor drives `1 - a_k^2`
//! to zero, and a singular Toeplitz system drives `lambda` to zero; all
//! three propagate infinities/NaNs under floating point with no error
//! raised. Callers needing robustness should validate outputs (e.g.
//! `sigma2e > 0`, finite `gain`). The only explicit errors are
//! argument-shape violations, reported as [`BurgError`](prelude::BurgError).
//!
//! ## Minimal usage (no_std)
//!
//! The crate supports `no_std` environments; disable default features to
//! drop the standard-library dependency (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! burg-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Collomb, C. (2009). "Burg's Method, Algorithm and Recursion"
//! - Broersen, P. M. T. (2006). *Automatic Autocorrelation and Spectral
//!   Analysis*. Springer.
//! - Zohar, S. (1974). "The Solution of a Toeplitz Set of Linear
//!   Equations". J. ACM 21, 272-276.
//! - Trench, W. F. (1967). "Weighting Coefficients for the Prediction of
//!   Stationary Time Series from the Finite Past". SIAM J. Appl. Math. 15.
//! - Broersen, P. M. T. (2000). "Finite sample criteria for
//!   autoregressive order selection". IEEE Trans. Signal Processing 48.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types and recursion workspaces.
mod primitives;

// Layer 2: Math - working-precision abstraction and pairwise summation.
mod math;

// Layer 3: Algorithms - the Burg lattice recursion and the Zohar-Trench
// Toeplitz solver.
mod algorithms;

// Layer 4: Evaluation - finite-sample empirical variance estimates.
mod evaluation;

// Layer 5: Engine - fit orchestration and structured results.
mod engine;

// Layer 6: Adapters - generator and iterator views of the variance family.
mod adapters;

// High-level fluent API for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use burg_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        burg_method, burg_method_with, zohar_linear_solve, zohar_linear_solve_in_place,
        zohar_linear_solve_with, zohar_symmetric_solve, zohar_symmetric_solve_in_place, ArModel,
        BurgBuilder as Burg, BurgConfig, BurgError, BurgExecutor, BurgFit, BurgWorkspace,
        EmpiricalVarianceGenerator, EmpiricalVarianceSequence, EstimationMethod, MeanHandling,
        Scalar, ZoharWorkspace,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and workspaces.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation statistics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
