//! Finite-sample empirical variance estimates per estimation method.
//!
//! ## Purpose
//!
//! This module provides the closed-form per-order variance approximations
//! of Broersen and Wensink ("On Finite Sample Theory for Autoregressive
//! Model Order Selection", IEEE Trans. Signal Processing 41, 1993). They
//! are the per-order building blocks consumed by finite-sample
//! order-selection criteria.
//!
//! ## Design notes
//!
//! * **Closed sets**: Four estimation methods and two mean-handling
//!   policies, modeled as plain enums with call-site dispatch. No trait
//!   objects.
//! * **No pre-factoring**: The least-squares denominators are evaluated in
//!   the working precision term by term; factorizing them would produce
//!   negative intermediates if a caller ported the expression back to
//!   unsigned integer arithmetic.
//! * **Debug-only preconditions**: `N >= 1` and `i <= N` are
//!   `debug_assert`ed, not errors; release builds compute garbage from
//!   garbage, like the rest of the numeric core.
//!
//! ## Key concepts
//!
//! * **Order zero**: The estimate depends only on whether the sample mean
//!   was subtracted before estimation (`1/N`) or retained (`0`).
//! * **Order `i >= 1`**: Method-specific denominators in `N` and `i`.
//!
//! ## Non-goals
//!
//! * The order-selection criteria themselves (AIC/FIC/FSIC and friends)
//!   are not implemented here.

use crate::math::scalar::Scalar;

// ============================================================================
// Mean Handling
// ============================================================================

/// How the sample mean was treated before parameter estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeanHandling {
    /// The sample mean was subtracted from the signal before estimation.
    #[default]
    Subtracted,

    /// The sample mean was retained in the signal during estimation.
    Retained,
}

impl MeanHandling {
    /// Empirical variance estimate for order zero.
    #[inline]
    fn variance_zero<T: Scalar>(self, n: usize) -> T {
        match self {
            Self::Subtracted => T::one() / T::from_usize(n).unwrap(),
            Self::Retained => T::zero(),
        }
    }
}

// ============================================================================
// Estimation Method
// ============================================================================

/// Autoregressive parameter estimation technique.
///
/// Each method carries its own finite-sample variance approximation via
/// [`empirical_variance`](Self::empirical_variance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimationMethod {
    /// Estimation by solving the Yule-Walker equations.
    YuleWalker,

    /// Estimation by Burg's recursive method.
    #[default]
    Burg,

    /// Least squares over forward and backward predictions jointly.
    LeastSquaresFB,

    /// Least squares over forward predictions only.
    LeastSquaresF,
}

impl EstimationMethod {
    /// Approximate the empirical variance estimate for order `i` from `n`
    /// observations.
    ///
    /// # Formulae
    ///
    /// | Method | `i = 0`, subtracted | `i = 0`, retained | `i >= 1` |
    /// |---|---|---|---|
    /// | Yule-Walker | `1/N` | `0` | `(N-i) / (N(N+2))` |
    /// | Burg | `1/N` | `0` | `1 / (N+1-i)` |
    /// | LS forward+backward | `1/N` | `0` | `1 / (N + 3/2 - 3i/2)` |
    /// | LS forward | `1/N` | `0` | `1 / (N + 2 - 2i)` |
    ///
    /// Preconditions `n >= 1` and `i <= n` are checked in debug builds
    /// only.
    pub fn empirical_variance<T: Scalar>(self, mean: MeanHandling, n: usize, i: usize) -> T {
        debug_assert!(n >= 1);
        debug_assert!(i <= n);

        if i == 0 {
            return mean.variance_zero(n);
        }

        let one = T::one();
        match self {
            Self::YuleWalker => {
                let num = T::from_usize(n - i).unwrap();
                let den = T::from_usize(n * (n + 2)).unwrap();
                num / den
            }
            Self::Burg => {
                let den = T::from_usize(n + 1 - i).unwrap();
                one / den
            }
            Self::LeastSquaresFB => {
                // Factorizing the expression would break in unsigned
                // arithmetic; keep the terms separate.
                let two = one + one;
                let three = two + one;
                let den = T::from_usize(n).unwrap() + three / two
                    - three / two * T::from_usize(i).unwrap();
                one / den
            }
            Self::LeastSquaresF => {
                // Factorizing the expression would break in unsigned
                // arithmetic; keep the terms separate.
                let two = one + one;
                let den =
                    T::from_usize(n).unwrap() + two - two * T::from_usize(i).unwrap();
                one / den
            }
        }
    }
}
