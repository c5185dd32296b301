//! Autoregressive parameter estimation by Burg's method.
//!
//! ## Purpose
//!
//! This module fits an autoregressive model to stationary time series data
//! by jointly minimizing the summed squares of the forward and backward
//! one-step prediction errors. Assuming the zero-mean model
//!
//! ```text
//! x_n + a_1 x_{n-1} + ... + a_p x_{n-p} = e_n,   e_n ~ N(0, sigma2e)
//! ```
//!
//! the recursion produces the coefficients `a_i`, the innovation variance
//! `sigma2e`, the gain `sigma2x / sigma2e`, and the lag 1..=p
//! autocorrelations, for either a single model of maximum order or the
//! entire hierarchy AR(1), AR(2), ..., AR(p).
//!
//! ## Design notes
//!
//! * **Joint minimization**: Avoids the windowing artifacts of the
//!   Yule-Walker equations on short series.
//! * **Denominator recursion**: The reflection-coefficient denominator `D`
//!   is updated in O(1) per order instead of being recomputed in O(N).
//! * **Symmetric sweep**: Coefficients are updated in place from both ends
//!   simultaneously, so the loop only walks the first half of the buffer.
//! * **Multi-sink output**: Parameters, variances, gains, and
//!   autocorrelations accumulate into four independent vectors, preserving
//!   the jagged `p(p+1)/2` parameter layout in hierarchy mode.
//! * **Hierarchy is always computed**; the flag only controls what is
//!   emitted.
//!
//! ## Invariants
//!
//! * The internal coefficient buffer keeps `a[0] = 1` at every order.
//! * `sigma2e` is nonincreasing and `gain` nondecreasing across orders for
//!   well-conditioned input.
//! * The effective maximum order satisfies `p <= max(0, N - 1)`.
//!
//! ## Non-goals
//!
//! * Numerical-degeneracy detection. Exactly constant input drives `D` to
//!   zero and a perfect predictor drives `1 - a_k^2` to zero; both
//!   propagate infinities/NaNs under floating point and are the caller's
//!   responsibility to detect.
//! * Model-order selection (see the evaluation layer for its inputs).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::math::scalar::Scalar;
use crate::math::summation::pairwise_sum_into;
use crate::primitives::buffer::BurgWorkspace;

// ============================================================================
// Entry Points
// ============================================================================

/// Fit an autoregressive model using Burg's method.
///
/// The input is consumed in a single pass. The mean, computed by pairwise
/// summation, is written to `mean` and subtracted from the working copy
/// when `subtract_mean` is set. On input `max_order` is the desired
/// maximum order; on output it is the effective order
/// `min(max_order + 1, N) - 1`, clamped by the amount of data.
///
/// Output accumulates into four sinks:
///
/// * `params`: `a_1..a_p` for the final model, or the
///   `p(p+1)/2` coefficients of AR(1)..AR(p) when `hierarchy` is set.
/// * `sigma2e`, `gain`: one entry per emitted model.
/// * `autocor`: the lag 1..=p autocorrelations, always all of them (the
///   lag-zero value is identically one and never emitted).
///
/// Returns the number of input values consumed.
#[allow(clippy::too_many_arguments)]
pub fn burg_method<T, I>(
    data: I,
    mean: &mut T,
    max_order: &mut usize,
    params: &mut Vec<T>,
    sigma2e: &mut Vec<T>,
    gain: &mut Vec<T>,
    autocor: &mut Vec<T>,
    subtract_mean: bool,
    hierarchy: bool,
) -> usize
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let mut ws = BurgWorkspace::new();
    burg_method_with(
        &mut ws,
        data,
        mean,
        max_order,
        params,
        sigma2e,
        gain,
        autocor,
        subtract_mean,
        hierarchy,
    )
}

/// [`burg_method`] against a caller-owned workspace.
///
/// Repeated fits recycle the residual and coefficient buffers; the
/// workspace grows to the largest problem seen and is never shrunk.
#[allow(clippy::too_many_arguments)]
pub fn burg_method_with<T, I>(
    ws: &mut BurgWorkspace<T>,
    data: I,
    mean: &mut T,
    max_order: &mut usize,
    params: &mut Vec<T>,
    sigma2e: &mut Vec<T>,
    gain: &mut Vec<T>,
    autocor: &mut Vec<T>,
    subtract_mean: bool,
    hierarchy: bool,
) -> usize
where
    T: Scalar,
    I: IntoIterator<Item = T>,
{
    let BurgWorkspace { f, b, a, autocor: rho } = ws;

    // Initialize f from the input and fix the number of samples.
    f.clear();
    f.extend(data);
    let n = f.len();

    // Compute the mean by pairwise summation, folding through b.
    b.clear();
    b.resize(n, T::zero());
    let sum = pairwise_sum_into(f, b);
    *mean = if n == 0 {
        T::zero()
    } else {
        sum / T::from_usize(n).unwrap()
    };

    // At most order N - 1 can be fit from N samples. Beware N may be zero.
    let p = core::cmp::min(*max_order + 1, n).saturating_sub(1);
    *max_order = p;

    // Short circuit if no work was requested or is possible.
    if p == 0 {
        return n;
    }

    if subtract_mean {
        let m = *mean;
        for v in f.iter_mut() {
            *v = *v - m;
        }
    }

    let one = T::one();
    let two = one + one;

    // Initialize the mean squared discrepancy and the denominator D.
    let mut sig = T::zero();
    for &v in f.iter() {
        sig = sig + v * v;
    }
    let mut dk = two * sig - f[0] * f[0] - f[n - 1] * f[n - 1];
    sig = sig / T::from_usize(n).unwrap();

    // Initialize the recursion state.
    b.clear();
    b.extend_from_slice(f);
    a.clear();
    a.resize(p + 1, T::zero());
    a[0] = one;
    let mut g = one;
    rho.clear();

    for k in 1..=p {
        // Reflection coefficient mu from f, b, and D. Afterwards a[1..=k]
        // holds the AR(k) coefficients and a[k] is the reflection
        // coefficient itself.
        let mut acc = T::zero();
        for (&fv, &bv) in f[k..].iter().zip(b.iter()) {
            acc = acc + fv * bv;
        }
        let mu = two / dk * acc;
        sig = sig * (one - mu * mu);
        for j in 0..=k / 2 {
            let t1 = a[j] - mu * a[k - j];
            let t2 = a[k - j] - mu * a[j];
            a[j] = t1;
            a[k - j] = t2;
        }

        // Gain update per Broersen 2006 equation (5.25).
        g = g / (one - a[k] * a[k]);

        // Next autocorrelation per Broersen 2006 equations (5.28), (5.31):
        // the reversed lags align rho_{k-1}..rho_1 with a[1..k].
        let mut dot = a[k];
        for (&aj, &rj) in a[1..k].iter().zip(rho.iter().rev()) {
            dot = dot + aj * rj;
        }
        rho.push(-dot);

        if hierarchy || k == p {
            params.extend_from_slice(&a[1..=k]);
            sigma2e.push(sig);
            gain.push(g);
        }

        // Update f, b, and then D if another order remains.
        if k < p {
            for j in 0..n - k {
                let t1 = f[j + k] - mu * b[j];
                let t2 = b[j] - mu * f[j + k];
                f[j + k] = t1;
                b[j] = t2;
            }
            dk = (one - mu * mu) * dk - f[k] * f[k] - b[n - k - 1] * b[n - k - 1];
        }
    }

    // Lag [1, p] autocorrelations in a single pass.
    autocor.extend_from_slice(rho);

    n
}
