//! Direct solution of general Toeplitz systems (Zohar-Trench).
//!
//! ## Purpose
//!
//! This module solves `L s = d` where `L` is the `(n+1) x (n+1)` Toeplitz
//! matrix with unit diagonal, first row `(1, a~)` and first column
//! `(1, r)`:
//!
//! ```text
//! L = | 1   a~ |
//!     | r   L' |
//! ```
//!
//! The algorithm is Zohar's improvement of Trench's bordering recursion
//! (J. ACM 21, 1974), running in O(n^2) time with O(n) working storage. A
//! symmetric solve passes the same coefficients for `a` and `r`.
//!
//! ## Design notes
//!
//! * **Bordering**: Each step extends the order-`i` solution to order
//!   `i + 1` from three inner products against the reversed leading
//!   coefficients.
//! * **Last computed values**: The final step only needs the `theta`
//!   update, so the `eta`/`gamma`/`g`/`ehat`/`lambda` bookkeeping is
//!   skipped there.
//! * **Swap, not in-place**: `ehat[j+1]` depends on both `ehat[j]` and the
//!   not-yet-updated `g[j]`, so the `ehat` update writes into a scratch
//!   vector that is swapped in afterwards. `s` and `g` update in place in
//!   the same sweep.
//! * **Shape checks up front**: Empty `a`, mismatched `a`/`r`, and
//!   undersized `d`/output ranges are rejected before any arithmetic.
//!
//! ## Invariants
//!
//! * At step `i` the vectors `s`, `g`, `ehat` all have length `i + 1`.
//! * `lambda` is the Schur complement driving every division; it is never
//!   checked for zero.
//!
//! ## Non-goals
//!
//! * Singularity detection: a vanishing `lambda` produces infinities/NaNs
//!   under floating point with no error raised.
//! * Iterative refinement of the computed solution.
//! * The Hermitian case (the caller would pass conjugated coefficients and
//!   conjugate inside the inner products; the scope here is real).

use core::mem;

use crate::math::scalar::Scalar;
use crate::primitives::buffer::ZoharWorkspace;
use crate::primitives::errors::BurgError;

// ============================================================================
// Entry Points
// ============================================================================

/// Solve the general Toeplitz system `L s = d`.
///
/// The problem size is `n = a.len()`; `d` supplies `n + 1` entries and
/// `n + 1` entries are written to `s_out`.
pub fn zohar_linear_solve<T: Scalar>(
    a: &[T],
    r: &[T],
    d: &[T],
    s_out: &mut [T],
) -> Result<(), BurgError> {
    let mut ws = ZoharWorkspace::new();
    zohar_linear_solve_with(&mut ws, a, r, d, s_out)
}

/// [`zohar_linear_solve`] against a caller-owned workspace.
pub fn zohar_linear_solve_with<T: Scalar>(
    ws: &mut ZoharWorkspace<T>,
    a: &[T],
    r: &[T],
    d: &[T],
    s_out: &mut [T],
) -> Result<(), BurgError> {
    let n = check_system(a, r, d.len())?;
    if s_out.len() < n + 1 {
        return Err(BurgError::OutputTooShort {
            got: s_out.len(),
            need: n + 1,
        });
    }
    solve_into(ws, a, r, d);
    s_out[..n + 1].copy_from_slice(&ws.s);
    Ok(())
}

/// Solve the general Toeplitz system in place: `d` is both the right-hand
/// side and, on success, the solution `L^{-1} d` (first `n + 1` entries).
pub fn zohar_linear_solve_in_place<T: Scalar>(
    a: &[T],
    r: &[T],
    d: &mut [T],
) -> Result<(), BurgError> {
    let n = check_system(a, r, d.len())?;
    let mut ws = ZoharWorkspace::new();
    solve_into(&mut ws, a, r, d);
    d[..n + 1].copy_from_slice(&ws.s);
    Ok(())
}

/// Solve a real symmetric Toeplitz system: first row and first column
/// share the coefficients `a`.
pub fn zohar_symmetric_solve<T: Scalar>(
    a: &[T],
    d: &[T],
    s_out: &mut [T],
) -> Result<(), BurgError> {
    zohar_linear_solve(a, a, d, s_out)
}

/// Solve a real symmetric Toeplitz system in place.
pub fn zohar_symmetric_solve_in_place<T: Scalar>(a: &[T], d: &mut [T]) -> Result<(), BurgError> {
    zohar_linear_solve_in_place(a, a, d)
}

// ============================================================================
// Validation
// ============================================================================

/// Check coefficient and right-hand-side shapes; returns the problem size.
fn check_system<T: Scalar>(a: &[T], r: &[T], d_len: usize) -> Result<usize, BurgError> {
    let n = a.len();
    if n < 1 {
        return Err(BurgError::EmptyCoefficients);
    }
    if r.len() != n {
        return Err(BurgError::MismatchedCoefficients {
            a_len: n,
            r_len: r.len(),
        });
    }
    if d_len < n + 1 {
        return Err(BurgError::RhsTooShort {
            got: d_len,
            need: n + 1,
        });
    }
    Ok(n)
}

// ============================================================================
// Recursion
// ============================================================================

/// Run the bordering recursion, leaving the solution in `ws.s`.
///
/// Shapes must have been checked. Hats denote reversed vectors; the
/// three inner products per step follow Zohar's formulation with negated
/// numerators so that each is a single accumulating pass.
fn solve_into<T: Scalar>(ws: &mut ZoharWorkspace<T>, a: &[T], r: &[T], d: &[T]) {
    let n = a.len();
    let one = T::one();

    let ZoharWorkspace { s, g, ehat, next_ehat } = ws;

    // Initial values for the order-one subproblem.
    s.clear();
    s.push(d[0]);
    ehat.clear();
    ehat.push(-a[0]);
    g.clear();
    g.push(-r[0]);
    let mut lambda = one - a[0] * r[0];

    // Recursion for i = 1, 2, ..., n - 1.
    for i in 1..n {
        let rhat = r[..i].iter().rev();

        // -theta_i = -d[i] + s~_i rhat_i
        let mut neg_theta = -d[i];
        for (&sj, &rj) in s.iter().zip(rhat.clone()) {
            neg_theta = neg_theta + sj * rj;
        }

        // -eta_i = a[i] + a~_i ehat_i
        let mut neg_eta = a[i];
        for (&ej, &aj) in ehat.iter().zip(a.iter()) {
            neg_eta = neg_eta + ej * aj;
        }

        // -gamma_i = r[i] + g~_i rhat_i
        let mut neg_gamma = r[i];
        for (&gj, &rj) in g.iter().zip(rhat) {
            neg_gamma = neg_gamma + gj * rj;
        }

        let theta_by_lambda = -neg_theta / lambda;
        let eta_by_lambda = -neg_eta / lambda;
        let gamma_by_lambda = -neg_gamma / lambda;

        // s_{i+1} = ( s_i + (theta/lambda) ehat_i, theta/lambda )
        // ehat_{i+1} = ( eta/lambda, ehat_i + (eta/lambda) g_i )
        // g_{i+1} = ( g_i + (gamma/lambda) ehat_i, gamma/lambda )
        next_ehat.clear();
        next_ehat.push(eta_by_lambda);
        for j in 0..i {
            s[j] = s[j] + theta_by_lambda * ehat[j];
            next_ehat.push(ehat[j] + eta_by_lambda * g[j]);
            g[j] = g[j] + gamma_by_lambda * ehat[j];
        }
        s.push(theta_by_lambda);
        g.push(gamma_by_lambda);
        mem::swap(ehat, next_ehat);

        // lambda_{i+1} = lambda_i - eta_i gamma_i / lambda_i
        lambda = lambda - neg_eta * neg_gamma / lambda;
    }

    // Final step per Zohar's "last computed values": only theta and the
    // s-extension are needed; computing g_n above was already redundant
    // but the incremental expense is small.
    let mut neg_theta = -d[n];
    for (&sj, &rj) in s.iter().zip(r[..n].iter().rev()) {
        neg_theta = neg_theta + sj * rj;
    }
    let theta_by_lambda = -neg_theta / lambda;
    for j in 0..n {
        s[j] = s[j] + theta_by_lambda * ehat[j];
    }
    s.push(theta_by_lambda);
}
