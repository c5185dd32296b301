//! Reusable workspaces for the estimation and solver recursions.
//!
//! ## Purpose
//!
//! This module provides caller-owned scratch storage so that repeated fits
//! and solves recycle their working vectors instead of reallocating. Both
//! recursions have working-set sizes fixed by their input lengths, so a
//! workspace sized for the largest problem serves every smaller one.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: Each workspace owns every vector its
//!   recursion touches; the algorithms borrow it mutably for the call.
//! * **Logical Clearing**: Vectors are `clear()`ed between calls, never
//!   deallocated; capacity is monotonically increasing.
//! * **Two Shapes**: `BurgWorkspace` holds the coupled residual pair plus
//!   coefficient and autocorrelation buffers; `ZoharWorkspace` holds the
//!   three bordering vectors and the swap scratch.
//!
//! ## Invariants
//!
//! * Workspace contents between calls are unspecified; every recursion
//!   re-initializes what it reads.
//! * The Zohar `next_ehat` scratch always has the same capacity as `ehat`
//!   (the update cannot be done in place).
//!
//! ## Non-goals
//!
//! * Thread-local caching. Workspaces are plain values; use one per thread.
//! * Shrinking or reclamation between calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::math::scalar::Scalar;

// ============================================================================
// Burg Workspace
// ============================================================================

/// Scratch storage for the Burg lattice recursion.
///
/// Holds the forward (`f`) and backward (`b`) residual buffers, the
/// coefficient buffer `a` (with the implicit leading one at index zero),
/// and the accumulated lag autocorrelations.
#[derive(Debug, Clone, Default)]
pub struct BurgWorkspace<T: Scalar> {
    /// Forward prediction residuals, length `N`.
    pub(crate) f: Vec<T>,
    /// Backward prediction residuals, length `N`. Doubles as the pairwise
    /// summation accumulator before the recursion starts.
    pub(crate) b: Vec<T>,
    /// Model coefficients for the current order, length `p + 1`, `a[0] = 1`.
    pub(crate) a: Vec<T>,
    /// Lag 1..=k autocorrelations accumulated during the recursion.
    pub(crate) autocor: Vec<T>,
}

impl<T: Scalar> BurgWorkspace<T> {
    /// Create an empty workspace. Buffers grow on first use.
    pub fn new() -> Self {
        Self {
            f: Vec::new(),
            b: Vec::new(),
            a: Vec::new(),
            autocor: Vec::new(),
        }
    }

    /// Create a workspace pre-sized for `n` samples and maximum order `p`.
    pub fn with_capacity(n: usize, p: usize) -> Self {
        Self {
            f: Vec::with_capacity(n),
            b: Vec::with_capacity(n),
            a: Vec::with_capacity(p + 1),
            autocor: Vec::with_capacity(p),
        }
    }

    /// Logically clear all buffers for reuse. Capacity is retained.
    pub fn clear(&mut self) {
        self.f.clear();
        self.b.clear();
        self.a.clear();
        self.autocor.clear();
    }
}

// ============================================================================
// Zohar Workspace
// ============================================================================

/// Scratch storage for the Zohar-Trench bordering recursion.
///
/// Holds the growing solution `s`, the auxiliary vectors `g` and `ehat`,
/// and the `next_ehat` scratch required because the `ehat` update reads
/// both `ehat[j]` and the not-yet-updated `g[j]` in the same sweep.
#[derive(Debug, Clone, Default)]
pub struct ZoharWorkspace<T: Scalar> {
    /// Partial solution, length `i + 1` at step `i`.
    pub(crate) s: Vec<T>,
    /// First auxiliary vector, length `i + 1` at step `i`.
    pub(crate) g: Vec<T>,
    /// Second auxiliary vector (reversed-order convention).
    pub(crate) ehat: Vec<T>,
    /// Swap target for the `ehat` update.
    pub(crate) next_ehat: Vec<T>,
}

impl<T: Scalar> ZoharWorkspace<T> {
    /// Create an empty workspace. Buffers grow on first use.
    pub fn new() -> Self {
        Self {
            s: Vec::new(),
            g: Vec::new(),
            ehat: Vec::new(),
            next_ehat: Vec::new(),
        }
    }

    /// Create a workspace pre-sized for problem size `n`.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            s: Vec::with_capacity(n + 1),
            g: Vec::with_capacity(n),
            ehat: Vec::with_capacity(n),
            next_ehat: Vec::with_capacity(n),
        }
    }

    /// Logically clear all buffers for reuse. Capacity is retained.
    pub fn clear(&mut self) {
        self.s.clear();
        self.g.clear();
        self.ehat.clear();
        self.next_ehat.clear();
    }
}
