//! Working-precision abstraction for all numeric routines.
//!
//! ## Purpose
//!
//! This module defines the [`Scalar`] trait bound used by every recursion in
//! the crate. The working precision is a field: addition, subtraction,
//! multiplication, division, negation, zero, and one, plus conversion from
//! the integer counts (sample sizes, orders) that enter the formulae.
//!
//! ## Design notes
//!
//! * **Breadth over floats**: The bound is deliberately *not*
//!   `num_traits::Float`. The pairwise-summation strategy is chosen
//!   precisely because it stays exact under rational arithmetic, so the
//!   same code must serve `f32`, `f64`, and `num_rational::Ratio`.
//! * **Blanket impl**: `Scalar` is a pure alias; any type meeting the
//!   bounds participates automatically.
//! * **Copy**: Working values are small and passed by value throughout,
//!   matching fixed-width floats and machine-integer rationals.
//!
//! ## Non-goals
//!
//! * This module does not provide rounding, comparison tolerances, or any
//!   float-specific behavior.

use num_traits::{FromPrimitive, Signed};

// ============================================================================
// Scalar Trait
// ============================================================================

/// Working precision for the estimation and solver recursions.
///
/// Implemented automatically for every signed numeric type that can be
/// built from primitive integers, e.g. `f32`, `f64`, and
/// `num_rational::Ratio<i64>`.
pub trait Scalar: Signed + FromPrimitive + Copy {}

impl<T: Signed + FromPrimitive + Copy> Scalar for T {}
