//! Error types for autoregressive estimation and Toeplitz solving.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate. Errors
//! cover argument-shape violations (empty or mismatched coefficient ranges,
//! undersized right-hand sides) and builder misuse; numerical degeneracy is
//! deliberately *not* an error (see Non-goals).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Shape checks run before any arithmetic.
//! * **no_std**: `Display` is implemented over `core::fmt`; `std::error::Error`
//!   is provided only when the `std` feature is enabled.
//! * **Comparable**: `PartialEq` so tests can match exact variants.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to reconstruct the violated bound.
//!
//! ## Non-goals
//!
//! * This module does not represent numerical degeneracy (singular Toeplitz
//!   systems, zero innovation variance). Those conditions propagate through
//!   the arithmetic as infinities/NaNs and are the caller's responsibility
//!   to detect.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors reported by the estimation and solver entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BurgError {
    /// The Toeplitz coefficient range `a` was empty (problem size < 1).
    EmptyCoefficients,

    /// The `a` and `r` coefficient ranges have different lengths.
    MismatchedCoefficients {
        /// Length of the first-row coefficient range.
        a_len: usize,
        /// Length of the first-column coefficient range.
        r_len: usize,
    },

    /// The right-hand side is shorter than the `n + 1` entries required.
    RhsTooShort {
        /// Number of entries provided.
        got: usize,
        /// Number of entries required.
        need: usize,
    },

    /// The output range is shorter than the `n + 1` entries to be written.
    OutputTooShort {
        /// Number of entries provided.
        got: usize,
        /// Number of entries required.
        need: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for BurgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCoefficients => {
                write!(f, "Coefficient range is empty (problem size must be at least 1)")
            }
            Self::MismatchedCoefficients { a_len, r_len } => {
                write!(
                    f,
                    "Length mismatch: a has {} coefficients, r has {}",
                    a_len, r_len
                )
            }
            Self::RhsTooShort { got, need } => {
                write!(
                    f,
                    "Right-hand side too short: got {} entries, need {}",
                    got, need
                )
            }
            Self::OutputTooShort { got, need } => {
                write!(f, "Output range too short: got {} entries, need {}", got, need)
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BurgError {}
