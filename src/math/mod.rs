//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks used throughout
//! the crate:
//! - The working-precision `Scalar` abstraction
//! - Pairwise summation for numerically stable means
//!
//! These are reusable functions with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Working-precision abstraction.
pub mod scalar;

/// Pairwise (cascade) summation.
pub mod summation;
