//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides the finite-sample statistics consumed by
//! model-order selection:
//! - Per-method, per-order empirical variance estimates
//!
//! The selection criteria themselves live above this crate; only their
//! variance building blocks are provided.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Finite-sample empirical variance estimates.
pub mod variance;
