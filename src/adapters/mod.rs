//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer adapts the evaluation-layer variance family to the two
//! consumption styles order-selection code wants:
//! - A call-based generator advancing one order per invocation
//! - A bounded iterator for composition with accumulate/partial-sum
//!   style algorithms
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Call-based variance generator.
pub mod generator;

/// Bounded variance iterator.
pub mod sequence;
