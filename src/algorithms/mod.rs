//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the two core numerical recursions:
//! - Burg's method for autoregressive parameter estimation
//! - The Zohar-Trench direct solver for general Toeplitz systems
//!
//! Both are synchronous, allocation-bounded computations with no shared
//! state; distinct invocations on disjoint data may run concurrently
//! without coordination.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Burg's method for AR parameter estimation.
pub mod burg;

/// Zohar-Trench Toeplitz solver.
pub mod toeplitz;
