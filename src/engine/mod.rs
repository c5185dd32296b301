//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fits and shapes their output:
//! - The reusable fit executor
//! - Structured result types
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Structured fit results.
pub mod output;
