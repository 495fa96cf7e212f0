//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! engine:
//! - Standard normal CDF and inverse CDF (`normal`)
//! - The LMS (Box-Cox) transform between measurements and z-scores
//!   (`boxcox`)
//!
//! These are reusable mathematical building blocks with no table- or
//! domain-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Standard normal CDF and probit.
pub mod normal;

/// LMS (Box-Cox) forward and inverse transforms.
pub mod boxcox;
