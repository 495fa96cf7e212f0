//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer carries the domain rules of the engine's three call sites:
//! - Growth charts: standard routing and age corrections (`growth`)
//! - Bilirubin risk: dual-threshold classification (`bilirubin`)
//! - Immunization catch-up: series evaluation (`schedule`)
//!
//! Adapters consume the engine and algorithms; they own no tables and do
//! no I/O.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Growth-chart standard routing and age corrections.
pub mod growth;

/// Bilirubin threshold assessment.
pub mod bilirubin;

/// Immunization catch-up series evaluation.
pub mod schedule;
