//! # LMS — Lambda-Mu-Sigma Reference Engine for Rust
//!
//! A pure-function implementation of the LMS (Lambda-Mu-Sigma) method used
//! by the WHO and CDC pediatric reference standards, plus the piecewise
//! interpolation and normal-distribution machinery every reference-curve
//! calculation rests on.
//!
//! ## What is the LMS method?
//!
//! Growth references summarize an age-varying measurement distribution with
//! three smoothly varying parameters: `L` (Box-Cox power, skewness), `M`
//! (median), and `S` (coefficient of variation). Given a measurement and
//! the parameters interpolated at the child's age, a z-score and percentile
//! follow in closed form, and the inverse direction recovers the
//! measurement value any percentile corresponds to, which is how percentile
//! curves are drawn.
//!
//! **The engine answers three questions:**
//! - Where does this measurement fall against the reference population?
//!   (z-score and percentile)
//! - What measurement value corresponds to a given percentile at a given
//!   age? (inverse query)
//! - What does a whole percentile line look like across the reference
//!   domain? (curve generation for charting)
//!
//! The same interpolation core serves two-column threshold tables
//! (bilirubin phototherapy and exchange-transfusion curves), and small
//! adapters carry the deterministic call-site rules: WHO/CDC/Fenton
//! routing, gestational age correction, bilirubin risk zones, and
//! immunization catch-up evaluation.
//!
//! ## Quick Start
//!
//! ```rust
//! use lms_rs::prelude::*;
//!
//! // Weight-for-age rows: (age in months, L, M, S)
//! let rows = vec![
//!     LmsPoint::new(0.0, 0.3487, 3.3464, 0.14602),
//!     LmsPoint::new(1.0, 0.2297, 4.4709, 0.13395),
//!     LmsPoint::new(2.0, 0.1970, 5.5675, 0.12385),
//! ];
//! let table = ReferenceTable::new(rows)?;
//!
//! let engine = Lms::new().build()?;
//!
//! // A 4.2 kg boy at 1 month of age
//! let result = engine.assess(table.rows(), 1.0, 4.2);
//! if let Some(a) = result {
//!     println!("z = {}, percentile = {}", a.z, a.percentile);
//! }
//! # Result::<(), LmsError>::Ok(())
//! ```
//!
//! ### Configured policy
//!
//! ```rust
//! use lms_rs::prelude::*;
//!
//! // Raw z-scores, no display rounding, half-month curve grid
//! let engine = Lms::new()
//!     .no_clamp()
//!     .no_rounding()
//!     .curve_step(0.5)
//!     .build()?;
//! # let _ = engine.config();
//! # Result::<(), LmsError>::Ok(())
//! ```
//!
//! ### Percentile curves
//!
//! ```rust
//! use lms_rs::prelude::*;
//!
//! let rows = vec![
//!     LmsPoint::new(0.0, 1.0, 3.3, 0.15),
//!     LmsPoint::new(24.0, 1.0, 12.5, 0.11),
//! ];
//! let table = ReferenceTable::new(rows)?;
//! let engine = Lms::new().build()?;
//!
//! for p in [3.0, 50.0, 97.0] {
//!     let curve = engine.percentile_curve(table.rows(), p)?;
//!     assert!(!curve.is_empty());
//! }
//! # Result::<(), LmsError>::Ok(())
//! ```
//!
//! ### Threshold tables
//!
//! ```rust
//! use lms_rs::prelude::*;
//!
//! let photo = vec![
//!     ThresholdPoint::new(24.0, 12.0),
//!     ThresholdPoint::new(48.0, 15.0),
//! ];
//! let engine = Lms::new().build()?;
//!
//! // Midpoint of the bracketing rows
//! assert_eq!(engine.threshold_at(&photo, 36.0), Some(13.5));
//! # Result::<(), LmsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Two signals, two mechanisms:
//!
//! - **Malformed setup** (an unsorted table, an out-of-range builder
//!   parameter) is an [`prelude::LmsError`], raised fail-fast at
//!   construction or `build()` time.
//! - **Uncomputable query** (empty reference data, a non-positive
//!   measurement) is `None`. Queries never panic and never substitute a
//!   plausible-looking number; callers surface "cannot assess" instead.
//!
//! Out-of-domain query ages are *not* errors: they clamp to the boundary
//! row's parameters. Extreme ages therefore reuse the nearest tabulated
//! reference point rather than extrapolating.
//!
//! ## Parameters
//!
//! | Parameter       | Default | Effect                                          |
//! |-----------------|---------|--------------------------------------------------|
//! | **clamp_z**     | ±5      | Symmetric bound on reported z-scores             |
//! | **decimals**    | 2       | Rounding applied to reported z and percentile    |
//! | **curve_step**  | 1       | Grid step for engine-walked percentile curves    |
//!
//! `no_clamp()` and `no_rounding()` disable the first two entirely; the
//! raw math layer is always unclamped.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! lms-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description                                        |
//! |---------|---------|----------------------------------------------------|
//! | `std`   | yes     | Standard library support                           |
//! | `serde` | no      | Serde derives on points and tables                 |
//! | `json`  | no      | JSON table loaders (implies `serde`, requires std) |
//! | `dev`   | no      | Re-export internals for integration testing        |
//!
//! ## References
//!
//! - Cole, T. J. (1990). "The LMS method for constructing normalized
//!   growth standards"
//! - Abramowitz, M. & Stegun, I. A. (1964). "Handbook of Mathematical
//!   Functions", formula 7.1.26
//! - Acklam, P. J. (2003). "An algorithm for computing the inverse normal
//!   cumulative distribution function"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the reference-table row types, the validated table container,
// and `LmsError`.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the standard normal CDF/probit pair and the LMS (Box-Cox)
// transform in both directions.
mod math;

// Layer 3: Algorithms - core reference-curve algorithms.
//
// Contains piecewise-linear interpolation with boundary clamping and
// percentile-curve generation.
mod algorithms;

// Layer 4: Engine - validation, pipeline, and result types.
//
// Contains the fail-fast validator, the assessment pipeline with its
// display policy, and the result value types.
mod engine;

// Layer 5: Adapters - call-site domain rules.
//
// Contains the growth-standard routing, bilirubin risk classification,
// and immunization catch-up evaluation.
mod adapters;

// High-level fluent API.
//
// Provides the `Lms` builder for configuring and running the engine.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use lms_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Assessment, BilirubinAssessment, CurvePoint, GrowthStandard, LmsBuilder,
        LmsBuilder as Lms, LmsEngine, LmsError, LmsPoint, Metric, PendingDose, ReferenceTable,
        RiskZone, SeriesPlan, SeriesRule, SeriesStatus, Sex, ThresholdPoint,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
