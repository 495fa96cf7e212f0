//! Assessment pipeline: interpolate, transform, apply display policy.
//!
//! ## Purpose
//!
//! This module coordinates the lower layers into the two engine queries:
//! measurement → z-score/percentile, and percentile → measurement value.
//! It also owns the display policy (z-score clamping and rounding) so every
//! call site reports consistently instead of each one re-deciding.
//!
//! ## Design notes
//!
//! * **Policy Lives Here**: The raw `math` layer never clamps or rounds;
//!   this pipeline applies both as configuration, after the transform.
//!   Clamping is documented policy because it makes extreme measurements
//!   reuse the boundary of the reported range.
//! * **Option Propagation**: An empty table or invalid measurement
//!   short-circuits to `None` at each stage; no error type, no panic, no
//!   substitute number.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Pipeline**: interpolate → Box-Cox → clamp → normal CDF → round.
//!
//! ## Invariants
//!
//! * With clamping at `c`, reported z-scores lie in `[-c, c]`.
//! * Percentiles lie in (0, 100) before rounding.
//!
//! ## Non-goals
//!
//! * This module does not validate tables (see `engine::validator`).
//! * This module does not choose reference standards (see
//!   `adapters::growth`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate;
use crate::engine::output::Assessment;
use crate::math::boxcox::{value_for_z, z_score};
use crate::math::normal::{norm_cdf, norm_inv};
use crate::primitives::point::LmsPoint;

// ============================================================================
// Engine Configuration
// ============================================================================

/// Resolved display and walking policy for the assessment pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<T> {
    /// Symmetric z-score clamp bound; `None` reports raw z-scores.
    pub clamp_z: Option<T>,

    /// Decimal places for reported z and percentile; `None` reports raw.
    pub decimals: Option<u32>,

    /// Step used when the engine walks percentile curves.
    pub curve_step: T,
}

impl<T: Float> Default for EngineConfig<T> {
    /// Clamp to ±5, round to 2 decimals, step 1: the reporting convention
    /// of the pediatric reference calculators this engine serves.
    fn default() -> Self {
        Self {
            clamp_z: Some(T::from(5.0).unwrap()),
            decimals: Some(2),
            curve_step: T::one(),
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Assess a measurement against an LMS table at a given age.
///
/// Returns `None` when the table is empty or the measurement/parameters
/// fail the transform preconditions.
pub fn assess<T: Float>(
    rows: &[LmsPoint<T>],
    age: T,
    value: T,
    config: &EngineConfig<T>,
) -> Option<Assessment<T>> {
    let lms = interpolate(rows, age)?;
    let mut z = z_score(value, lms.l, lms.m, lms.s)?;

    if let Some(bound) = config.clamp_z {
        z = z.max(-bound).min(bound);
    }

    let percentile = norm_cdf(z) * T::from(100.0).unwrap();

    Some(Assessment {
        z: round_to(z, config.decimals),
        percentile: round_to(percentile, config.decimals),
        lms,
    })
}

/// Measurement value at a given percentile and age.
///
/// Returns `None` when the table is empty or the inverse transform leaves
/// the real domain.
pub fn value_at_percentile<T: Float>(
    rows: &[LmsPoint<T>],
    age: T,
    percentile: T,
    config: &EngineConfig<T>,
) -> Option<T> {
    let lms = interpolate(rows, age)?;
    let z = norm_inv(percentile / T::from(100.0).unwrap());
    let value = value_for_z(z, lms.l, lms.m, lms.s);
    if !value.is_finite() {
        return None;
    }
    Some(round_to(value, config.decimals))
}

/// Round to `decimals` places; identity when `decimals` is `None`.
#[inline]
pub(crate) fn round_to<T: Float>(x: T, decimals: Option<u32>) -> T {
    match decimals {
        Some(d) => {
            let scale = T::from(10.0).unwrap().powi(d as i32);
            (x * scale).round() / scale
        }
        None => x,
    }
}
