//! Result types produced by the engine.
//!
//! ## Purpose
//!
//! This module defines the ephemeral value types a calculation returns.
//! Each is produced per query, consumed immediately by the caller, and
//! never persisted.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::LmsPoint;

// ============================================================================
// Z-Score Assessment
// ============================================================================

/// Result of assessing a measurement against an LMS reference table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment<T> {
    /// Z-score, after any configured clamping and rounding.
    pub z: T,

    /// Percentile in (0, 100), after any configured rounding.
    pub percentile: T,

    /// The interpolated LMS parameters the assessment used.
    pub lms: LmsPoint<T>,
}

impl<T: Float> Assessment<T> {
    /// Whether the percentile falls outside the central band `[lower, upper]`.
    ///
    /// Callers typically flag results below the 3rd or above the 97th
    /// percentile for clinical review.
    pub fn is_outside_band(&self, lower: T, upper: T) -> bool {
        self.percentile < lower || self.percentile > upper
    }
}
