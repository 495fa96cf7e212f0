//! Percentile-curve generation for charting.
//!
//! ## Purpose
//!
//! This module walks an LMS table's full domain at a fixed step and emits
//! the measurement value a chosen percentile corresponds to at each point.
//! The output traces one smooth percentile line (3rd, 50th, 97th, ...)
//! across the reference domain.
//!
//! ## Design notes
//!
//! * **Pipeline**: interpolate parameters → probit of the percentile →
//!   inverse Box-Cox, per step.
//! * **Lenient Step**: A missing, non-positive, or non-finite step falls
//!   back to 1 rather than erroring; charting callers pass whatever grid
//!   they want and still get a curve.
//! * **Skip, Don't Fail**: Points where the pipeline yields no finite value
//!   are skipped, not emitted as gaps or errors.
//!
//! ## Invariants
//!
//! * Output is ascending in the independent variable and fully
//!   materialized; identical inputs produce identical output.
//! * Every emitted value is finite.
//!
//! ## Non-goals
//!
//! * This module does not choose percentile sets or step sizes for
//!   particular standards (caller policy).
//! * This module does not render anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate;
use crate::math::boxcox::value_for_z;
use crate::math::normal::norm_inv;
use crate::primitives::point::{CurvePoint, LmsPoint};

// ============================================================================
// Curve Generation
// ============================================================================

/// Generate the points of one percentile curve across a table's domain.
///
/// Walks from the first row's age through the last row's age inclusive,
/// stepping by `step` (falling back to 1 when `step` is `None`,
/// non-positive, or non-finite). Points where interpolation or the
/// transform produce no finite value are skipped.
pub fn percentile_curve<T: Float>(
    rows: &[LmsPoint<T>],
    percentile: T,
    step: Option<T>,
) -> Vec<CurvePoint<T>> {
    let mut points = Vec::new();
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(f), Some(l)) => (f.age, l.age),
        _ => return points,
    };

    let step = match step {
        Some(s) if s.is_finite() && s > T::zero() => s,
        _ => T::one(),
    };

    let z = norm_inv(percentile / T::from(100.0).unwrap());

    let mut age = first;
    while age <= last {
        if let Some(lms) = interpolate(rows, age) {
            let value = value_for_z(z, lms.l, lms.m, lms.s);
            if value.is_finite() {
                points.push(CurvePoint { age, value });
            }
        }
        age = age + step;
    }

    points
}
