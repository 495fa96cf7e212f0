//! Piecewise-linear interpolation over sorted reference tables.
//!
//! ## Purpose
//!
//! This module estimates reference parameters at an arbitrary query point
//! from a sparse, ordered table. Reference standards tabulate their curves
//! at a handful of ages; every query in between is answered by linear
//! interpolation of the bracketing rows.
//!
//! ## Design notes
//!
//! * **Clamping**: Queries outside the tabulated domain return the boundary
//!   row unmodified. Extrapolation beyond the reference data would fabricate
//!   parameters the standard never published.
//! * **Field-Wise**: Every numeric field of the row interpolates
//!   independently through [`ReferenceEntry::lerp`].
//! * **Degenerate Brackets**: Two adjacent rows sharing an abscissa would
//!   give a zero denominator; the guard returns the left row instead of
//!   producing NaN.
//! * **Generics**: Generic over `Float` and the row type.
//!
//! ## Invariants
//!
//! * Input rows must be sorted ascending by independent variable.
//! * The result depends only on the arguments; no side effects.
//!
//! ## Non-goals
//!
//! * This module does not validate table ordering (see `engine::validator`).
//! * This module does not transform interpolated parameters (see
//!   `math::boxcox`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::ReferenceEntry;

// ============================================================================
// Interpolation
// ============================================================================

/// Interpolate a reference row at `at`.
///
/// Returns `None` only when `rows` is empty, the "no reference data"
/// signal; callers must refuse to compute a result rather than guess.
///
/// # Contract
///
/// * `at <= rows[0]`: first row, unmodified (left clamp).
/// * `at >= rows[last]`: last row, unmodified (right clamp).
/// * Otherwise the bracketing pair `(i, i + 1)` is located and every field
///   interpolated at `frac = (at - x_i) / (x_{i+1} - x_i)`.
pub fn interpolate<T, P>(rows: &[P], at: T) -> Option<P>
where
    T: Float,
    P: ReferenceEntry<T>,
{
    let first = rows.first()?;
    let last = rows.last()?;

    if at <= first.independent() {
        return Some(first.clone());
    }
    if at >= last.independent() {
        return Some(last.clone());
    }

    for pair in rows.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if at >= lo.independent() && at <= hi.independent() {
            let width = hi.independent() - lo.independent();
            // Zero-width bracket: malformed table, fall back to the left row.
            if width <= T::zero() {
                return Some(lo.clone());
            }
            let frac = (at - lo.independent()) / width;
            return Some(lo.lerp(hi, frac));
        }
    }

    // Unreachable for sorted input: the clamps cover both ends.
    None
}
