//! Reference-table row types and the interpolation interface they share.
//!
//! ## Purpose
//!
//! This module defines the value types one row of a reference table can
//! take: LMS rows (`age, L, M, S`) for anthropometric curves and two-column
//! rows (`age, threshold`) for bilirubin-style threshold curves. Both
//! implement [`ReferenceEntry`], the trait the interpolator is generic over.
//!
//! ## Design notes
//!
//! * **Value Semantics**: Rows are small `Copy` structs; identity is value
//!   equality, there is no lifecycle.
//! * **Field-Wise Lerp**: `lerp` interpolates every numeric field
//!   independently, including the independent variable itself.
//! * **Serde**: Derives are feature-gated so the static JSON table format
//!   deserializes directly into these types.
//!
//! ## Invariants
//!
//! * `lerp(a, b, 0) == a` and `lerp(a, b, 1) == b` field-wise.
//!
//! ## Non-goals
//!
//! * This module does not validate ordering or finiteness (see
//!   `primitives::table`).

// External dependencies
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Row Trait
// ============================================================================

/// A single row of a reference table, indexed by a continuous independent
/// variable (age in months, postnatal hours, gestational weeks).
pub trait ReferenceEntry<T: Float>: Clone {
    /// The independent variable this row is tabulated at.
    fn independent(&self) -> T;

    /// Linear interpolation between `self` and `other` at fractional
    /// position `frac` in [0, 1], applied to every numeric field.
    fn lerp(&self, other: &Self, frac: T) -> Self;
}

// ============================================================================
// LMS Row
// ============================================================================

/// One row of an LMS reference table: the three Box-Cox shape parameters
/// tabulated at a given age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LmsPoint<T> {
    /// Independent variable, in the table's unit (months, hours, weeks).
    pub age: T,

    /// Box-Cox power (Lambda); controls skewness.
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub l: T,

    /// Median (Mu).
    #[cfg_attr(feature = "serde", serde(rename = "M"))]
    pub m: T,

    /// Coefficient of variation (Sigma).
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    pub s: T,
}

impl<T: Float> LmsPoint<T> {
    /// Construct a row from its four parameters.
    pub fn new(age: T, l: T, m: T, s: T) -> Self {
        Self { age, l, m, s }
    }
}

impl<T: Float> ReferenceEntry<T> for LmsPoint<T> {
    fn independent(&self) -> T {
        self.age
    }

    fn lerp(&self, other: &Self, frac: T) -> Self {
        Self {
            age: self.age + frac * (other.age - self.age),
            l: self.l + frac * (other.l - self.l),
            m: self.m + frac * (other.m - self.m),
            s: self.s + frac * (other.s - self.s),
        }
    }
}

// ============================================================================
// Threshold Row
// ============================================================================

/// One row of a two-column threshold table (e.g. a phototherapy curve):
/// a single dependent value tabulated at a given age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdPoint<T> {
    /// Independent variable, in the table's unit (typically hours).
    pub age: T,

    /// Tabulated threshold value.
    pub threshold: T,
}

impl<T: Float> ThresholdPoint<T> {
    /// Construct a row from age and threshold.
    pub fn new(age: T, threshold: T) -> Self {
        Self { age, threshold }
    }
}

impl<T: Float> ReferenceEntry<T> for ThresholdPoint<T> {
    fn independent(&self) -> T {
        self.age
    }

    fn lerp(&self, other: &Self, frac: T) -> Self {
        Self {
            age: self.age + frac * (other.age - self.age),
            threshold: self.threshold + frac * (other.threshold - self.threshold),
        }
    }
}

// ============================================================================
// Curve Point
// ============================================================================

/// One emitted point of a generated percentile curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePoint<T> {
    /// Independent variable the curve was evaluated at.
    pub age: T,

    /// Curve value at that point.
    pub value: T,
}
