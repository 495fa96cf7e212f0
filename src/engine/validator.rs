//! Input validation for reference tables and engine configuration.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation functions used when tables
//! are constructed and when the engine builder resolves its configuration.
//! It checks requirements such as table ordering, finite values, and
//! parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Construction-Time Only**: Query paths never validate; a table checked
//!   here is trusted by every later calculation.
//! * **Parameter Bounds**: Enforces constraints like percentile in (0, 100).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform interpolation or transforms itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LmsError;
use crate::primitives::point::ReferenceEntry;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for reference tables and engine configuration.
///
/// Provides static methods returning `Result<(), LmsError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Table Validation
    // ========================================================================

    /// Validate the rows of a reference table.
    pub fn validate_rows<T, P>(rows: &[P]) -> Result<(), LmsError>
    where
        T: Float,
        P: ReferenceEntry<T>,
    {
        // Check 1: Non-empty
        if rows.is_empty() {
            return Err(LmsError::EmptyTable);
        }

        // Check 2: Finite abscissas
        for (i, row) in rows.iter().enumerate() {
            let x = row.independent();
            if !x.is_finite() {
                return Err(LmsError::InvalidNumericValue(format!(
                    "row[{}].age={}",
                    i,
                    x.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 3: Strictly increasing (duplicates are malformed too)
        for i in 1..rows.len() {
            if rows[i].independent() <= rows[i - 1].independent() {
                return Err(LmsError::UnsortedTable { index: i });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a percentile in the open interval (0, 100).
    pub fn validate_percentile<T: Float>(percentile: T) -> Result<(), LmsError> {
        if !percentile.is_finite()
            || percentile <= T::zero()
            || percentile >= T::from(100.0).unwrap()
        {
            return Err(LmsError::InvalidPercentile(
                percentile.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate a configured curve step.
    ///
    /// # Notes
    ///
    /// The free function `percentile_curve` stays lenient (a bad step means
    /// 1); this check applies only to a step configured through the builder,
    /// where a nonsensical value is a caller bug worth surfacing.
    pub fn validate_step<T: Float>(step: T) -> Result<(), LmsError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(LmsError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a configured symmetric z-score clamp bound.
    pub fn validate_clamp<T: Float>(bound: T) -> Result<(), LmsError> {
        if !bound.is_finite() || bound <= T::zero() {
            return Err(LmsError::InvalidClamp(bound.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a received-dose count against a series definition.
    pub fn validate_dose_count(got: usize, total: usize) -> Result<(), LmsError> {
        if got > total {
            return Err(LmsError::InvalidDoseCount { got, max: total });
        }
        Ok(())
    }

    /// Validate that no builder parameters were set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LmsError> {
        if let Some(parameter) = duplicate_param {
            return Err(LmsError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
