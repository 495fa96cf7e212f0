//! Error types for reference-table validation and engine configuration.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate. Errors
//! are raised only on construction and configuration paths (table loading,
//! builder validation); query paths signal "no result" with `Option::None`
//! instead and never fail.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Malformed tables and parameters are rejected before any
//!   calculation runs against them.
//! * **No Panics**: Every invalid input maps to a variant; nothing unwraps.
//! * **no_std**: `Display` is implemented over `core::fmt`; `std::error::Error`
//!   is feature-gated.
//!
//! ## Invariants
//!
//! * Display messages state the offending value and the accepted range.
//!
//! ## Non-goals
//!
//! * This module does not represent "no reference data" or "cannot assess";
//!   those are `None` results, not errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised while validating reference tables or engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum LmsError {
    /// The reference table has no rows.
    EmptyTable,

    /// The independent variable is not strictly increasing at `index`.
    UnsortedTable {
        /// Index of the first row that breaks the ordering.
        index: usize,
    },

    /// A non-finite value (NaN or infinity) was found in the input.
    InvalidNumericValue(String),

    /// Percentile outside the open interval (0, 100).
    InvalidPercentile(f64),

    /// Curve step that is not positive and finite.
    InvalidStep(f64),

    /// Z-score clamp bound that is not positive and finite.
    InvalidClamp(f64),

    /// Dose count inconsistent with the series definition.
    InvalidDoseCount {
        /// Number of doses supplied.
        got: usize,
        /// Total doses the series defines.
        max: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for LmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LmsError::EmptyTable => write!(f, "Reference table is empty"),
            LmsError::UnsortedTable { index } => write!(
                f,
                "Reference table is not strictly increasing at row {}",
                index
            ),
            LmsError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            LmsError::InvalidPercentile(p) => {
                write!(f, "Invalid percentile: {} (must be > 0 and < 100)", p)
            }
            LmsError::InvalidStep(step) => {
                write!(f, "Invalid step: {} (must be > 0 and finite)", step)
            }
            LmsError::InvalidClamp(bound) => {
                write!(f, "Invalid clamp bound: {} (must be > 0 and finite)", bound)
            }
            LmsError::InvalidDoseCount { got, max } => {
                write!(f, "Invalid dose count: got {}, series has {} doses", got, max)
            }
            LmsError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LmsError {}
