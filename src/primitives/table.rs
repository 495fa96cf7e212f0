//! Validated, immutable reference tables.
//!
//! ## Purpose
//!
//! This module wraps an ordered sequence of reference rows in a container
//! whose construction enforces the table invariants: non-empty, every field
//! finite, independent variable strictly increasing. A table is loaded once
//! and shared read-only for the lifetime of the process.
//!
//! ## Design notes
//!
//! * **Validate Once**: All checks happen in `new`; every later query can
//!   assume a well-formed table.
//! * **Borrowed Queries**: Calculations operate on `&[P]` slices so the raw
//!   algorithms stay usable on unvalidated data too.
//! * **Loaders**: The `json` feature adds `from_json_str` for the static
//!   JSON table format.
//!
//! ## Invariants
//!
//! * `rows()` is non-empty and strictly increasing in the independent
//!   variable.
//!
//! ## Non-goals
//!
//! * This module does not interpolate (see `algorithms::interpolation`).
//! * This module does not fetch data from anywhere; the caller owns I/O.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::LmsError;
use crate::primitives::point::ReferenceEntry;

// ============================================================================
// Reference Table
// ============================================================================

/// An immutable, validated reference table.
///
/// `P` is the row type ([`crate::primitives::point::LmsPoint`] or
/// [`crate::primitives::point::ThresholdPoint`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable<T: Float, P: ReferenceEntry<T>> {
    rows: Vec<P>,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Float, P: ReferenceEntry<T>> ReferenceTable<T, P> {
    /// Build a table from rows, enforcing the table invariants.
    ///
    /// # Errors
    ///
    /// * [`LmsError::EmptyTable`] if `rows` is empty.
    /// * [`LmsError::InvalidNumericValue`] if any independent value is
    ///   non-finite.
    /// * [`LmsError::UnsortedTable`] if the independent variable is not
    ///   strictly increasing (duplicates included).
    pub fn new(rows: Vec<P>) -> Result<Self, LmsError> {
        Validator::validate_rows::<T, P>(&rows)?;
        Ok(Self {
            rows,
            _marker: core::marker::PhantomData,
        })
    }

    /// The validated rows, ascending by independent variable.
    pub fn rows(&self) -> &[P] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a constructed table; present for slice parity.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tabulated domain as `(min, max)` of the independent variable.
    pub fn domain(&self) -> (T, T) {
        // Safe: `new` rejects empty tables.
        (
            self.rows[0].independent(),
            self.rows[self.rows.len() - 1].independent(),
        )
    }
}

// ============================================================================
// JSON Loading
// ============================================================================

#[cfg(feature = "json")]
impl<T, P> ReferenceTable<T, P>
where
    T: Float,
    P: ReferenceEntry<T> + serde::de::DeserializeOwned,
{
    /// Load a table from a JSON array of rows, then validate it.
    ///
    /// # Errors
    ///
    /// Returns [`LmsError::InvalidNumericValue`] when the document does not
    /// parse, or any of the `new` errors when the parsed rows are malformed.
    pub fn from_json_str(json: &str) -> Result<Self, LmsError> {
        let rows: Vec<P> = serde_json::from_str(json)
            .map_err(|e| LmsError::InvalidNumericValue(format!("JSON parse: {}", e)))?;
        Self::new(rows)
    }
}
