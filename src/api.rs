//! High-level API for the LMS reference engine.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for the engine's display and walking policy, and the configured
//! engine it produces. All queries go through the engine so the policy is
//! applied uniformly across call sites.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults; only deviations
//!   need configuring.
//! * **Validated**: Parameters are checked when `.build()` is called, and
//!   each may be configured at most once.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`LmsBuilder`] via `Lms::new()`.
//! 2. Chain configuration methods (`.clamp_z()`, `.decimals()`, ...).
//! 3. Call `.build()` to obtain a validated [`LmsEngine`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::curve::percentile_curve;
use crate::algorithms::interpolation::interpolate;
use crate::engine::executor::{assess, round_to, value_at_percentile};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::bilirubin::{BilirubinAssessment, RiskZone};
pub use crate::adapters::growth::{GrowthStandard, Metric, Sex};
pub use crate::adapters::schedule::{PendingDose, SeriesPlan, SeriesRule, SeriesStatus};
pub use crate::engine::executor::EngineConfig;
pub use crate::engine::output::Assessment;
pub use crate::primitives::errors::LmsError;
pub use crate::primitives::point::{CurvePoint, LmsPoint, ThresholdPoint};
pub use crate::primitives::table::ReferenceTable;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for the engine's display and walking policy.
#[derive(Debug, Clone)]
pub struct LmsBuilder<T> {
    /// Symmetric z-score clamp bound; `Some(None)` disables clamping.
    clamp_z: Option<Option<T>>,

    /// Decimal places for reported values; `Some(None)` disables rounding.
    decimals: Option<Option<u32>>,

    /// Step for engine-walked percentile curves.
    curve_step: Option<T>,

    /// First parameter configured twice, if any.
    duplicate: Option<&'static str>,
}

impl<T: Float> Default for LmsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LmsBuilder<T> {
    /// Create a builder with every parameter at its default.
    pub fn new() -> Self {
        Self {
            clamp_z: None,
            decimals: None,
            curve_step: None,
            duplicate: None,
        }
    }

    fn mark_duplicate(&mut self, parameter: &'static str) {
        if self.duplicate.is_none() {
            self.duplicate = Some(parameter);
        }
    }

    /// Clamp reported z-scores to `[-bound, bound]` (default: 5).
    pub fn clamp_z(mut self, bound: T) -> Self {
        if self.clamp_z.is_some() {
            self.mark_duplicate("clamp_z");
        }
        self.clamp_z = Some(Some(bound));
        self
    }

    /// Report raw z-scores without clamping.
    pub fn no_clamp(mut self) -> Self {
        if self.clamp_z.is_some() {
            self.mark_duplicate("clamp_z");
        }
        self.clamp_z = Some(None);
        self
    }

    /// Round reported values to `places` decimal places (default: 2).
    pub fn decimals(mut self, places: u32) -> Self {
        if self.decimals.is_some() {
            self.mark_duplicate("decimals");
        }
        self.decimals = Some(Some(places));
        self
    }

    /// Report raw values without rounding.
    pub fn no_rounding(mut self) -> Self {
        if self.decimals.is_some() {
            self.mark_duplicate("decimals");
        }
        self.decimals = Some(None);
        self
    }

    /// Step used when the engine walks percentile curves (default: 1).
    pub fn curve_step(mut self, step: T) -> Self {
        if self.curve_step.is_some() {
            self.mark_duplicate("curve_step");
        }
        self.curve_step = Some(step);
        self
    }

    /// Validate the configuration and build the engine.
    ///
    /// # Errors
    ///
    /// * [`LmsError::DuplicateParameter`] if a parameter was set twice.
    /// * [`LmsError::InvalidClamp`] / [`LmsError::InvalidStep`] for
    ///   out-of-range values.
    pub fn build(self) -> Result<LmsEngine<T>, LmsError> {
        Validator::validate_no_duplicates(self.duplicate)?;

        let defaults = EngineConfig::<T>::default();

        let clamp_z = match self.clamp_z {
            Some(Some(bound)) => {
                Validator::validate_clamp(bound)?;
                Some(bound)
            }
            Some(None) => None,
            None => defaults.clamp_z,
        };

        let decimals = match self.decimals {
            Some(setting) => setting,
            None => defaults.decimals,
        };

        let curve_step = match self.curve_step {
            Some(step) => {
                Validator::validate_step(step)?;
                step
            }
            None => defaults.curve_step,
        };

        Ok(LmsEngine {
            config: EngineConfig {
                clamp_z,
                decimals,
                curve_step,
            },
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// A configured LMS reference engine.
///
/// All methods are pure and take the reference table by reference; a single
/// engine is safely shared across any number of tables and queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LmsEngine<T> {
    config: EngineConfig<T>,
}

impl<T: Float> LmsEngine<T> {
    /// The resolved configuration.
    pub fn config(&self) -> &EngineConfig<T> {
        &self.config
    }

    /// Z-score and percentile of a measurement at a given age.
    ///
    /// Returns `None` when the table is empty or the measurement cannot be
    /// assessed (non-positive value or parameters).
    pub fn assess(&self, rows: &[LmsPoint<T>], age: T, value: T) -> Option<Assessment<T>> {
        assess(rows, age, value, &self.config)
    }

    /// Measurement value at a given percentile and age.
    ///
    /// # Errors
    ///
    /// Returns [`LmsError::InvalidPercentile`] for a percentile outside
    /// (0, 100); an empty table yields `Ok(None)`.
    pub fn value_at_percentile(
        &self,
        rows: &[LmsPoint<T>],
        age: T,
        percentile: T,
    ) -> Result<Option<T>, LmsError> {
        Validator::validate_percentile(percentile)?;
        Ok(value_at_percentile(rows, age, percentile, &self.config))
    }

    /// Points of one percentile curve across the table's domain, using the
    /// configured step.
    ///
    /// # Errors
    ///
    /// Returns [`LmsError::InvalidPercentile`] for a percentile outside
    /// (0, 100).
    pub fn percentile_curve(
        &self,
        rows: &[LmsPoint<T>],
        percentile: T,
    ) -> Result<Vec<CurvePoint<T>>, LmsError> {
        Validator::validate_percentile(percentile)?;
        let mut points = percentile_curve(rows, percentile, Some(self.config.curve_step));
        for point in &mut points {
            point.value = round_to(point.value, self.config.decimals);
        }
        Ok(points)
    }

    /// Interpolated threshold from a two-column table at a given age.
    ///
    /// Returns `None` when the table is empty.
    pub fn threshold_at(&self, rows: &[ThresholdPoint<T>], age: T) -> Option<T> {
        interpolate(rows, age).map(|row| row.threshold)
    }
}
