//! Bilirubin adapter: threshold interpolation and risk-zone classification.
//!
//! ## Purpose
//!
//! This module answers the hyperbilirubinemia question: given a total serum
//! bilirubin and a postnatal age in hours, where does the newborn sit
//! relative to the phototherapy and exchange-transfusion threshold curves
//! for their gestational age and risk-factor status?
//!
//! ## Design notes
//!
//! * **Two Curves, One Query**: Both thresholds are interpolated from their
//!   own two-column tables at the same postnatal age; the zone is decided
//!   by comparing the measurement against both.
//! * **Approaching Band**: Measurements at or above 85% of the phototherapy
//!   threshold are flagged for close monitoring before the threshold is
//!   actually crossed.
//! * **Curve Selection Is Data**: Which curve applies (gestational week,
//!   risk factors present) is the caller's table lookup; this adapter only
//!   consumes the two selected curves.
//!
//! ## Invariants
//!
//! * Zone ordering: `AboveExchange` implies at/above the exchange
//!   threshold, which the source curves keep above the phototherapy
//!   threshold.
//!
//! ## Non-goals
//!
//! * This module does not store the AAP threshold tables.
//! * This module does not produce treatment recommendations beyond the
//!   zone classification.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate;
use crate::primitives::point::ThresholdPoint;

// ============================================================================
// Constants
// ============================================================================

/// Fraction of the phototherapy threshold where the "approaching" band
/// begins.
const APPROACH_FRACTION: f64 = 0.85;

// ============================================================================
// Types
// ============================================================================

/// Risk zone of a bilirubin measurement relative to the threshold curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskZone {
    /// At or above the exchange-transfusion threshold.
    AboveExchange,
    /// At or above the phototherapy threshold.
    AbovePhototherapy,
    /// Within 15% below the phototherapy threshold.
    Approaching,
    /// Below the monitoring band.
    Low,
}

/// Result of assessing a bilirubin measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilirubinAssessment<T> {
    /// The measured total serum bilirubin (mg/dL).
    pub tsb: T,

    /// Interpolated phototherapy threshold at the query age.
    pub phototherapy: T,

    /// Interpolated exchange-transfusion threshold at the query age.
    pub exchange: T,

    /// Zone classification.
    pub zone: RiskZone,

    /// Distance below the phototherapy threshold (negative when above).
    pub margin: T,
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a measurement against already-interpolated thresholds.
pub fn classify<T: Float>(tsb: T, phototherapy: T, exchange: T) -> RiskZone {
    if tsb >= exchange {
        RiskZone::AboveExchange
    } else if tsb >= phototherapy {
        RiskZone::AbovePhototherapy
    } else if tsb >= phototherapy * T::from(APPROACH_FRACTION).unwrap() {
        RiskZone::Approaching
    } else {
        RiskZone::Low
    }
}

/// Assess a bilirubin measurement against phototherapy and exchange curves.
///
/// Interpolates both curves at `age_hours` and classifies `tsb`. Returns
/// `None` when either curve is empty.
pub fn assess<T: Float>(
    photo_rows: &[ThresholdPoint<T>],
    exchange_rows: &[ThresholdPoint<T>],
    age_hours: T,
    tsb: T,
) -> Option<BilirubinAssessment<T>> {
    let phototherapy = interpolate(photo_rows, age_hours)?.threshold;
    let exchange = interpolate(exchange_rows, age_hours)?.threshold;

    Some(BilirubinAssessment {
        tsb,
        phototherapy,
        exchange,
        zone: classify(tsb, phototherapy, exchange),
        margin: phototherapy - tsb,
    })
}
