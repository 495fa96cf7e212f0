//! Immunization-schedule adapter: catch-up series evaluation.
//!
//! ## Purpose
//!
//! This module evaluates one vaccine series against a child's age and dose
//! history and produces the remaining schedule: which doses are still
//! needed, the minimum age and inter-dose interval for each, and whether
//! the series can no longer be started or completed at all.
//!
//! ## Design notes
//!
//! * **Days Only**: All ages and intervals are day counts; calendar and
//!   date parsing stay with the caller.
//! * **Evaluation Order**: Aged-out checks (maximum first-dose age, maximum
//!   series age) run before the not-yet-due check, then completeness, then
//!   the per-dose schedule. A dose history never resets a series.
//! * **Plain Data Rules**: A series is a static rule struct; the evaluator
//!   is a pure function over it.
//!
//! ## Invariants
//!
//! * `doses_needed + doses_given == rule.total_doses` for a `Due` plan.
//! * Every emitted dose number is in `(doses_given, total_doses]`.
//!
//! ## Non-goals
//!
//! * This module does not encode the full CDSi logic (conditional skips,
//!   vaccine-type substitutions); rules carry the simplified constraints.
//! * This module does not ship the vaccine rule set; rules are data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::LmsError;

// ============================================================================
// Constants
// ============================================================================

/// Days past the recommended age before a pending dose is flagged overdue.
const OVERDUE_GRACE_DAYS: u32 = 30;

// ============================================================================
// Rule Types
// ============================================================================

/// Dose constraints for one vaccine series, all ages in days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRule {
    /// Stable identifier, e.g. `"dtap"`.
    pub id: &'static str,

    /// Display name, e.g. `"DTaP"`.
    pub name: &'static str,

    /// Number of doses that complete the series.
    pub total_doses: usize,

    /// Minimum age per dose; indexed by dose number - 1.
    pub min_age: Vec<u32>,

    /// Minimum interval from the previous dose; `min_interval[i]` guards
    /// dose `i + 2`.
    pub min_interval: Vec<u32>,

    /// Recommended age per dose; indexed by dose number - 1.
    pub rec_age: Vec<u32>,

    /// Oldest age at which any dose may still be given.
    pub max_age: Option<u32>,

    /// Oldest age at which the first dose may be given.
    pub max_first_dose: Option<u32>,
}

impl SeriesRule {
    /// Check the rule's internal consistency against a dose history.
    pub fn validate(&self, doses_given: usize) -> Result<(), LmsError> {
        Validator::validate_dose_count(doses_given, self.total_doses)
    }
}

// ============================================================================
// Plan Types
// ============================================================================

/// Status of a series after evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStatus {
    /// All doses received.
    Complete,
    /// The series can no longer be started or completed at this age.
    AgedOut,
    /// The child is younger than the first dose's minimum age.
    NotYetDue,
    /// One or more doses are still needed.
    Due,
}

/// Constraints for one pending dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDose {
    /// 1-based dose number within the series.
    pub dose_number: usize,

    /// Minimum age in days.
    pub min_age: u32,

    /// Minimum interval from the previous dose in days (0 for dose 1).
    pub min_interval: u32,

    /// Recommended age in days.
    pub rec_age: u32,

    /// Whether the child is more than the grace period past the
    /// recommended age.
    pub overdue: bool,
}

/// Evaluation result for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPlan {
    /// Series identifier the plan belongs to.
    pub series_id: &'static str,

    /// Overall status.
    pub status: SeriesStatus,

    /// Doses already received.
    pub doses_given: usize,

    /// Doses still needed (0 unless `Due`).
    pub doses_needed: usize,

    /// Schedule for the remaining doses (empty unless `Due`).
    pub pending: Vec<PendingDose>,
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate one series against the child's age and dose history.
///
/// # Errors
///
/// Returns [`LmsError::InvalidDoseCount`] when `doses_given` exceeds the
/// series total.
pub fn evaluate_series(
    rule: &SeriesRule,
    doses_given: usize,
    age_days: u32,
) -> Result<SeriesPlan, LmsError> {
    rule.validate(doses_given)?;

    let plan = |status, needed, pending| SeriesPlan {
        series_id: rule.id,
        status,
        doses_given,
        doses_needed: needed,
        pending,
    };

    // Too old to start the series at all.
    if doses_given == 0 {
        if let Some(max_first) = rule.max_first_dose {
            if age_days > max_first {
                return Ok(plan(SeriesStatus::AgedOut, 0, Vec::new()));
            }
        }
    }

    // Past the maximum age for any further dose.
    if let Some(max_age) = rule.max_age {
        if age_days > max_age && doses_given < rule.total_doses {
            return Ok(plan(SeriesStatus::AgedOut, 0, Vec::new()));
        }
    }

    // Not yet old enough for the first dose.
    if doses_given == 0 {
        if let Some(&first_min) = rule.min_age.first() {
            if age_days < first_min {
                return Ok(plan(SeriesStatus::NotYetDue, 0, Vec::new()));
            }
        }
    }

    if doses_given >= rule.total_doses {
        return Ok(plan(SeriesStatus::Complete, 0, Vec::new()));
    }

    let mut pending = Vec::with_capacity(rule.total_doses - doses_given);
    for i in doses_given..rule.total_doses {
        let min_age = rule.min_age.get(i).copied().unwrap_or(0);
        let min_interval = if i > 0 {
            rule.min_interval.get(i - 1).copied().unwrap_or(0)
        } else {
            0
        };
        let rec_age = rule.rec_age.get(i).copied().unwrap_or(0);

        pending.push(PendingDose {
            dose_number: i + 1,
            min_age,
            min_interval,
            rec_age,
            overdue: age_days > rec_age + OVERDUE_GRACE_DAYS,
        });
    }

    let needed = pending.len();
    Ok(plan(SeriesStatus::Due, needed, pending))
}
