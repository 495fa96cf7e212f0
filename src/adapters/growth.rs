//! Growth-chart adapter: reference-standard routing and age corrections.
//!
//! ## Purpose
//!
//! This module carries the deterministic rules a growth calculator applies
//! before the engine runs: which reference standard covers a given age
//! (WHO through 24 months, CDC afterwards, Fenton for preterm infants),
//! gestational age correction for preterm chronological ages, and the
//! postmenstrual age the Fenton charts are indexed by.
//!
//! ## Design notes
//!
//! * **Routing Only**: The adapter picks standards and converts ages; the
//!   actual tables are data the caller loads and hands to the engine.
//! * **Units**: Chronological and corrected ages are in months; gestational
//!   and postmenstrual ages in weeks. One month is taken as 30.44 days.
//!
//! ## Key concepts
//!
//! * **Corrected Age**: Chronological age minus the weeks of prematurity,
//!   floored at zero; not applied at or beyond 40 weeks gestation.
//! * **Postmenstrual Age**: GA at birth plus postnatal age; Fenton charts
//!   apply below 37 weeks GA while this is at most 50 weeks.
//!
//! ## Non-goals
//!
//! * This module does not parse dates; callers supply numeric ages.
//! * This module does not store or select the reference tables themselves.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Mean days per month used for week/month conversions.
const DAYS_PER_MONTH: f64 = 30.44;

/// Term gestation in weeks; no correction at or beyond this.
const TERM_WEEKS: f64 = 40.0;

/// WHO standards cover birth through this age in months.
const WHO_MAX_MONTHS: f64 = 24.0;

/// GA at birth below which the Fenton preterm charts apply.
const FENTON_MAX_GA_WEEKS: f64 = 37.0;

/// Fenton charts end at this postmenstrual age in weeks.
const FENTON_MAX_PMA_WEEKS: f64 = 50.0;

// ============================================================================
// Types
// ============================================================================

/// Biological sex, as the reference standards tabulate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Male reference tables.
    Male,
    /// Female reference tables.
    Female,
}

/// Anthropometric measurement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Weight (kg).
    Weight,
    /// Length or standing height (cm).
    Length,
    /// Head circumference (cm).
    HeadCircumference,
}

/// The reference standard a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthStandard {
    /// WHO child growth standards, birth to 24 months.
    Who,
    /// CDC growth references, beyond 24 months.
    Cdc,
    /// Fenton preterm growth charts, indexed by postmenstrual age.
    Fenton,
}

// ============================================================================
// Age Arithmetic
// ============================================================================

/// Gestationally corrected age in months for a preterm infant.
///
/// Subtracts the weeks of prematurity (term minus GA at birth), converted
/// to months, from the chronological age; the result never goes below
/// zero. At or beyond 40 weeks gestation the age is returned unchanged.
pub fn corrected_age<T: Float>(age_months: T, ga_weeks: T) -> T {
    let term = T::from(TERM_WEEKS).unwrap();
    if ga_weeks >= term {
        return age_months;
    }
    let weeks_to_months = T::from(7.0 / DAYS_PER_MONTH).unwrap();
    let correction = (term - ga_weeks) * weeks_to_months;
    (age_months - correction).max(T::zero())
}

/// Postmenstrual age in weeks: GA at birth plus postnatal age.
pub fn postmenstrual_age_weeks<T: Float>(ga_weeks: T, chronological_months: T) -> T {
    let months_to_weeks = T::from(DAYS_PER_MONTH / 7.0).unwrap();
    ga_weeks + chronological_months * months_to_weeks
}

// ============================================================================
// Standard Routing
// ============================================================================

/// Standard for a term infant or child of the given age in months.
pub fn standard_for_age<T: Float>(age_months: T) -> GrowthStandard {
    if age_months <= T::from(WHO_MAX_MONTHS).unwrap() {
        GrowthStandard::Who
    } else {
        GrowthStandard::Cdc
    }
}

/// Full routing rule: Fenton for preterm infants still within the Fenton
/// domain, otherwise WHO/CDC by (corrected) age.
///
/// `ga_weeks` is the gestational age at birth, `None` for term infants.
/// Returns the standard together with the age the selected standard's
/// tables are indexed by (postmenstrual weeks for Fenton, months
/// otherwise).
pub fn select_standard<T: Float>(
    chronological_months: T,
    ga_weeks: Option<T>,
) -> (GrowthStandard, T) {
    if let Some(ga) = ga_weeks {
        if ga < T::from(FENTON_MAX_GA_WEEKS).unwrap() {
            let pma = postmenstrual_age_weeks(ga, chronological_months);
            if pma <= T::from(FENTON_MAX_PMA_WEEKS).unwrap() {
                return (GrowthStandard::Fenton, pma);
            }
        }
        let corrected = corrected_age(chronological_months, ga);
        return (standard_for_age(corrected), corrected);
    }
    (
        standard_for_age(chronological_months),
        chronological_months,
    )
}
