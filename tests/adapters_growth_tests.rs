#![cfg(feature = "dev")]
//! Tests for growth-standard routing and age corrections.

use std::collections::HashMap;

use lms_rs::internals::adapters::growth::{
    corrected_age, postmenstrual_age_weeks, select_standard, standard_for_age, GrowthStandard,
    Metric, Sex,
};

#[test]
fn test_who_cdc_boundary() {
    assert_eq!(standard_for_age(0.0_f64), GrowthStandard::Who);
    assert_eq!(standard_for_age(12.0_f64), GrowthStandard::Who);
    assert_eq!(standard_for_age(24.0_f64), GrowthStandard::Who);
    assert_eq!(standard_for_age(24.1_f64), GrowthStandard::Cdc);
    assert_eq!(standard_for_age(120.0_f64), GrowthStandard::Cdc);
}

#[test]
fn test_corrected_age_term_is_identity() {
    assert_eq!(corrected_age(6.0_f64, 40.0), 6.0);
    assert_eq!(corrected_age(6.0_f64, 42.0), 6.0);
}

#[test]
fn test_corrected_age_preterm() {
    // Born at 28 weeks: 12 weeks early = 12 * 7 / 30.44 months
    let corrected = corrected_age(6.0_f64, 28.0);
    let expected = 6.0 - 12.0 * 7.0 / 30.44;
    assert!((corrected - expected).abs() < 1e-9);
}

#[test]
fn test_corrected_age_floors_at_zero() {
    assert_eq!(corrected_age(1.0_f64, 28.0), 0.0);
    assert_eq!(corrected_age(0.0_f64, 32.0), 0.0);
}

#[test]
fn test_postmenstrual_age() {
    // 30 weeks GA + 2 months postnatal
    let pma = postmenstrual_age_weeks(30.0_f64, 2.0);
    let expected = 30.0 + 2.0 * 30.44 / 7.0;
    assert!((pma - expected).abs() < 1e-9);
}

#[test]
fn test_select_standard_term() {
    let (standard, age) = select_standard(3.0_f64, None);
    assert_eq!(standard, GrowthStandard::Who);
    assert_eq!(age, 3.0);

    let (standard, age) = select_standard(60.0_f64, None);
    assert_eq!(standard, GrowthStandard::Cdc);
    assert_eq!(age, 60.0);
}

#[test]
fn test_select_standard_preterm_in_fenton_domain() {
    // 30 weeks GA, 2 months old: postmenstrual age ~38.7 weeks
    let (standard, age) = select_standard(2.0_f64, Some(30.0));
    assert_eq!(standard, GrowthStandard::Fenton);
    assert!((age - (30.0 + 2.0 * 30.44 / 7.0)).abs() < 1e-9);
}

#[test]
fn test_select_standard_preterm_past_fenton_domain() {
    // 30 weeks GA, 6 months old: postmenstrual age ~56 weeks, so the
    // infant graduates to WHO at the corrected age
    let (standard, age) = select_standard(6.0_f64, Some(30.0));
    assert_eq!(standard, GrowthStandard::Who);
    let expected = 6.0 - 10.0 * 7.0 / 30.44;
    assert!((age - expected).abs() < 1e-9);
}

#[test]
fn test_select_standard_late_preterm_skips_fenton() {
    // 38 weeks GA is not a Fenton candidate
    let (standard, _) = select_standard(1.0_f64, Some(38.0));
    assert_eq!(standard, GrowthStandard::Who);
}

#[test]
fn test_table_routing_keys() {
    // Callers key their loaded tables by (standard, sex, metric)
    let mut tables: HashMap<(GrowthStandard, Sex, Metric), &str> = HashMap::new();
    tables.insert(
        (GrowthStandard::Who, Sex::Male, Metric::Weight),
        "who-weight-male",
    );
    tables.insert(
        (GrowthStandard::Cdc, Sex::Female, Metric::Length),
        "cdc-stature-female",
    );

    let (standard, _) = select_standard(3.0_f64, None);
    assert_eq!(
        tables.get(&(standard, Sex::Male, Metric::Weight)),
        Some(&"who-weight-male")
    );
    assert_eq!(
        tables.get(&(standard, Sex::Male, Metric::HeadCircumference)),
        None
    );
}
