#![cfg(feature = "dev")]
//! Tests for bilirubin threshold assessment and risk zones.

use lms_rs::internals::adapters::bilirubin::{assess, classify, RiskZone};
use lms_rs::internals::primitives::point::ThresholdPoint;

fn photo_curve() -> Vec<ThresholdPoint<f64>> {
    vec![
        ThresholdPoint::new(24.0, 12.0),
        ThresholdPoint::new(48.0, 15.0),
        ThresholdPoint::new(72.0, 17.0),
    ]
}

fn exchange_curve() -> Vec<ThresholdPoint<f64>> {
    vec![
        ThresholdPoint::new(24.0, 19.0),
        ThresholdPoint::new(48.0, 22.0),
        ThresholdPoint::new(72.0, 24.0),
    ]
}

#[test]
fn test_classify_zones() {
    // Thresholds: phototherapy 13.5, exchange 20.5
    assert_eq!(classify(21.0_f64, 13.5, 20.5), RiskZone::AboveExchange);
    assert_eq!(classify(20.5_f64, 13.5, 20.5), RiskZone::AboveExchange);
    assert_eq!(classify(15.0_f64, 13.5, 20.5), RiskZone::AbovePhototherapy);
    assert_eq!(classify(13.5_f64, 13.5, 20.5), RiskZone::AbovePhototherapy);
    assert_eq!(classify(12.0_f64, 13.5, 20.5), RiskZone::Approaching);
    assert_eq!(classify(10.0_f64, 13.5, 20.5), RiskZone::Low);
}

#[test]
fn test_approaching_band_edge() {
    // The band opens at 85% of the phototherapy threshold
    let photo = 14.0_f64;
    let band_edge = photo * 0.85;
    assert_eq!(classify(band_edge, photo, 22.0), RiskZone::Approaching);
    assert_eq!(classify(band_edge - 0.01, photo, 22.0), RiskZone::Low);
}

#[test]
fn test_assess_interpolates_both_curves() {
    let result = assess(&photo_curve(), &exchange_curve(), 36.0, 10.0).unwrap();
    assert_eq!(result.phototherapy, 13.5);
    assert_eq!(result.exchange, 20.5);
    assert_eq!(result.zone, RiskZone::Low);
    assert_eq!(result.margin, 3.5);
}

#[test]
fn test_assess_zone_progression() {
    let curve_age = 48.0;
    // Phototherapy threshold 15, exchange 22 at 48 h
    let low = assess(&photo_curve(), &exchange_curve(), curve_age, 9.0).unwrap();
    assert_eq!(low.zone, RiskZone::Low);

    let approaching = assess(&photo_curve(), &exchange_curve(), curve_age, 13.5).unwrap();
    assert_eq!(approaching.zone, RiskZone::Approaching);

    let photo = assess(&photo_curve(), &exchange_curve(), curve_age, 16.0).unwrap();
    assert_eq!(photo.zone, RiskZone::AbovePhototherapy);

    let exchange = assess(&photo_curve(), &exchange_curve(), curve_age, 23.0).unwrap();
    assert_eq!(exchange.zone, RiskZone::AboveExchange);
}

#[test]
fn test_assess_clamps_outside_domain() {
    // Before the first tabulated hour: boundary thresholds apply
    let early = assess(&photo_curve(), &exchange_curve(), 6.0, 10.0).unwrap();
    assert_eq!(early.phototherapy, 12.0);
    assert_eq!(early.exchange, 19.0);

    let late = assess(&photo_curve(), &exchange_curve(), 120.0, 10.0).unwrap();
    assert_eq!(late.phototherapy, 17.0);
    assert_eq!(late.exchange, 24.0);
}

#[test]
fn test_assess_empty_curve_returns_none() {
    let empty: Vec<ThresholdPoint<f64>> = Vec::new();
    assert_eq!(assess(&empty, &exchange_curve(), 36.0, 10.0), None);
    assert_eq!(assess(&photo_curve(), &empty, 36.0, 10.0), None);
}
