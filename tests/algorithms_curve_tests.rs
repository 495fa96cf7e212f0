#![cfg(feature = "dev")]
//! Tests for percentile-curve generation.
//!
//! These tests verify domain walking, step fallback, ordering,
//! invalid-point skipping, and determinism.

use lms_rs::internals::algorithms::curve::percentile_curve;
use lms_rs::internals::primitives::point::LmsPoint;

fn linear_median_rows() -> Vec<LmsPoint<f64>> {
    // l = 1 everywhere: the 50th percentile curve is the median line
    vec![
        LmsPoint::new(0.0, 1.0, 3.0, 0.12),
        LmsPoint::new(12.0, 1.0, 9.0, 0.10),
        LmsPoint::new(24.0, 1.0, 12.0, 0.09),
    ]
}

#[test]
fn test_empty_table_gives_empty_curve() {
    let rows: Vec<LmsPoint<f64>> = Vec::new();
    assert!(percentile_curve(&rows, 50.0, None).is_empty());
}

#[test]
fn test_walks_full_domain_inclusive() {
    let points = percentile_curve(&linear_median_rows(), 50.0, Some(1.0));
    assert_eq!(points.len(), 25);
    assert_eq!(points[0].age, 0.0);
    assert_eq!(points[24].age, 24.0);
}

#[test]
fn test_median_curve_tracks_m() {
    let points = percentile_curve(&linear_median_rows(), 50.0, Some(6.0));
    // Ages 0, 6, 12, 18, 24 → interpolated medians 3, 6, 9, 10.5, 12
    let expected = [3.0, 6.0, 9.0, 10.5, 12.0];
    assert_eq!(points.len(), expected.len());
    for (point, m) in points.iter().zip(expected) {
        assert!(
            (point.value - m).abs() < 1e-9,
            "median curve at {} was {}",
            point.age,
            point.value
        );
    }
}

#[test]
fn test_step_fallback_to_one() {
    let baseline = percentile_curve(&linear_median_rows(), 50.0, Some(1.0));
    for bad in [Some(0.0), Some(-2.0), Some(f64::NAN), Some(f64::INFINITY), None] {
        let points = percentile_curve(&linear_median_rows(), 50.0, bad);
        assert_eq!(points, baseline);
    }
}

#[test]
fn test_output_is_ascending() {
    let points = percentile_curve(&linear_median_rows(), 97.0, Some(0.5));
    for pair in points.windows(2) {
        assert!(pair[0].age < pair[1].age);
    }
}

#[test]
fn test_percentile_ordering() {
    let rows = linear_median_rows();
    let p3 = percentile_curve(&rows, 3.0, Some(1.0));
    let p97 = percentile_curve(&rows, 97.0, Some(1.0));
    assert_eq!(p3.len(), p97.len());
    for (lo, hi) in p3.iter().zip(&p97) {
        assert!(lo.value < hi.value, "3rd >= 97th at age {}", lo.age);
    }
}

#[test]
fn test_invalid_points_skipped() {
    // l = 2, s = 1: the 3rd-percentile z pushes 1 + l*s*z negative,
    // so the inverse transform is non-finite everywhere
    let rows = vec![
        LmsPoint::new(0.0, 2.0, 1.0, 1.0),
        LmsPoint::new(4.0, 2.0, 1.0, 1.0),
    ];
    let points = percentile_curve(&rows, 3.0, Some(1.0));
    assert!(points.is_empty());
}

#[test]
fn test_repeated_calls_identical() {
    let rows = linear_median_rows();
    let first = percentile_curve(&rows, 75.0, Some(0.5));
    let second = percentile_curve(&rows, 75.0, Some(0.5));
    assert_eq!(first, second);
}
