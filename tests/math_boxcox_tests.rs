#![cfg(feature = "dev")]
//! Tests for the LMS (Box-Cox) transform.
//!
//! These tests verify the precondition handling, the logarithmic
//! degenerate branch, continuity across the branch switch, and the
//! forward/inverse round-trip.

use lms_rs::internals::math::boxcox::{value_for_z, z_score};

#[test]
fn test_preconditions_return_none() {
    assert_eq!(z_score(0.0_f64, 1.0, 3.0, 0.1), None);
    assert_eq!(z_score(-4.2_f64, 1.0, 3.0, 0.1), None);
    assert_eq!(z_score(4.2_f64, 1.0, 0.0, 0.1), None);
    assert_eq!(z_score(4.2_f64, 1.0, -3.0, 0.1), None);
    assert_eq!(z_score(4.2_f64, 1.0, 3.0, 0.0), None);
    assert_eq!(z_score(4.2_f64, 1.0, 3.0, -0.1), None);
}

#[test]
fn test_median_maps_to_zero() {
    for l in [-1.5_f64, -0.5, 0.0, 0.5, 1.0, 2.0] {
        let z = z_score(7.3_f64, l, 7.3, 0.12).unwrap();
        assert!(z.abs() < 1e-12, "z at median was {} for l = {}", z, l);
    }
}

#[test]
fn test_general_form() {
    // l = 1 reduces to (value/m - 1) / s
    let z = z_score(5.0_f64, 1.0, 4.0, 0.125).unwrap();
    assert!((z - 2.0).abs() < 1e-12);
}

#[test]
fn test_logarithmic_branch() {
    // |l| below 1e-3 takes the log form: ln(value/m) / s
    let z = z_score(4.0_f64, 0.0, 2.0, 0.25).unwrap();
    let expected = (2.0_f64).ln() / 0.25;
    assert!((z - expected).abs() < 1e-12);

    // Same branch just below the threshold
    let z_small = z_score(4.0_f64, 0.0009, 2.0, 0.25).unwrap();
    assert!((z_small - expected).abs() < 1e-12);
}

#[test]
fn test_branch_continuity_near_zero_l() {
    // The general form converges to the logarithmic form as l -> 0
    let general = z_score(4.0_f64, 0.01, 3.5, 0.12).unwrap();
    let nearly_zero = z_score(4.0_f64, 0.0001, 3.5, 0.12).unwrap();
    let explicit = z_score(4.0_f64, 0.0, 3.5, 0.12).unwrap();

    assert!((general - explicit).abs() < 1e-3);
    assert!((nearly_zero - explicit).abs() < 1e-12);
}

#[test]
fn test_value_round_trip() {
    let params = [(1.0_f64, 3.3, 0.15), (-1.6, 16.0, 0.11), (0.0, 47.0, 0.04)];
    for (l, m, s) in params {
        let mut z = -4.0_f64;
        while z <= 4.0 {
            let value = value_for_z(z, l, m, s);
            if value.is_finite() && value > 0.0 {
                let back = z_score(value, l, m, s).unwrap();
                assert!(
                    (back - z).abs() < 1e-6,
                    "round trip failed for z = {}, l = {}: got {}",
                    z,
                    l,
                    back
                );
            }
            z += 0.5;
        }
    }
}

#[test]
fn test_inverse_at_median() {
    assert!((value_for_z(0.0_f64, 0.35, 3.3464, 0.146) - 3.3464).abs() < 1e-12);
    assert!((value_for_z(0.0_f64, 0.0, 3.3464, 0.146) - 3.3464).abs() < 1e-12);
}

#[test]
fn test_inverse_out_of_domain_is_non_finite() {
    // 1 + l*s*z goes negative: the general form leaves the real domain
    let value = value_for_z(-3.0_f64, 2.0, 1.0, 1.0);
    assert!(!value.is_finite() || value.is_nan());
}
