//! Cole's LMS (Box-Cox) transform between measurements and z-scores.
//!
//! ## Purpose
//!
//! This module implements the Lambda-Mu-Sigma method used by the WHO and
//! CDC reference standards: a measurement is mapped to a z-score through a
//! Box-Cox power transform whose three parameters (L, M, S) vary smoothly
//! with age, and back.
//!
//! ## Design notes
//!
//! * **Degenerate L**: As L approaches 0 the Box-Cox form becomes
//!   ill-conditioned; below `|L| < 1e-3` the logarithmic limit form is used
//!   instead. The two branches agree within 1e-3 near the switch point.
//! * **Preconditions**: M, S, and the measurement must be positive. A
//!   violation returns `None`: "cannot assess" is an explicit signal, not a
//!   substitute number.
//! * **No Clamping**: z-scores are returned raw; display clamping is engine
//!   policy.
//!
//! ## Invariants
//!
//! * `z_score(value_for_z(z, l, m, s), l, m, s) ≈ z` for finite z in
//!   [-4, 4] and valid parameters.
//! * `z_score(m, l, m, s) == 0` for any valid parameters.
//!
//! ## Non-goals
//!
//! * This module does not interpolate parameters (see
//!   `algorithms::interpolation`).
//! * This module does not convert z-scores to percentiles (see
//!   `math::normal`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Below this magnitude L is treated as zero and the logarithmic form used.
const L_EPSILON: f64 = 1e-3;

// ============================================================================
// Forward Transform
// ============================================================================

/// Z-score of a measurement against LMS parameters.
///
/// # Formula
///
/// ```text
/// |L| >= 1e-3:  z = ((value / M)^L - 1) / (L * S)
/// |L| <  1e-3:  z = ln(value / M) / S
/// ```
///
/// Returns `None` when `m <= 0`, `s <= 0`, or `value <= 0`.
pub fn z_score<T: Float>(value: T, l: T, m: T, s: T) -> Option<T> {
    if m <= T::zero() || s <= T::zero() || value <= T::zero() {
        return None;
    }

    let eps = T::from(L_EPSILON).unwrap();
    if l.abs() < eps {
        Some((value / m).ln() / s)
    } else {
        Some(((value / m).powf(l) - T::one()) / (l * s))
    }
}

// ============================================================================
// Inverse Transform
// ============================================================================

/// Measurement value at a given z-score for LMS parameters.
///
/// Exact inverse of [`z_score`]:
///
/// ```text
/// |L| >= 1e-3:  value = M * (1 + L*S*z)^(1/L)
/// |L| <  1e-3:  value = M * exp(S * z)
/// ```
///
/// For extreme inputs the general form can leave the real domain
/// (`1 + L*S*z <= 0`); the result is then non-finite and callers skip it.
pub fn value_for_z<T: Float>(z: T, l: T, m: T, s: T) -> T {
    let eps = T::from(L_EPSILON).unwrap();
    if l.abs() < eps {
        m * (s * z).exp()
    } else {
        m * (T::one() + l * s * z).powf(T::one() / l)
    }
}
