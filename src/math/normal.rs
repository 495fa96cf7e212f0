//! Standard normal CDF and its inverse (probit).
//!
//! ## Purpose
//!
//! This module converts between z-scores and cumulative probabilities of the
//! standard normal distribution. Both directions back every percentile the
//! engine reports, so their approximations are chosen for accuracy across
//! the full practical range rather than speed.
//!
//! ## Design notes
//!
//! * **CDF**: Abramowitz & Stegun 7.1.26 rational approximation of erf,
//!   accurate to better than 1.5e-7 absolute error.
//! * **Inverse**: Acklam's rational minimax approximation, three coefficient
//!   regions split at p = 0.02425, ~1.15e-9 relative error.
//! * **Saturation**: The CDF saturates outside |z| > 6 instead of evaluating
//!   the approximation where it is not trustworthy.
//! * **Generics**: Generic over `Float`; constants are lifted with
//!   `T::from`.
//!
//! ## Invariants
//!
//! * `norm_cdf` is monotone non-decreasing; `norm_cdf(0) == 0.5` within
//!   floating-point epsilon.
//! * `norm_inv(0.5) == 0` exactly; `p <= 0` maps to -inf, `p >= 1` to +inf.
//! * The two functions round-trip within 1e-3 over (0.001, 0.999).
//!
//! ## Non-goals
//!
//! * This module does not clamp or round for display (engine policy).
//! * This module does not provide general erf/erfc surfaces.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Saturation bound: beyond |z| > 6 the CDF is pinned to 0 or 1.
const Z_SATURATION: f64 = 6.0;

/// Region split for the inverse CDF (Acklam's p_low).
const P_LOW: f64 = 0.02425;

// Abramowitz & Stegun 7.1.26 erf coefficients.
const AS_A1: f64 = 0.254829592;
const AS_A2: f64 = -0.284496736;
const AS_A3: f64 = 1.421413741;
const AS_A4: f64 = -1.453152027;
const AS_A5: f64 = 1.061405429;
const AS_P: f64 = 0.3275911;

// Acklam central-region coefficients.
const ACK_A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const ACK_B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

// Acklam tail-region coefficients.
const ACK_C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const ACK_D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

#[inline]
fn c<T: Float>(v: f64) -> T {
    T::from(v).unwrap()
}

// ============================================================================
// Normal CDF
// ============================================================================

/// Standard normal cumulative distribution function.
///
/// Returns the probability that a standard normal variate is below `z`.
/// Saturates to 0 for `z < -6` and 1 for `z > 6`.
pub fn norm_cdf<T: Float>(z: T) -> T {
    let sat = c::<T>(Z_SATURATION);
    if z < -sat {
        return T::zero();
    }
    if z > sat {
        return T::one();
    }

    let half = c::<T>(0.5);
    let sign = if z < T::zero() { -T::one() } else { T::one() };

    // erf via the A&S 7.1.26 polynomial in t = 1 / (1 + p*|z|/sqrt(2))
    let x = z.abs() / c::<T>(core::f64::consts::SQRT_2);
    let t = T::one() / (T::one() + c::<T>(AS_P) * x);
    let poly = ((((c::<T>(AS_A5) * t + c::<T>(AS_A4)) * t + c::<T>(AS_A3)) * t + c::<T>(AS_A2))
        * t
        + c::<T>(AS_A1))
        * t;
    let erf = T::one() - poly * (-x * x).exp();

    half * (T::one() + sign * erf)
}

// ============================================================================
// Inverse Normal CDF
// ============================================================================

/// Inverse of the standard normal CDF (probit).
///
/// Maps a cumulative probability back to its z-score. By contract,
/// `p <= 0` returns negative infinity, `p >= 1` positive infinity, and
/// `p == 0.5` returns exactly 0.
pub fn norm_inv<T: Float>(p: T) -> T {
    if p <= T::zero() {
        return T::neg_infinity();
    }
    if p >= T::one() {
        return T::infinity();
    }
    let half = c::<T>(0.5);
    if p == half {
        return T::zero();
    }

    let p_low = c::<T>(P_LOW);
    let p_high = T::one() - p_low;
    let two = c::<T>(2.0);

    if p < p_low {
        // Lower tail
        let q = (-two * p.ln()).sqrt();
        tail_rational(q)
    } else if p <= p_high {
        // Central region
        let q = p - half;
        let r = q * q;
        let num = ((((c::<T>(ACK_A[0]) * r + c::<T>(ACK_A[1])) * r + c::<T>(ACK_A[2])) * r
            + c::<T>(ACK_A[3]))
            * r
            + c::<T>(ACK_A[4]))
            * r
            + c::<T>(ACK_A[5]);
        let den = ((((c::<T>(ACK_B[0]) * r + c::<T>(ACK_B[1])) * r + c::<T>(ACK_B[2])) * r
            + c::<T>(ACK_B[3]))
            * r
            + c::<T>(ACK_B[4]))
            * r
            + T::one();
        num * q / den
    } else {
        // Upper tail, by symmetry
        let q = (-two * (T::one() - p).ln()).sqrt();
        -tail_rational(q)
    }
}

/// Acklam tail-region rational, evaluated at `q = sqrt(-2 ln p_tail)`.
#[inline]
fn tail_rational<T: Float>(q: T) -> T {
    let num = ((((c::<T>(ACK_C[0]) * q + c::<T>(ACK_C[1])) * q + c::<T>(ACK_C[2])) * q
        + c::<T>(ACK_C[3]))
        * q
        + c::<T>(ACK_C[4]))
        * q
        + c::<T>(ACK_C[5]);
    let den = (((c::<T>(ACK_D[0]) * q + c::<T>(ACK_D[1])) * q + c::<T>(ACK_D[2])) * q
        + c::<T>(ACK_D[3]))
        * q
        + T::one();
    num / den
}
