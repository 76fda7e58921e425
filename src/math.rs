//! Mathematical utilities for sun position calculations.

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// One full turn in radians.
pub const TAU: f64 = 2.0 * PI;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Corrects an angle in radians into the range [0, 2π).
///
/// Negative angles become `2π - (|angle| mod 2π)`, angles of at least 2π are reduced
/// modulo 2π, everything else is returned unchanged.
///
/// The negative branch is not a plain Euclidean remainder: an exact negative multiple of
/// 2π (or a negative angle too small to register against 2π) maps to `2π` itself rather
/// than `0`. Sun positions depend on this exact behaviour, so keep it.
///
/// # Example
/// ```
/// # use entropedia_sun::math::{correct_angle, TAU};
/// assert_eq!(correct_angle(0.0), 0.0);
/// assert_eq!(correct_angle(TAU), 0.0);
/// assert!((correct_angle(-1.0) - (TAU - 1.0)).abs() < 1e-12);
/// ```
#[must_use]
pub fn correct_angle(angle: f64) -> f64 {
    if angle < 0.0 {
        return TAU - (-angle) % TAU;
    }
    if angle >= TAU {
        return angle % TAU;
    }
    angle
}

/// Fraction of the way `value` lies between `from` and `to`, clamped to [0, 1].
///
/// Returns 0 when `from == to`.
#[must_use]
pub fn inverse_lerp(from: f64, to: f64, value: f64) -> f64 {
    if from == to {
        return 0.0;
    }
    ((value - from) / (to - from)).clamp(0.0, 1.0)
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes round(x) using the appropriate function for the compilation target.
///
/// Halfway cases round away from zero on both backends.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}
