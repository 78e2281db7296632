//! Scalar math toolkit.
//!
//! Free functions over any [`Numeric`] element type. Each one widens its
//! arguments to `f64`, applies the matching `f64` primitive and narrows the
//! result back, so integer callers get truncated results:
//!
//! ```
//! use bm_core::scalar::{cos, sqrt, PI};
//!
//! assert_eq!(sqrt(10_i32), 3);
//! assert!((cos(PI) + 1.0).abs() < 1e-12);
//! ```
//!
//! # Domain Policy
//!
//! Functions with a restricted real domain do not produce NaN or infinities
//! for the common misuse cases:
//!
//! - [`sqrt`] returns 0 for negative input
//! - [`log`], [`log2`], [`log10`] return 0 for input `<= 0`
//!
//! Other functions (`asin`, `acosh`, ...) follow `f64` semantics; for float
//! element types that may be NaN, for integer types it narrows to 0.

use crate::Numeric;

// ============================================================================
// Constants
// ============================================================================

/// The ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number, the base of the natural logarithm.
pub const E: f64 = std::f64::consts::E;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

#[inline]
fn map1<T: Numeric>(x: T, f: impl FnOnce(f64) -> f64) -> T {
    T::from_float(f(x.to_float()))
}

#[inline]
fn map2<T: Numeric>(x: T, y: T, f: impl FnOnce(f64, f64) -> f64) -> T {
    T::from_float(f(x.to_float(), y.to_float()))
}

// ============================================================================
// Basic arithmetic
// ============================================================================

/// Absolute value.
///
/// Integer types stay in their own arithmetic, so no precision is lost for
/// large 64-bit values. `abs` of an unsigned value is the value itself.
///
/// ```
/// use bm_core::scalar::abs;
///
/// assert_eq!(abs(-5_i64), 5);
/// assert_eq!(abs(-2.5_f32), 2.5);
/// assert_eq!(abs(7_u8), 7);
/// ```
#[inline]
pub fn abs<T: Numeric>(x: T) -> T {
    if T::IS_FLOAT {
        map1(x, f64::abs)
    } else if x < T::zero() {
        x.negate()
    } else {
        x
    }
}

/// Restricts `x` to `[min, max]`.
///
/// No check that `min <= max`; `min` wins when they cross.
///
/// ```
/// use bm_core::scalar::clamp;
///
/// assert_eq!(clamp(5, 1, 10), 5);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(15, 1, 10), 10);
/// ```
#[inline]
pub fn clamp<T: Numeric>(x: T, min: T, max: T) -> T {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// The greater of two values.
#[inline]
pub fn max<T: Numeric>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// The lesser of two values.
#[inline]
pub fn min<T: Numeric>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Floating-point remainder of `x / y`, carrying the sign of `x`.
///
/// ```
/// use bm_core::scalar::modulo;
///
/// assert_eq!(modulo(7.0, 3.0), 1.0);
/// assert_eq!(modulo(-7.0, 3.0), -1.0);
/// ```
#[inline]
pub fn modulo<T: Numeric>(x: T, y: T) -> T {
    map2(x, y, |x, y| x % y)
}

/// `x` raised to the power `y`.
#[inline]
pub fn pow<T: Numeric>(x: T, y: T) -> T {
    map2(x, y, f64::powf)
}

/// Nearest integer, rounding half away from zero.
///
/// ```
/// use bm_core::scalar::round;
///
/// assert_eq!(round(1.5), 2.0);
/// assert_eq!(round(-1.5), -2.0);
/// assert_eq!(round(2.4_f32), 2.0);
/// ```
#[inline]
pub fn round<T: Numeric>(x: T) -> T {
    map1(x, f64::round)
}

/// Integer part of `x`, discarding the fraction.
#[inline]
pub fn trunc<T: Numeric>(x: T) -> T {
    map1(x, f64::trunc)
}

/// Square root. Returns 0 for negative input.
///
/// ```
/// use bm_core::scalar::sqrt;
///
/// assert_eq!(sqrt(9.0), 3.0);
/// assert_eq!(sqrt(-1.0), 0.0);
/// ```
#[inline]
pub fn sqrt<T: Numeric>(x: T) -> T {
    if x < T::zero() {
        return T::zero();
    }
    map1(x, f64::sqrt)
}

/// Cube root. Defined for negative input.
#[inline]
pub fn cbrt<T: Numeric>(x: T) -> T {
    map1(x, f64::cbrt)
}

/// `x * 2^exp`.
///
/// ```
/// use bm_core::scalar::ldexp;
///
/// assert_eq!(ldexp(1.0, 3), 8.0);
/// assert_eq!(ldexp(3_i32, 2), 12);
/// ```
#[inline]
pub fn ldexp<T: Numeric>(x: T, exp: i32) -> T {
    map1(x, |x| libm::ldexp(x, exp))
}

/// `sqrt(x*x + y*y)` without intermediate overflow.
#[inline]
pub fn hypot<T: Numeric>(x: T, y: T) -> T {
    map2(x, y, f64::hypot)
}

/// True if `x` is negative, including negative zero.
#[inline]
pub fn signbit<T: Numeric>(x: T) -> bool {
    x.to_float().is_sign_negative()
}

/// Magnitude of `x` with the sign of `sign`.
#[inline]
pub fn copysign<T: Numeric>(x: T, sign: T) -> T {
    map2(x, sign, f64::copysign)
}

/// Positive difference: `x - y` if positive, otherwise 0.
///
/// ```
/// use bm_core::scalar::dim;
///
/// assert_eq!(dim(5, 3), 2);
/// assert_eq!(dim(3, 5), 0);
/// ```
#[inline]
pub fn dim<T: Numeric>(x: T, y: T) -> T {
    map2(x, y, |x, y| {
        let d = x - y;
        if d <= 0.0 { 0.0 } else { d }
    })
}

/// Smallest integer value `>= x`.
#[inline]
pub fn ceil<T: Numeric>(x: T) -> T {
    map1(x, f64::ceil)
}

/// Largest integer value `<= x`.
#[inline]
pub fn floor<T: Numeric>(x: T) -> T {
    map1(x, f64::floor)
}

// ============================================================================
// Trigonometric
// ============================================================================

/// Sine of `x` radians.
#[inline]
pub fn sin<T: Numeric>(x: T) -> T {
    map1(x, f64::sin)
}

/// Cosine of `x` radians.
#[inline]
pub fn cos<T: Numeric>(x: T) -> T {
    map1(x, f64::cos)
}

/// Tangent of `x` radians.
#[inline]
pub fn tan<T: Numeric>(x: T) -> T {
    map1(x, f64::tan)
}

/// Arc sine, in `[-π/2, π/2]`.
#[inline]
pub fn asin<T: Numeric>(x: T) -> T {
    map1(x, f64::asin)
}

/// Arc cosine, in `[0, π]`.
#[inline]
pub fn acos<T: Numeric>(x: T) -> T {
    map1(x, f64::acos)
}

/// Arc tangent, in `[-π/2, π/2]`.
#[inline]
pub fn atan<T: Numeric>(x: T) -> T {
    map1(x, f64::atan)
}

/// Four-quadrant arc tangent of `y / x`, in `[-π, π]`.
///
/// ```
/// use bm_core::scalar::{atan2, PI};
///
/// assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < 1e-12);
/// assert!((atan2(-1.0, -1.0) + 3.0 * PI / 4.0).abs() < 1e-12);
/// ```
#[inline]
pub fn atan2<T: Numeric>(y: T, x: T) -> T {
    map2(y, x, f64::atan2)
}

// ============================================================================
// Hyperbolic
// ============================================================================

/// Hyperbolic sine.
#[inline]
pub fn sinh<T: Numeric>(x: T) -> T {
    map1(x, f64::sinh)
}

/// Hyperbolic cosine.
#[inline]
pub fn cosh<T: Numeric>(x: T) -> T {
    map1(x, f64::cosh)
}

/// Hyperbolic tangent.
#[inline]
pub fn tanh<T: Numeric>(x: T) -> T {
    map1(x, f64::tanh)
}

/// Inverse hyperbolic sine.
#[inline]
pub fn asinh<T: Numeric>(x: T) -> T {
    map1(x, f64::asinh)
}

/// Inverse hyperbolic cosine.
#[inline]
pub fn acosh<T: Numeric>(x: T) -> T {
    map1(x, f64::acosh)
}

/// Inverse hyperbolic tangent.
#[inline]
pub fn atanh<T: Numeric>(x: T) -> T {
    map1(x, f64::atanh)
}

// ============================================================================
// Exponential and logarithmic
// ============================================================================

/// `e^x`.
#[inline]
pub fn exp<T: Numeric>(x: T) -> T {
    map1(x, f64::exp)
}

/// `2^x`.
#[inline]
pub fn exp2<T: Numeric>(x: T) -> T {
    map1(x, f64::exp2)
}

/// Natural logarithm. Returns 0 for `x <= 0`.
///
/// ```
/// use bm_core::scalar::{log, E};
///
/// assert_eq!(log(1.0), 0.0);
/// assert!((log(E) - 1.0).abs() < 1e-12);
/// assert_eq!(log(-3.0), 0.0);
/// ```
#[inline]
pub fn log<T: Numeric>(x: T) -> T {
    if x <= T::zero() {
        return T::zero();
    }
    map1(x, f64::ln)
}

/// Base-2 logarithm. Returns 0 for `x <= 0`.
#[inline]
pub fn log2<T: Numeric>(x: T) -> T {
    if x <= T::zero() {
        return T::zero();
    }
    map1(x, f64::log2)
}

/// Base-10 logarithm. Returns 0 for `x <= 0`.
#[inline]
pub fn log10<T: Numeric>(x: T) -> T {
    if x <= T::zero() {
        return T::zero();
    }
    map1(x, f64::log10)
}

/// Gamma function.
///
/// ```
/// use bm_core::scalar::gamma;
///
/// assert!((gamma(5.0_f64) - 24.0).abs() < 1e-9);
/// ```
#[inline]
pub fn gamma<T: Numeric>(x: T) -> T {
    map1(x, libm::tgamma)
}

/// Natural log of `|Γ(x)|` and the sign of `Γ(x)` (`1` or `-1`).
#[inline]
pub fn lgamma<T: Numeric>(x: T) -> (T, i32) {
    let (value, sign) = libm::lgamma_r(x.to_float());
    (T::from_float(value), sign)
}

/// Binary exponent of `x`.
///
/// ```
/// use bm_core::scalar::ilogb;
///
/// assert_eq!(ilogb(8.0), 3);
/// assert_eq!(ilogb(0.5), -1);
/// ```
#[inline]
pub fn ilogb<T: Numeric>(x: T) -> i32 {
    libm::ilogb(x.to_float())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sqrt_negative_is_zero() {
        assert_eq!(sqrt(-4.0_f64), 0.0);
        assert_eq!(sqrt(-4_i32), 0);
        assert_eq!(sqrt(16_u32), 4);
    }

    #[test]
    fn test_logs_nonpositive_are_zero() {
        for x in [0.0_f64, -1.0, -1e-300] {
            assert_eq!(log(x), 0.0);
            assert_eq!(log2(x), 0.0);
            assert_eq!(log10(x), 0.0);
        }
        assert_eq!(log2(8_u8), 3);
        assert_eq!(log10(100.0_f32), 2.0);
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round(0.5_f64), 1.0);
        assert_eq!(round(-0.5_f64), -1.0);
        assert_eq!(round(2.5_f64), 3.0);
        assert_eq!(round(-2.5_f64), -3.0);
    }

    #[test]
    fn test_trunc_floor_ceil() {
        assert_eq!(trunc(3.9_f64), 3.0);
        assert_eq!(trunc(-3.9_f64), -3.0);
        assert_eq!(floor(-1.2_f64), -2.0);
        assert_eq!(ceil(-1.2_f64), -1.0);
        assert_eq!(ceil(1.2_f32), 2.0);
    }

    #[test]
    fn test_abs_integers() {
        assert_eq!(abs(i64::MAX - 1), i64::MAX - 1);
        assert_eq!(abs(-(i64::MAX - 1)), i64::MAX - 1);
        assert_eq!(abs(-0.0_f64).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(max(3, 5), 5);
        assert_eq!(min(3, 5), 3);
        assert_eq!(max(7.2, 7.1), 7.2);
        assert_eq!(min(7.2, 7.1), 7.1);
    }

    #[test]
    fn test_trig() {
        assert_abs_diff_eq!(sin(PI / 2.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cos(0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tan(PI / 4.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(asin(1.0), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(acos(0.0), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan(1.0), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trig_integer_truncates() {
        // sin(1 rad) = 0.84 narrows to 0
        assert_eq!(sin(1_i32), 0);
        assert_eq!(cos(0_i32), 1);
    }

    #[test]
    fn test_hyperbolic() {
        assert_abs_diff_eq!(sinh(1.0), 1.1752011936438014, epsilon = 1e-12);
        assert_abs_diff_eq!(cosh(1.0), 1.5430806348152437, epsilon = 1e-12);
        assert_abs_diff_eq!(tanh(1.0), 0.7615941559557649, epsilon = 1e-12);
        assert_abs_diff_eq!(asinh(1.0), 0.881373587019543, epsilon = 1e-12);
        assert_abs_diff_eq!(acosh(2.0), 1.3169578969248166, epsilon = 1e-12);
        assert_abs_diff_eq!(atanh(0.5), 0.5493061443340549, epsilon = 1e-12);
    }

    #[test]
    fn test_exp() {
        assert_abs_diff_eq!(exp(1.0), E, epsilon = 1e-12);
        assert_eq!(exp2(3_i32), 8);
        assert_eq!(exp(0.0_f32), 1.0);
    }

    #[test]
    fn test_pow_mod_hypot() {
        assert_eq!(pow(2, 3), 8);
        assert_eq!(pow(9.0, 0.5), 3.0);
        assert_eq!(modulo(7, 3), 1);
        assert_eq!(hypot(3.0, 4.0), 5.0);
        assert_eq!(cbrt(-27.0), -3.0);
    }

    #[test]
    fn test_sign_helpers() {
        assert!(signbit(-1));
        assert!(!signbit(1.0));
        assert!(signbit(-0.0_f64));
        assert_eq!(copysign(1.0, -1.0), -1.0);
        assert_eq!(copysign(-3_i32, 2), 3);
        assert_eq!(dim(5.0, 3.0), 2.0);
        assert_eq!(dim(3.0, 5.0), 0.0);
    }

    #[test]
    fn test_gamma_family() {
        assert_abs_diff_eq!(gamma(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(gamma(0.5), PI.sqrt(), epsilon = 1e-12);

        let (lg, sign) = lgamma(2.0);
        assert_abs_diff_eq!(lg, 0.0, epsilon = 1e-12);
        assert_eq!(sign, 1);

        let (_, sign) = lgamma(-0.5);
        assert_eq!(sign, -1);

        assert_eq!(ilogb(1024_u32), 10);
    }
}
