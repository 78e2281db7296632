//! Interpolation utilities.
//!
//! - Linear interpolation ([`lerp`])
//! - Bézier curves ([`bezier2`], [`bezier3`])
//! - Piecewise cubic evaluation ([`cubic_spline`], [`try_cubic_spline`])
//!
//! Blend parameters are plain `f64` and are never clamped, so values
//! outside `[0, 1]` extrapolate.
//!
//! # Usage
//!
//! ```rust
//! use bm_core::{bezier3, lerp};
//!
//! assert_eq!(lerp(0, 10, 0.5), 5);
//! assert_eq!(bezier3(0.0, 5.0, 15.0, 20.0, 0.5), 10.0);
//! ```

use crate::{Error, Numeric, Result};
use tracing::warn;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use bm_core::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0); // extrapolates
/// ```
#[inline]
pub fn lerp<T: Numeric>(a: T, b: T, t: f64) -> T {
    let (a, b) = (a.to_float(), b.to_float());
    T::from_float(a + (b - a) * t)
}

/// Point on a quadratic Bézier curve.
///
/// # Formula
///
/// `(1-t)² p0 + 2(1-t)t p1 + t² p2`
///
/// ```rust
/// use bm_core::bezier2;
///
/// assert_eq!(bezier2(0.0, 10.0, 20.0, 0.5), 10.0);
/// ```
#[inline]
pub fn bezier2<T: Numeric>(p0: T, p1: T, p2: T, t: f64) -> T {
    let u = 1.0 - t;
    T::from_float(p0.to_float() * u * u + p1.to_float() * 2.0 * u * t + p2.to_float() * t * t)
}

/// Point on a cubic Bézier curve.
///
/// # Formula
///
/// `(1-t)³ p0 + 3(1-t)²t p1 + 3(1-t)t² p2 + t³ p3`
#[inline]
pub fn bezier3<T: Numeric>(p0: T, p1: T, p2: T, p3: T, t: f64) -> T {
    let u = 1.0 - t;
    let t2 = t * t;
    let u2 = u * u;
    T::from_float(
        p0.to_float() * u2 * u
            + p1.to_float() * 3.0 * u2 * t
            + p2.to_float() * 3.0 * u * t2
            + p3.to_float() * t * t2,
    )
}

/// Evaluates a piecewise cubic at `x`, reporting malformed input.
///
/// Segment `i` covers `[xs[i], xs[i+1])` and evaluates
/// `a[i] + b[i]*h + c[i]*h² + d[i]*h³` with `h = x - xs[i]`. The segment is
/// the rightmost one whose knot is `<= x`, found by a linear scan; knots are
/// expected to be sorted ascending and few.
///
/// # Errors
///
/// - [`Error::SplineLengthMismatch`] if the five slices differ in length
/// - [`Error::SplineTooFewPoints`] if there are fewer than two knots
/// - [`Error::SplineOutOfRange`] if `x` is outside `[xs[0], xs[n-1]]` (or NaN)
///
/// # Example
///
/// ```rust
/// use bm_core::try_cubic_spline;
///
/// // y = x² on [0, 2], as one segment per unit
/// let xs = [0.0, 1.0, 2.0];
/// let a = [0.0, 1.0, 4.0];
/// let b = [0.0, 2.0, 4.0];
/// let c = [1.0, 1.0, 1.0];
/// let d = [0.0, 0.0, 0.0];
/// assert_eq!(try_cubic_spline(&xs, &a, &b, &c, &d, 1.5).unwrap(), 2.25);
/// ```
pub fn try_cubic_spline<T: Numeric>(xs: &[T], a: &[T], b: &[T], c: &[T], d: &[T], x: T) -> Result<T> {
    let n = xs.len();
    if a.len() != n || b.len() != n || c.len() != n || d.len() != n {
        return Err(Error::SplineLengthMismatch {
            xs: n,
            a: a.len(),
            b: b.len(),
            c: c.len(),
            d: d.len(),
        });
    }
    if n < 2 {
        return Err(Error::SplineTooFewPoints { len: n });
    }

    let (first, last) = (xs[0], xs[n - 1]);
    if !(x >= first && x <= last) {
        return Err(Error::SplineOutOfRange {
            x: x.to_float(),
            min: first.to_float(),
            max: last.to_float(),
        });
    }

    let mut i = 0;
    while i < n - 1 && xs[i + 1] <= x {
        i += 1;
    }

    let h = x.to_float() - xs[i].to_float();
    let value = a[i].to_float() + b[i].to_float() * h + c[i].to_float() * h * h + d[i].to_float() * h * h * h;
    Ok(T::from_float(value))
}

/// Evaluates a piecewise cubic at `x`, returning 0 on malformed input.
///
/// Same evaluation as [`try_cubic_spline`]. Instead of an error, a warning is
/// emitted through `tracing` and zero is returned, so callers on a hot path
/// never have to branch on a `Result`.
///
/// ```rust
/// use bm_core::cubic_spline;
///
/// let xs = [0.0, 1.0];
/// let coef = [1.0, 1.0];
/// assert_eq!(cubic_spline(&xs, &coef, &coef, &coef, &coef, 9.0), 0.0);
/// ```
pub fn cubic_spline<T: Numeric>(xs: &[T], a: &[T], b: &[T], c: &[T], d: &[T], x: T) -> T {
    match try_cubic_spline(xs, a, b, c, d, x) {
        Ok(v) => v,
        Err(err) => {
            warn!(%err, "cubic_spline: invalid input, returning 0");
            T::zero()
        }
    }
}
