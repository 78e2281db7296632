//! Error types for better-math operations.
//!
//! Most operations in this workspace never fail: out-of-domain input degrades
//! to a documented sentinel (zero, the zero vector, `None`). The [`Error`]
//! enum is returned only by the checked entry points, such as
//! [`try_cubic_spline`](crate::interp::try_cubic_spline) and
//! `try_inverse` on the matrix types, for callers that want to know *why*.
//!
//! # Usage
//!
//! ```rust
//! use bm_core::{try_cubic_spline, Error};
//!
//! let xs = [0.0, 1.0];
//! let a = [1.0, 2.0];
//! let err = try_cubic_spline(&xs, &a, &a, &a, &[0.0], 0.5).unwrap_err();
//! assert!(matches!(err, Error::SplineLengthMismatch { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Matrix determinant is (numerically) zero, so no inverse exists.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// Determinant widened to f64
        determinant: f64,
    },

    /// Knot and coefficient sequences have different lengths.
    #[error("spline input lengths differ: xs={xs}, a={a}, b={b}, c={c}, d={d}")]
    SplineLengthMismatch {
        /// Number of knots
        xs: usize,
        /// Number of constant coefficients
        a: usize,
        /// Number of linear coefficients
        b: usize,
        /// Number of quadratic coefficients
        c: usize,
        /// Number of cubic coefficients
        d: usize,
    },

    /// A spline needs at least two knots.
    #[error("spline needs at least 2 knots, got {len}")]
    SplineTooFewPoints {
        /// Number of knots supplied
        len: usize,
    },

    /// Query lies outside the first and last knot.
    #[error("spline query {x} outside [{min}, {max}]")]
    SplineOutOfRange {
        /// Query value
        x: f64,
        /// First knot
        min: f64,
        /// Last knot
        max: f64,
    },
}

impl Error {
    /// Returns true for the spline validation variants.
    pub fn is_spline(&self) -> bool {
        matches!(
            self,
            Error::SplineLengthMismatch { .. }
                | Error::SplineTooFewPoints { .. }
                | Error::SplineOutOfRange { .. }
        )
    }
}
