//! # bm-math
//!
//! Fixed-size vectors and square matrices generic over the element type.
//!
//! This crate provides the linear algebra primitives of better-math:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - Vectors with dot/cross products, length, angle, reflection
//! - [`Mat2`], [`Mat3`], [`Mat4`] - Square matrices with determinant, inverse, rotations
//! - Re-exports of [`bm_core`] (scalar functions, interpolation, [`Numeric`])
//!
//! # Design
//!
//! Every type is a plain `Copy` value parameterized by any [`Numeric`]
//! element, so `Mat3<i32>`, `Mat3<f32>` and `Mat3<half::f16>` share one
//! implementation. Matrices are stored **row-major** and multiply **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Integer elements use wrapping addition, subtraction and multiplication,
//! so overflow never panics; only integer division by zero does, as it does
//! for `T` itself. Nothing returns an error implicitly. Degenerate cases
//! have documented sentinels: normalizing a zero vector gives the zero
//! vector, and inverting a singular matrix gives `None` (or `(zero, false)`
//! through [`Mat3::inverse_or_zero`]).
//!
//! # Usage
//!
//! ```rust
//! use bm_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [0.0, 1.0, 4.0],
//!     [5.0, 6.0, 0.0],
//! ]);
//! let inv = m.inverse().unwrap();
//!
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! let back = inv * (m * v);
//! assert!((back - v).length() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`bm_core`] - Element trait, scalar math, errors
//! - [`glam`] - Interop for `f32` vectors and matrices
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for every vector and matrix type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;

mod mat2;
mod mat3;
mod mat4;
mod vec2;
mod vec3;
mod vec4;

pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

pub use bm_core::{interp, scalar};
pub use bm_core::{bezier2, bezier3, cubic_spline, lerp, try_cubic_spline};
pub use bm_core::{Error, Numeric, Result};

/// Determinants with a smaller magnitude are treated as singular.
///
/// The comparison is done on the determinant widened to `f64`, for every
/// matrix size. Integer determinants are whole numbers, so for integer
/// element types this is an exact zero test.
///
/// The threshold is absolute, not relative to the matrix scale. A well
/// conditioned but small matrix is rejected: `Mat4::diagonal([1e-3; 4])` has
/// determinant `1e-12` and is reported singular. Rescale such matrices before
/// inverting.
pub const SINGULAR_EPSILON: f64 = 1e-10;

#[inline]
pub(crate) fn is_singular_det<T: Numeric>(det: T) -> bool {
    det.to_float().abs() < SINGULAR_EPSILON
}

// a*b - c*d, wrapping for integers
#[inline]
pub(crate) fn diff_of_products<T: Numeric>(a: T, b: T, c: T, d: T) -> T {
    a.mul_wrapping(b).sub_wrapping(c.mul_wrapping(d))
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
    pub use bm_core::prelude::*;
}
