//! # bm-core
//!
//! Core numeric building blocks for better-math.
//!
//! This crate provides the pieces every container in `bm-math` is built on:
//!
//! - [`Numeric`] - Trait describing which scalar types may parameterize a vector or matrix
//! - [`scalar`] - Transcendental, rounding and utility functions over any [`Numeric`]
//! - [`interp`] - Linear, Bézier and cubic-spline evaluation
//! - [`Error`] - Failure modes surfaced by the checked (`try_*`) entry points
//!
//! ## Design
//!
//! Every function is a pure computation. Transcendental functions widen their
//! input to `f64`, call the standard library (or `libm` where std has no stable
//! equivalent) and narrow the result back to the element type:
//!
//! ```
//! use bm_core::scalar;
//!
//! assert_eq!(scalar::sqrt(9_i32), 3);
//! assert_eq!(scalar::sqrt(-4.0_f64), 0.0); // out of domain -> 0
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! bm-core (this crate)
//!    ^
//!    |
//!    +-- bm-math (vectors, matrices)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Forward serialization support to the `half::f16` element type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod interp;
pub mod numeric;
pub mod scalar;

pub use error::*;
pub use interp::*;
pub use numeric::*;

/// Prelude module for convenient imports.
///
/// ```
/// use bm_core::prelude::*;
///
/// let mid: f32 = lerp(0.0, 10.0, 0.5);
/// assert_eq!(mid, 5.0);
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::interp::{bezier2, bezier3, cubic_spline, lerp, try_cubic_spline};
    pub use crate::numeric::Numeric;
    pub use crate::scalar::{E, PHI, PI};
}
