//! Bounded-degree polynomial arithmetic over `f64`.
//!
//! This crate provides the scalar-function layer of the piecewise algebra:
//! dense polynomials whose exponents are confined to a declared interval
//! `lo..=hi` (negative `lo` gives Laurent polynomials), affine domain
//! transforms, real root isolation, and interpolating constructors.
//!
//! The degree interval is part of every value and every operation derives
//! its result interval from a fixed propagation rule, so the representable
//! range of a computation is known before it runs. See [`bounds`] for the
//! rules.
//!
//! # Example
//!
//! ```
//! use piecewise_poly::BoundedPoly;
//!
//! let p = BoundedPoly::new(0, &[3.0, 2.0, 1.0]); // 3 + 2x + x²
//! assert_eq!(p.evaluate(2.0), 11.0);
//! let dp = p.derivative();                        // 2 + 2x
//! assert_eq!(dp.evaluate(2.0), 6.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]

pub mod affine;
pub mod bounds;
pub mod error;
pub mod newton;
pub mod poly;
pub mod roots;

pub use affine::{AffineMap, Monomial};
pub use bounds::DegreeBounds;
pub use error::AlgebraError;
pub use newton::{cubic_hermite, cubic_newton, linear_newton, quadratic_newton};
pub use poly::BoundedPoly;

#[cfg(test)]
mod proptests;
