//! Symbolic-numeric algebra for piecewise polynomial functions.
//!
//! This crate re-exports the workspace members under stable module
//! names:
//!
//! * [`poly`] — bounded-degree (Laurent) polynomials over `f64`, affine
//!   domain transforms, root isolation, interpolating constructors.
//! * [`rails`] — pieces, overlapping sums ([`rails::Yard`]), canonical
//!   partitions ([`rails::Partition`]), piecewise composition, splines,
//!   and the RMS metric.
//!
//! # Example
//!
//! ```
//! use piecewise::prelude::*;
//!
//! // approximate sin with a C¹ spline, then integrate it exactly
//! let knots: Vec<f64> = (0..=12).map(|i| f64::from(i) * 0.25).collect();
//! let s = spline_partition(f64::sin, f64::cos, &knots);
//! let total = s.integral_over(0.0, 3.0);
//! assert!((total - (1.0 - 3.0f64.cos())).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use piecewise_poly as poly;
pub use piecewise_rails as rails;

/// The most common imports in one place.
pub mod prelude {
    pub use piecewise_poly::{
        cubic_hermite, cubic_newton, linear_newton, quadratic_newton, AffineMap, AlgebraError,
        BoundedPoly, DegreeBounds, Monomial,
    };
    pub use piecewise_rails::{
        bound, compose, compose_partitions, cubic_piece, cubic_spline, distance,
        distance_partitions, hermite_piece, linear_piece, linear_spline, quadratic_piece,
        quadratic_spline, spline_partition, IntoYard, Partition, Piece, Yard,
    };
}
