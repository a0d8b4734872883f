//! Piecewise polynomial functions and their closed algebra.
//!
//! A function is represented as pieces — polynomials active on half-open
//! intervals `(lo, hi]` — in one of two aggregate forms:
//!
//! * [`Yard`]: an unordered, possibly overlapping sum of pieces. Cheap to
//!   combine (addition is concatenation), linear-cost to evaluate.
//! * [`Partition`]: the canonical form, disjoint cells tiling the whole
//!   line. Logarithmic-cost to evaluate, single-pass binary operations.
//!
//! The algebra is closed under addition, subtraction, multiplication,
//! differentiation, composition with affine maps, and composition with
//! other piecewise functions; division is closed only against monomial
//! contents and integration fails symbolically only on `x⁻¹` terms.
//! Unbounded intervals carry [`f64::MAX`]-magnitude sentinels (see
//! [`bound`]) rather than IEEE infinities.
//!
//! # Example
//!
//! ```
//! use piecewise_poly::BoundedPoly;
//! use piecewise_rails::{bound, Partition, Piece, Yard};
//!
//! let y = Yard::new(vec![
//!     Piece::new(bound::NEG_INF, -1.0, BoundedPoly::new(0, &[3.0, 2.0, 1.0])),
//!     Piece::new(1.0, bound::INF, BoundedPoly::new(0, &[-1.0, 0.0, 1.0])),
//! ]);
//! let t = Partition::from_yard(&y);
//! assert_eq!(t.couplers(), &[bound::NEG_INF, -1.0, 1.0, bound::INF]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub mod bound;
pub mod compose;
pub mod interpolate;
pub mod metric;
pub mod partition;
pub mod piece;
pub mod yard;

pub use compose::{compose, compose_partitions};
pub use interpolate::{
    cubic_piece, cubic_spline, hermite_piece, linear_piece, linear_spline, quadratic_piece,
    quadratic_spline, spline_partition,
};
pub use metric::{distance, distance_partitions};
pub use partition::Partition;
pub use piece::Piece;
pub use yard::{IntoYard, Yard};

#[cfg(test)]
mod proptests;
