//! Root-mean-square distance between piecewise functions.

use crate::partition::Partition;
use crate::yard::IntoYard;

/// The RMS distance between `f` and `g` over `[lo, hi]`:
/// `√(∫(f−g)² / (hi−lo))`. Accepts anything convertible to a sum of
/// pieces, so scalars, polynomials, pieces, yards, and partitions all
/// compare directly.
///
/// Normalizing by the interval length makes thresholds transferable
/// across ranges. The squared difference is a piecewise polynomial, so
/// the integral is exact; rounding can still leave it a hair below zero
/// for near-identical inputs, which is clamped before the square root.
#[must_use]
pub fn distance(f: impl IntoYard, g: impl IntoYard, lo: f64, hi: f64) -> f64 {
    let diff = f.into_yard() - g.into_yard();
    let squared = diff.clone() * diff;
    (squared.integral_over(lo, hi).max(0.0) / (hi - lo)).sqrt()
}

/// [`distance`] for canonical partitions.
#[must_use]
pub fn distance_partitions(f: &Partition, g: &Partition, lo: f64, hi: f64) -> f64 {
    distance(&f.yard(), &g.yard(), lo, hi)
}
