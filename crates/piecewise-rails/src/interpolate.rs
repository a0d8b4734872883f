//! Piecewise polynomial approximation of arbitrary functions.
//!
//! Each knot interval gets its own low-degree interpolant, so the
//! approximation error is controlled by knot spacing rather than by
//! polynomial degree; the pieces then participate in the full algebra
//! like any other.

use piecewise_poly::{cubic_hermite, cubic_newton, linear_newton, quadratic_newton, BoundedPoly};

use crate::bound::{INF, NEG_INF};
use crate::partition::Partition;
use crate::piece::Piece;
use crate::yard::Yard;

/// A line through samples of `f` at the interval endpoints, active on
/// `(lo, hi]`.
pub fn linear_piece(f: impl Fn(f64) -> f64, lo: f64, hi: f64) -> Piece {
    Piece::new(lo, hi, linear_newton(lo, f(lo), hi, f(hi)))
}

/// A parabola through samples at the endpoints and the midpoint,
/// active on `(lo, hi]`.
pub fn quadratic_piece(f: impl Fn(f64) -> f64, lo: f64, hi: f64) -> Piece {
    let mid = lo + (hi - lo) / 2.0;
    Piece::new(
        lo,
        hi,
        quadratic_newton(lo, f(lo), mid, f(mid), hi, f(hi)),
    )
}

/// A cubic through samples at the endpoints and the interior thirds,
/// active on `(lo, hi]`.
pub fn cubic_piece(f: impl Fn(f64) -> f64, lo: f64, hi: f64) -> Piece {
    let step = (hi - lo) / 3.0;
    let (x2, x3) = (lo + step, lo + 2.0 * step);
    Piece::new(
        lo,
        hi,
        cubic_newton(lo, f(lo), x2, f(x2), x3, f(x3), hi, f(hi)),
    )
}

/// A cubic matching `f` and `dfdx` at both endpoints, active on
/// `(lo, hi]`.
pub fn hermite_piece(
    f: impl Fn(f64) -> f64,
    dfdx: impl Fn(f64) -> f64,
    lo: f64,
    hi: f64,
) -> Piece {
    Piece::new(lo, hi, cubic_hermite(lo, f(lo), dfdx(lo), hi, f(hi), dfdx(hi)))
}

/// Piecewise-linear interpolant of `f` through the knots.
///
/// # Panics
///
/// Panics with fewer than two knots; knots must be strictly increasing.
pub fn linear_spline(f: impl Fn(f64) -> f64, knots: &[f64]) -> Yard {
    assert!(knots.len() >= 2, "a spline needs at least two knots");
    let pieces = knots
        .windows(2)
        .map(|k| linear_piece(&f, k[0], k[1]))
        .collect();
    Yard::new(pieces)
}

/// Piecewise-quadratic interpolant, sampling each interval's midpoint
/// for the third point.
///
/// # Panics
///
/// Panics with fewer than two knots.
pub fn quadratic_spline(f: impl Fn(f64) -> f64, knots: &[f64]) -> Yard {
    assert!(knots.len() >= 2, "a spline needs at least two knots");
    let pieces = knots
        .windows(2)
        .map(|k| quadratic_piece(&f, k[0], k[1]))
        .collect();
    Yard::new(pieces)
}

/// Piecewise-cubic interpolant, sampling each interval at thirds.
///
/// # Panics
///
/// Panics with fewer than two knots.
pub fn cubic_spline(f: impl Fn(f64) -> f64, knots: &[f64]) -> Yard {
    assert!(knots.len() >= 2, "a spline needs at least two knots");
    let pieces = knots
        .windows(2)
        .map(|k| cubic_piece(&f, k[0], k[1]))
        .collect();
    Yard::new(pieces)
}

/// Hermite spline through the knots as a canonical [`Partition`],
/// extended by constant tails beyond the first and last knot.
///
/// Matching `dfdx` at every knot makes the spline C¹ across cell
/// boundaries, and the flat tails make it total on the whole line.
///
/// # Panics
///
/// Panics with fewer than two knots.
pub fn spline_partition(
    f: impl Fn(f64) -> f64,
    dfdx: impl Fn(f64) -> f64,
    knots: &[f64],
) -> Partition {
    assert!(knots.len() >= 2, "a spline needs at least two knots");
    let first = knots[0];
    let last = knots[knots.len() - 1];
    let mut pieces = vec![Piece::new(NEG_INF, first, BoundedPoly::constant(f(first)))];
    for k in knots.windows(2) {
        pieces.push(hermite_piece(&f, &dfdx, k[0], k[1]));
    }
    pieces.push(Piece::new(last, INF, BoundedPoly::constant(f(last))));
    Partition::from_yard(&Yard::new(pieces))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn linear_spline_reproduces_a_line_exactly() {
        let f = |x: f64| 3.0 * x - 2.0;
        let s = linear_spline(f, &[-1.0, 0.5, 2.0, 4.0]);
        for x in [-0.5, 0.7, 1.9, 3.5] {
            assert!(close(s.evaluate(x), f(x), 1e-12));
        }
    }

    #[test]
    fn quadratic_spline_reproduces_a_parabola_exactly() {
        let f = |x: f64| x * x - x + 1.0;
        let s = quadratic_spline(f, &[-2.0, 0.0, 3.0]);
        for x in [-1.5, -0.5, 1.0, 2.5] {
            assert!(close(s.evaluate(x), f(x), 1e-12));
        }
    }

    #[test]
    fn cubic_spline_tracks_a_transcendental_function() {
        let knots: Vec<f64> = (0..=8).map(|i| f64::from(i) * 0.25).collect();
        let s = cubic_spline(f64::sin, &knots);
        for i in 1..40 {
            let x = f64::from(i) * 0.05;
            assert!(close(s.evaluate(x), x.sin(), 1e-4));
        }
    }

    #[test]
    fn hermite_spline_matches_values_and_slopes_at_knots() {
        let f = |x: f64| x.exp();
        let t = spline_partition(f, f, &[0.0, 1.0, 2.0]);
        for k in [1.0, 2.0] {
            assert!(close(t.evaluate(k), f(k), 1e-12));
        }
        // C¹: the derivative agrees from both sides of the interior knot
        let d = t.derivative();
        let left = d.evaluate(1.0);
        let right = d.evaluate(1.0 + 1e-9);
        assert!(close(left, right, 1e-6));
    }

    #[test]
    fn hermite_spline_extends_with_constant_tails() {
        let f = |x: f64| x * x;
        let dfdx = |x: f64| 2.0 * x;
        let t = spline_partition(f, dfdx, &[1.0, 2.0]);
        assert!(close(t.evaluate(-50.0), 1.0, 1e-12));
        assert!(close(t.evaluate(50.0), 4.0, 1e-12));
    }
}
