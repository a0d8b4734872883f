//! Interpolating constructors.
//!
//! Newton's divided-difference form builds the unique polynomial through
//! two, three, or four sample points; the Hermite constructor matches
//! values and first derivatives at two points. These are the building
//! blocks for piecewise spline approximations of non-polynomial functions.

use crate::poly::BoundedPoly;

fn x_minus(a: f64) -> BoundedPoly {
    BoundedPoly::new(0, &[-a, 1.0])
}

/// The line through `(x1, y1)` and `(x2, y2)`.
#[must_use]
pub fn linear_newton(x1: f64, y1: f64, x2: f64, y2: f64) -> BoundedPoly {
    let dydx = (y2 - y1) / (x2 - x1);
    BoundedPoly::new(0, &[y1 - dydx * x1, dydx])
}

/// The parabola through three points, by divided differences.
#[must_use]
pub fn quadratic_newton(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> BoundedPoly {
    let d12 = (y2 - y1) / (x2 - x1);
    let d23 = (y3 - y2) / (x3 - x2);
    let d123 = (d23 - d12) / (x3 - x1);
    let tail = x_minus(x1).mul_poly(&x_minus(x2)).mul_scalar(d123);
    x_minus(x1).mul_scalar(d12).add_scalar(y1).add_poly(&tail)
}

/// The cubic through four points, by divided differences.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn cubic_newton(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> BoundedPoly {
    let d12 = (y2 - y1) / (x2 - x1);
    let d23 = (y3 - y2) / (x3 - x2);
    let d34 = (y4 - y3) / (x4 - x3);
    let d123 = (d23 - d12) / (x3 - x1);
    let d234 = (d34 - d23) / (x4 - x2);
    let d1234 = (d234 - d123) / (x4 - x1);
    let t2 = x_minus(x1).mul_poly(&x_minus(x2));
    let t3 = t2.mul_poly(&x_minus(x3)).mul_scalar(d1234);
    x_minus(x1)
        .mul_scalar(d12)
        .add_scalar(y1)
        .add_poly(&t2.mul_scalar(d123))
        .add_poly(&t3)
}

/// The cubic matching value and slope at both endpoints.
///
/// Derived in the local coordinate `t = x − x0` with `X = x1 − x0`:
/// solving `p(0) = y0`, `p′(0) = d0`, `p(X) = y1`, `p′(X) = d1` gives
/// `p(t) = y0 + d0·t + (3u − v)t² + ((v − 2u)/X)t³` where
/// `u = (y1 − y0 − d0·X)/X²` and `v = (d1 − d0)/X`.
#[must_use]
pub fn cubic_hermite(x0: f64, y0: f64, d0: f64, x1: f64, y1: f64, d1: f64) -> BoundedPoly {
    let dx = x1 - x0;
    let u = (y1 - y0 - d0 * dx) / (dx * dx);
    let v = (d1 - d0) / dx;
    let local = BoundedPoly::new(0, &[y0, d0, 3.0 * u - v, (v - 2.0 * u) / dx]);
    match local.compose_affine(&crate::affine::AffineMap::shifting(-x0)) {
        Ok(p) => p,
        Err(_) => unreachable!("the local cubic has no negative exponents"),
    }
}
