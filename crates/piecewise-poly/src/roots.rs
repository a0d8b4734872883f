//! Real root isolation and extrema.
//!
//! Solving f(x) = y underpins the piecewise composition machinery, which
//! needs every preimage of an interval endpoint. Degrees one and two use
//! the closed formulas. Higher degrees recurse: the critical points of f
//! are the roots of f′, one degree lower, and between consecutive critical
//! points f is monotone, so each sign change brackets exactly one root for
//! bisection to pin down. The recursion grounds out in the quadratic
//! formula and therefore terminates.

use crate::poly::BoundedPoly;

impl BoundedPoly {
    /// All real `x` with `f(x) = y`, in ascending order.
    ///
    /// Laurent terms are handled by factoring out the lowest power:
    /// `x^m·P(x) = 0` for `x ≠ 0` exactly where `P(x) = 0`, and `x = 0`
    /// joins the roots only when `m > 0`. If `f - y` is identically zero,
    /// every point solves it and an empty list is returned.
    #[must_use]
    pub fn solutions(&self, y: f64) -> Vec<f64> {
        let q = self.add_scalar(-y);
        let mut first = None;
        let mut last = None;
        for i in q.bounds().lo()..=q.bounds().hi() {
            if q.coeff(i) != 0.0 {
                if first.is_none() {
                    first = Some(i);
                }
                last = Some(i);
            }
        }
        let (Some(first), Some(last)) = (first, last) else {
            return Vec::new();
        };
        let c: Vec<f64> = (first..=last).map(|i| q.coeff(i)).collect();
        let mut roots = classic_roots(&c);
        if first > 0 {
            roots.push(0.0);
        }
        sort_dedup(&mut roots);
        roots
    }

    /// Critical points of `f` inside `[lo, hi]`, in ascending order.
    #[must_use]
    pub fn extrema(&self, lo: f64, hi: f64) -> Vec<f64> {
        let mut xs = self.derivative().solutions(0.0);
        xs.retain(|&x| lo <= x && x <= hi);
        xs
    }

    /// The largest value of `f` on `[lo, hi]`: the best of the endpoint
    /// values and the values at interior critical points.
    #[must_use]
    pub fn maximum(&self, lo: f64, hi: f64) -> f64 {
        let mut best = self.evaluate(lo).max(self.evaluate(hi));
        for x in self.derivative().solutions(0.0) {
            let x = x.clamp(lo, hi);
            best = best.max(self.evaluate(x));
        }
        best
    }

    /// The smallest value of `f` on `[lo, hi]`.
    #[must_use]
    pub fn minimum(&self, lo: f64, hi: f64) -> f64 {
        let mut best = self.evaluate(lo).min(self.evaluate(hi));
        for x in self.derivative().solutions(0.0) {
            let x = x.clamp(lo, hi);
            best = best.min(self.evaluate(x));
        }
        best
    }
}

/// Roots of a classic polynomial given as ascending coefficients
/// `c[0] + c[1]x + ...`, unsorted and possibly with near-duplicates.
fn classic_roots(c: &[f64]) -> Vec<f64> {
    let mut n = c.len();
    while n > 0 && c[n - 1] == 0.0 {
        n -= 1;
    }
    let c = &c[..n];
    match c.len() {
        0 | 1 => Vec::new(),
        2 => vec![-c[0] / c[1]],
        3 => quadratic_roots(c[0], c[1], c[2]),
        _ => bracketed_roots(c),
    }
}

fn quadratic_roots(c0: f64, c1: f64, c2: f64) -> Vec<f64> {
    let discriminant = c1 * c1 - 4.0 * c2 * c0;
    if discriminant < 0.0 {
        Vec::new()
    } else if discriminant == 0.0 {
        vec![-c1 / (2.0 * c2)]
    } else {
        let sq = discriminant.sqrt();
        vec![(-c1 - sq) / (2.0 * c2), (-c1 + sq) / (2.0 * c2)]
    }
}

/// Degree ≥ 3: partition the Cauchy disk by the critical points, bisect
/// each sign change, and keep critical points where the residual is tiny
/// (tangent roots, which never change sign).
fn bracketed_roots(c: &[f64]) -> Vec<f64> {
    let cn = c[c.len() - 1];
    let bound = 1.0
        + c[..c.len() - 1]
            .iter()
            .map(|k| (k / cn).abs())
            .fold(0.0, f64::max);

    let critical = classic_roots(&derivative_coeffs(c));
    let mut marks: Vec<f64> = critical
        .iter()
        .copied()
        .filter(|m| m.is_finite() && m.abs() < bound)
        .collect();
    marks.push(-bound);
    marks.push(bound);
    marks.sort_by(f64::total_cmp);

    let mut roots = Vec::new();
    for w in marks.windows(2) {
        let (a, b) = (w[0], w[1]);
        let (fa, fb) = (horner(c, a), horner(c, b));
        if fa == 0.0 {
            roots.push(a);
        } else if fa * fb < 0.0 {
            roots.push(bisect(c, a, b));
        }
    }
    if let Some(&b) = marks.last() {
        if horner(c, b) == 0.0 {
            roots.push(b);
        }
    }
    for &m in &marks[1..marks.len() - 1] {
        if horner(c, m).abs() <= f64::EPSILON.sqrt() * magnitude(c, m) {
            roots.push(m);
        }
    }
    roots
}

fn horner(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &k| acc * x + k)
}

/// Σ |cᵢ xⁱ|, the cancellation-free magnitude of the evaluation.
fn magnitude(c: &[f64], x: f64) -> f64 {
    let mut xi = 1.0;
    let mut total = 0.0;
    for &k in c {
        total += (k * xi).abs();
        xi *= x;
    }
    total
}

fn derivative_coeffs(c: &[f64]) -> Vec<f64> {
    c.iter()
        .enumerate()
        .skip(1)
        .map(|(i, &k)| i as f64 * k)
        .collect()
}

fn bisect(c: &[f64], mut lo: f64, mut hi: f64) -> f64 {
    let mut flo = horner(c, lo);
    for _ in 0..128 {
        let mid = lo * 0.5 + hi * 0.5;
        let fmid = horner(c, mid);
        if fmid == 0.0 {
            return mid;
        }
        if (flo < 0.0) == (fmid < 0.0) {
            lo = mid;
            flo = fmid;
        } else {
            hi = mid;
        }
        if hi - lo <= f64::EPSILON * (lo.abs() + hi.abs()) {
            break;
        }
    }
    lo * 0.5 + hi * 0.5
}

fn sort_dedup(xs: &mut Vec<f64>) {
    xs.sort_by(f64::total_cmp);
    xs.dedup_by(|a, b| (*a - *b).abs() <= 1e-9 * (1.0 + a.abs()));
}
