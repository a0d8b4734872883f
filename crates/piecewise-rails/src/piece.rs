//! A polynomial restricted to a half-open interval.

use std::fmt;
use std::ops::{Div, Mul, Neg};

use piecewise_poly::{AffineMap, AlgebraError, BoundedPoly, Monomial};

use crate::bound::{self, INF, NEG_INF};

/// A polynomial that is active on `(lo, hi]` and zero elsewhere.
///
/// The window is half-open so that abutting pieces tile the line with no
/// point counted twice: `x = lo` belongs to the piece on the left,
/// `x = hi` to this one. Unbounded ends carry the sentinels from
/// [`crate::bound`].
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    /// Exclusive lower endpoint.
    pub lo: f64,
    /// Inclusive upper endpoint.
    pub hi: f64,
    /// The polynomial evaluated inside the window.
    pub content: BoundedPoly,
}

impl Piece {
    /// Creates a piece over `(lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if the window is empty (`lo >= hi`). Operations that can
    /// produce empty windows filter them out before constructing.
    #[must_use]
    pub fn new(lo: f64, hi: f64, content: BoundedPoly) -> Self {
        assert!(lo < hi, "piece window must be nonempty, got ({lo}, {hi}]");
        Self { lo, hi, content }
    }

    /// A piece covering the whole line.
    #[must_use]
    pub fn everywhere(content: BoundedPoly) -> Self {
        Self::new(NEG_INF, INF, content)
    }

    /// A piece active from `lo` upward.
    #[must_use]
    pub fn from_lo(lo: f64, content: BoundedPoly) -> Self {
        Self::new(lo, INF, content)
    }

    /// A piece active up to and including `hi`.
    #[must_use]
    pub fn up_to(hi: f64, content: BoundedPoly) -> Self {
        Self::new(NEG_INF, hi, content)
    }

    /// Whether `x` falls inside the activation window.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lo < x && x <= self.hi
    }

    /// The content at `x` inside the window, zero outside.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.contains(x) {
            self.content.evaluate(x)
        } else {
            0.0
        }
    }

    /// Scales the content; the window is unchanged.
    #[must_use]
    pub fn mul_scalar(&self, k: f64) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi,
            content: self.content.mul_scalar(k),
        }
    }

    /// Divides the content by a monomial; the window is unchanged.
    #[must_use]
    pub fn div_monomial(&self, m: Monomial) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi,
            content: self.content.div_monomial(m),
        }
    }

    /// Multiplies the content by an unrestricted polynomial; the window
    /// is unchanged, since the polynomial is nonzero over all of it.
    #[must_use]
    pub fn mul_poly(&self, p: &BoundedPoly) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi,
            content: self.content.mul_poly(p),
        }
    }

    /// Product of two pieces: contents multiply and windows intersect.
    /// A degenerate intersection means the product is identically zero,
    /// reported as `None` so callers can drop it rather than carry an
    /// empty piece.
    #[must_use]
    pub fn mul_piece(&self, other: &Self) -> Option<Self> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo < hi {
            Some(Self::new(lo, hi, self.content.mul_poly(&other.content)))
        } else {
            None
        }
    }

    /// The derivative inside the window. The jumps at the window edges
    /// are not differentiable and are not represented.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self {
            lo: self.lo,
            hi: self.hi,
            content: self.content.derivative(),
        }
    }

    /// The slope at `x`, zero outside the window.
    #[must_use]
    pub fn derivative_at(&self, x: f64) -> f64 {
        if self.contains(x) {
            self.content.derivative().evaluate(x)
        } else {
            0.0
        }
    }

    /// The indefinite integral, zero at the left edge.
    ///
    /// A piece that is zero outside its window integrates to a function
    /// that ramps across the window and then stays at the accumulated
    /// value, so the result is up to two pieces: the shifted
    /// antiderivative over `(lo, hi]` and a constant tail over `(hi, ∞)`.
    /// The shift is skipped when `lo` is unbounded (nothing accumulates
    /// before a sentinel) and the tail when `hi` is.
    ///
    /// # Errors
    ///
    /// Propagates [`AlgebraError::LogarithmicIntegral`] from the content.
    pub fn integral(&self) -> Result<Vec<Self>, AlgebraError> {
        let anti = self.content.integral()?;
        let ramp = if bound::is_lower_sentinel(self.lo) {
            anti
        } else {
            anti.add_scalar(-anti.evaluate(self.lo))
        };
        let mut out = vec![Self::new(self.lo, self.hi, ramp.clone())];
        if !bound::is_upper_sentinel(self.hi) {
            let settled = ramp.evaluate(self.hi);
            out.push(Self::new(self.hi, INF, BoundedPoly::constant(settled)));
        }
        Ok(out)
    }

    /// The integral accumulated from the left edge up to `x`. Zero
    /// before the window opens; saturates once the window closes.
    #[must_use]
    pub fn integral_at(&self, x: f64) -> f64 {
        if x <= self.lo {
            0.0
        } else {
            self.content.integral_over(self.lo, x.min(self.hi))
        }
    }

    /// The definite integral over `[lo, hi]`, zero when the range misses
    /// the window.
    #[must_use]
    pub fn integral_over(&self, lo: f64, hi: f64) -> f64 {
        if lo < self.hi && self.lo < hi {
            self.content
                .integral_over(lo.max(self.lo), hi.min(self.hi))
        } else {
            0.0
        }
    }

    /// The largest content value on the overlap of `[lo, hi]` with the
    /// window, zero when they miss.
    #[must_use]
    pub fn maximum(&self, lo: f64, hi: f64) -> f64 {
        let a = lo.max(self.lo);
        let b = hi.min(self.hi);
        if a < b {
            self.content.maximum(a, b)
        } else {
            0.0
        }
    }

    /// The smallest content value on the overlap, zero when they miss.
    #[must_use]
    pub fn minimum(&self, lo: f64, hi: f64) -> f64 {
        let a = lo.max(self.lo);
        let b = hi.min(self.hi);
        if a < b {
            self.content.minimum(a, b)
        } else {
            0.0
        }
    }

    /// Composition with an affine transform of the domain: the content
    /// composes and the window pulls back through the inverse transform.
    /// A direction-reversing transform delivers the endpoints swapped,
    /// so they are reordered.
    ///
    /// # Errors
    ///
    /// Propagates [`AlgebraError::LaurentComposition`] when a shift meets
    /// Laurent content.
    pub fn compose_affine(&self, map: &AffineMap) -> Result<Self, AlgebraError> {
        let inverse = map.inverse();
        let a = bound::remap_endpoint(self.lo, &inverse);
        let b = bound::remap_endpoint(self.hi, &inverse);
        Ok(Self::new(
            a.min(b),
            a.max(b),
            self.content.compose_affine(map)?,
        ))
    }
}

impl Neg for Piece {
    type Output = Piece;
    fn neg(self) -> Piece {
        self.mul_scalar(-1.0)
    }
}

impl Mul<f64> for Piece {
    type Output = Piece;
    fn mul(self, k: f64) -> Piece {
        self.mul_scalar(k)
    }
}

impl Div<f64> for Piece {
    type Output = Piece;
    fn div(self, k: f64) -> Piece {
        self.mul_scalar(1.0 / k)
    }
}

impl Mul<Monomial> for Piece {
    type Output = Piece;
    fn mul(self, m: Monomial) -> Piece {
        self.mul_poly(&m.into())
    }
}

impl Div<Monomial> for Piece {
    type Output = Piece;
    fn div(self, m: Monomial) -> Piece {
        self.div_monomial(m)
    }
}

impl Mul<BoundedPoly> for Piece {
    type Output = Piece;
    fn mul(self, p: BoundedPoly) -> Piece {
        self.mul_poly(&p)
    }
}

impl Mul<AffineMap> for Piece {
    type Output = Piece;
    fn mul(self, map: AffineMap) -> Piece {
        self.mul_poly(&map.to_poly())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lo: Box<dyn fmt::Display> = if bound::is_lower_sentinel(self.lo) {
            Box::new("-inf")
        } else {
            Box::new(self.lo)
        };
        let hi: Box<dyn fmt::Display> = if bound::is_upper_sentinel(self.hi) {
            Box::new("inf")
        } else {
            Box::new(self.hi)
        };
        write!(f, "({lo}, {hi}]: {}", self.content)
    }
}
