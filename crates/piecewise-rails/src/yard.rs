//! Unordered sums of pieces.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use piecewise_poly::{AffineMap, AlgebraError, BoundedPoly, Monomial};

use crate::bound;
use crate::piece::Piece;

/// A function represented as the sum of its pieces, in no particular
/// order and with overlap permitted.
///
/// This is the cheap-to-build form: addition and subtraction are
/// concatenation, multiplication is a pairwise cross product. The cost is
/// that evaluation touches every piece; canonicalize to a
/// [`crate::Partition`] when evaluation dominates.
#[derive(Clone, Debug, PartialEq)]
pub struct Yard {
    pieces: Vec<Piece>,
}

/// Conversion into a [`Yard`], implemented by everything the piecewise
/// operators accept on their right-hand side. Scalars, domain transforms,
/// and polynomials convert to a single piece covering the whole line, so
/// one generic operator impl serves every operand pairing.
pub trait IntoYard {
    /// Converts the value into a sum of pieces.
    fn into_yard(self) -> Yard;
}

impl Yard {
    /// Creates a yard from its pieces.
    #[must_use]
    pub fn new(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }

    /// The empty sum, identically zero.
    #[must_use]
    pub fn zero() -> Self {
        Self { pieces: Vec::new() }
    }

    /// The pieces, in storage order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Consumes the yard, yielding its pieces.
    #[must_use]
    pub fn into_pieces(self) -> Vec<Piece> {
        self.pieces
    }

    /// The sum of all active pieces at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.pieces.iter().map(|p| p.evaluate(x)).sum()
    }

    /// Scales every piece.
    #[must_use]
    pub fn mul_scalar(&self, k: f64) -> Self {
        Self {
            pieces: self.pieces.iter().map(|p| p.mul_scalar(k)).collect(),
        }
    }

    /// Divides every piece by a monomial.
    #[must_use]
    pub fn div_monomial(&self, m: Monomial) -> Self {
        Self {
            pieces: self.pieces.iter().map(|p| p.div_monomial(m)).collect(),
        }
    }

    /// Piecewise derivative; linear, so it distributes over the sum.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self {
            pieces: self.pieces.iter().map(Piece::derivative).collect(),
        }
    }

    /// Piecewise indefinite integral, zero at −∞.
    ///
    /// # Errors
    ///
    /// Propagates [`AlgebraError::LogarithmicIntegral`] if any piece
    /// holds an `x⁻¹` term.
    pub fn integral(&self) -> Result<Self, AlgebraError> {
        let mut pieces = Vec::with_capacity(self.pieces.len() * 2);
        for p in &self.pieces {
            pieces.extend(p.integral()?);
        }
        Ok(Self { pieces })
    }

    /// The slope at `x`, summed over the active pieces.
    #[must_use]
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.pieces.iter().map(|p| p.derivative_at(x)).sum()
    }

    /// The integral accumulated from −∞ up to `x`.
    #[must_use]
    pub fn integral_at(&self, x: f64) -> f64 {
        self.pieces.iter().map(|p| p.integral_at(x)).sum()
    }

    /// The definite integral over `[lo, hi]`.
    #[must_use]
    pub fn integral_over(&self, lo: f64, hi: f64) -> f64 {
        self.pieces.iter().map(|p| p.integral_over(lo, hi)).sum()
    }

    /// Every window endpoint, sorted and deduplicated; the raw material
    /// for canonicalization.
    #[must_use]
    pub fn couplers(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self
            .pieces
            .iter()
            .flat_map(|p| [p.lo, p.hi])
            .collect();
        out.sort_by(f64::total_cmp);
        out.dedup();
        out
    }

    /// Composes every piece with an affine transform of the domain.
    ///
    /// # Errors
    ///
    /// Propagates [`AlgebraError::LaurentComposition`] when a shift meets
    /// a Laurent piece.
    pub fn compose_affine(&self, map: &AffineMap) -> Result<Self, AlgebraError> {
        let pieces = self
            .pieces
            .iter()
            .map(|p| p.compose_affine(map))
            .collect::<Result<_, _>>()?;
        Ok(Self { pieces })
    }

    /// The same function clipped to `(lo, hi]`: windows intersect with
    /// the range and pieces that miss it entirely are dropped.
    #[must_use]
    pub fn restriction(&self, lo: f64, hi: f64) -> Self {
        let pieces = self
            .pieces
            .iter()
            .filter_map(|p| {
                let a = p.lo.max(lo);
                let b = p.hi.min(hi);
                if a < b {
                    Some(Piece::new(a, b, p.content.clone()))
                } else {
                    None
                }
            })
            .collect();
        Self { pieces }
    }

    /// The function frozen at its boundary values outside `(lo, hi]`:
    /// the restriction plus constant tails holding the values at `lo`
    /// and `hi`. A sentinel endpoint has no outside, so its tail is
    /// skipped. Useful for extending an approximation beyond the range
    /// it was fitted on.
    #[must_use]
    pub fn clamped(&self, lo: f64, hi: f64) -> Self {
        let mut out = self.restriction(lo, hi);
        if !bound::is_lower_sentinel(lo) {
            out.pieces
                .push(Piece::up_to(lo, BoundedPoly::constant(self.evaluate(lo))));
        }
        if !bound::is_upper_sentinel(hi) {
            out.pieces
                .push(Piece::from_lo(hi, BoundedPoly::constant(self.evaluate(hi))));
        }
        out
    }
}

impl IntoYard for Yard {
    fn into_yard(self) -> Yard {
        self
    }
}

impl IntoYard for &Yard {
    fn into_yard(self) -> Yard {
        self.clone()
    }
}

impl IntoYard for Piece {
    fn into_yard(self) -> Yard {
        Yard { pieces: vec![self] }
    }
}

impl IntoYard for BoundedPoly {
    fn into_yard(self) -> Yard {
        Piece::everywhere(self).into_yard()
    }
}

impl IntoYard for Monomial {
    fn into_yard(self) -> Yard {
        Piece::everywhere(self.into()).into_yard()
    }
}

impl IntoYard for AffineMap {
    fn into_yard(self) -> Yard {
        Piece::everywhere(self.to_poly()).into_yard()
    }
}

impl IntoYard for f64 {
    fn into_yard(self) -> Yard {
        Piece::everywhere(BoundedPoly::constant(self)).into_yard()
    }
}

impl<R: IntoYard> Add<R> for Yard {
    type Output = Yard;

    fn add(mut self, rhs: R) -> Yard {
        self.pieces.extend(rhs.into_yard().pieces);
        self
    }
}

impl<R: IntoYard> Sub<R> for Yard {
    type Output = Yard;

    fn sub(mut self, rhs: R) -> Yard {
        let negated = rhs.into_yard().mul_scalar(-1.0);
        self.pieces.extend(negated.pieces);
        self
    }
}

impl<R: IntoYard> AddAssign<R> for Yard {
    fn add_assign(&mut self, rhs: R) {
        self.pieces.extend(rhs.into_yard().pieces);
    }
}

impl<R: IntoYard> SubAssign<R> for Yard {
    fn sub_assign(&mut self, rhs: R) {
        let negated = rhs.into_yard().mul_scalar(-1.0);
        self.pieces.extend(negated.pieces);
    }
}

impl<R: IntoYard> Mul<R> for Yard {
    type Output = Yard;

    /// Cross product of the two sums; degenerate intersections vanish.
    fn mul(self, rhs: R) -> Yard {
        let rhs = rhs.into_yard();
        let mut pieces = Vec::with_capacity(self.pieces.len() * rhs.pieces.len());
        for a in &self.pieces {
            for b in &rhs.pieces {
                if let Some(p) = a.mul_piece(b) {
                    pieces.push(p);
                }
            }
        }
        Yard { pieces }
    }
}

impl Div<f64> for Yard {
    type Output = Yard;

    fn div(self, k: f64) -> Yard {
        self.mul_scalar(1.0 / k)
    }
}

impl Div<Monomial> for Yard {
    type Output = Yard;

    fn div(self, m: Monomial) -> Yard {
        self.div_monomial(m)
    }
}

impl Neg for Yard {
    type Output = Yard;

    fn neg(self) -> Yard {
        self.mul_scalar(-1.0)
    }
}

impl fmt::Display for Yard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pieces.is_empty() {
            return write!(f, "0");
        }
        for (i, p) in self.pieces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::{INF, NEG_INF};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    fn sample_yard() -> Yard {
        // 3 + 2x + x² on (-∞, -1], plus -1 + x² on (1, ∞)
        Yard::new(vec![
            Piece::new(NEG_INF, -1.0, BoundedPoly::new(0, &[3.0, 2.0, 1.0])),
            Piece::new(1.0, INF, BoundedPoly::new(0, &[-1.0, 0.0, 1.0])),
        ])
    }

    #[test]
    fn evaluation_sums_active_pieces() {
        let y = sample_yard();
        assert!(close(y.evaluate(-2.0), 3.0));
        assert_eq!(y.evaluate(0.0), 0.0); // gap between the pieces
        assert!(close(y.evaluate(2.0), 3.0));
    }

    #[test]
    fn addition_concatenates() {
        let y = sample_yard() + 1.0;
        assert_eq!(y.pieces().len(), 3);
        assert!(close(y.evaluate(0.0), 1.0));
        assert!(close(y.evaluate(-2.0), 4.0));
    }

    #[test]
    fn compound_assignment_accumulates() {
        let mut y = sample_yard();
        y += 2.0;
        y -= BoundedPoly::identity();
        assert!(close(y.evaluate(0.0), 2.0));
        assert!(close(y.evaluate(2.0), 3.0 + 2.0 - 2.0));
    }

    #[test]
    fn couplers_are_sorted_and_deduplicated() {
        let y = sample_yard() + Piece::new(-1.0, 1.0, BoundedPoly::constant(1.0));
        assert_eq!(y.couplers(), vec![NEG_INF, -1.0, 1.0, INF]);
    }

    #[test]
    fn subtraction_cancels_pointwise() {
        let y = sample_yard();
        let d = y.clone() - &y;
        for x in [-3.0, -1.0, 0.0, 1.5, 4.0] {
            assert!(close(d.evaluate(x), 0.0));
        }
    }

    #[test]
    fn multiplication_matches_pointwise() {
        let a = sample_yard();
        let b = a.clone() + 2.0;
        let prod = a.clone() * &b;
        for x in [-3.0, -1.0, 0.5, 2.0] {
            assert!(close(prod.evaluate(x), a.evaluate(x) * b.evaluate(x)));
        }
    }

    #[test]
    fn disjoint_factors_produce_nothing() {
        let a = Piece::new(0.0, 1.0, BoundedPoly::constant(1.0)).into_yard();
        let b = Piece::new(2.0, 3.0, BoundedPoly::constant(1.0)).into_yard();
        assert!((a * b).pieces().is_empty());
    }

    #[test]
    fn monomial_division_round_trips() {
        let y = sample_yard().restriction(0.5, 100.0);
        let m = Monomial::new(2.0, 1);
        let back = (y.clone() * m) / m;
        for x in [0.75, 2.0, 50.0] {
            assert!(close(back.evaluate(x), y.evaluate(x)));
        }
    }

    #[test]
    fn derivative_of_integral_recovers_the_function() {
        let y = sample_yard().restriction(-10.0, 10.0);
        let back = y.integral().unwrap().derivative();
        // interior points of each piece, away from the window jumps
        for x in [-5.0, -2.0, 3.0, 8.0] {
            assert!(close(back.evaluate(x), y.evaluate(x)));
        }
    }

    #[test]
    fn logarithmic_content_cannot_integrate_indefinitely() {
        let y = Piece::new(1.0, 2.0, BoundedPoly::new(-1, &[1.0])).into_yard();
        assert_eq!(y.integral(), Err(AlgebraError::LogarithmicIntegral));
        // the definite integral is still available
        assert!(close(y.integral_over(1.0, 2.0), 2.0f64.ln()));
    }

    #[test]
    fn restriction_clips_windows() {
        let y = sample_yard().restriction(-2.0, 2.0);
        assert_eq!(y.pieces().len(), 2);
        assert_eq!((y.pieces()[0].lo, y.pieces()[0].hi), (-2.0, -1.0));
        assert_eq!((y.pieces()[1].lo, y.pieces()[1].hi), (1.0, 2.0));
        let empty = sample_yard().restriction(-0.5, 0.5);
        assert!(empty.pieces().is_empty());
    }

    #[test]
    fn clamping_freezes_boundary_values() {
        let y = sample_yard();
        let c = y.clamped(-2.0, 2.0);
        // y(-2) = 3 and y(2) = 3 extend outward as constants
        assert!(close(c.evaluate(-100.0), 3.0));
        assert!(close(c.evaluate(100.0), 3.0));
        // inside the range the function is unchanged
        assert!(close(c.evaluate(-1.5), y.evaluate(-1.5)));
        assert!(close(c.evaluate(1.5), y.evaluate(1.5)));
    }

    #[test]
    fn clamping_at_a_sentinel_skips_that_tail() {
        let y = sample_yard();
        let c = y.clamped(NEG_INF, 2.0);
        // only the upper tail is added
        assert!(close(c.evaluate(-100.0), y.evaluate(-100.0)));
        assert!(close(c.evaluate(100.0), y.evaluate(2.0)));
        let both = y.clamped(NEG_INF, INF);
        assert!(close(both.evaluate(5.0), y.evaluate(5.0)));
    }

    #[test]
    fn affine_composition_matches_pointwise() {
        let y = sample_yard();
        let map = AffineMap::scaling(-0.5);
        let c = y.compose_affine(&map).unwrap();
        for x in [-6.0, -2.0, 1.0, 4.0, 6.0] {
            assert!(close(c.evaluate(x), y.evaluate(map.evaluate(x))));
        }
    }

    #[test]
    fn shifting_a_laurent_piece_is_an_error_not_a_panic() {
        let y = Piece::new(1.0, 2.0, BoundedPoly::new(-1, &[1.0])).into_yard();
        assert!(matches!(
            y.compose_affine(&AffineMap::shifting(1.0)),
            Err(AlgebraError::LaurentComposition { .. })
        ));
        // the same content scales fine
        assert!(y.compose_affine(&AffineMap::scaling(2.0)).is_ok());
    }
}
