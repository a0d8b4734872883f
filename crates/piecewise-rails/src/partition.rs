//! The canonical partitioned form.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use piecewise_poly::{AffineMap, AlgebraError, BoundedPoly, Monomial};

use crate::bound::{self, INF, NEG_INF};
use crate::piece::Piece;
use crate::yard::{IntoYard, Yard};

/// A piecewise function in canonical form: `N + 1` strictly increasing
/// couplers tiling the whole line (sentinels at both ends) and one
/// polynomial per cell, where cell `i` covers `(couplers[i],
/// couplers[i+1]]`.
///
/// Unlike a [`Yard`], cells never overlap and cover everything, so
/// evaluation is a binary search and binary operations walk the merged
/// couplers once instead of forming cross products.
#[derive(Clone, Debug, PartialEq)]
pub struct Partition {
    couplers: Vec<f64>,
    contents: Vec<BoundedPoly>,
}

impl Partition {
    fn from_parts(couplers: Vec<f64>, contents: Vec<BoundedPoly>) -> Self {
        debug_assert_eq!(couplers.len(), contents.len() + 1);
        debug_assert!(couplers.windows(2).all(|w| w[0] < w[1]));
        Self { couplers, contents }
    }

    /// A single constant cell covering the whole line.
    #[must_use]
    pub fn constant(k: f64) -> Self {
        Self::from_parts(vec![NEG_INF, INF], vec![BoundedPoly::constant(k)])
    }

    /// Canonicalizes a sum of pieces: the couplers are the union of all
    /// window endpoints plus the sentinels, and each cell holds the sum
    /// of every piece overlapping it.
    #[must_use]
    pub fn from_yard(yard: &Yard) -> Self {
        let mut couplers = vec![NEG_INF, INF];
        for p in yard.pieces() {
            if !bound::is_lower_sentinel(p.lo) {
                couplers.push(p.lo);
            }
            if !bound::is_upper_sentinel(p.hi) {
                couplers.push(p.hi);
            }
        }
        couplers.sort_by(f64::total_cmp);
        couplers.dedup();

        let contents = couplers
            .windows(2)
            .map(|cell| {
                let mut sum = BoundedPoly::zero();
                for p in yard.pieces() {
                    if p.lo.max(cell[0]) < p.hi.min(cell[1]) {
                        sum = sum.add_poly(&p.content);
                    }
                }
                sum
            })
            .collect();
        Self::from_parts(couplers, contents)
    }

    /// The cell boundaries, sentinels included.
    #[must_use]
    pub fn couplers(&self) -> &[f64] {
        &self.couplers
    }

    /// The per-cell polynomials.
    #[must_use]
    pub fn contents(&self) -> &[BoundedPoly] {
        &self.contents
    }

    /// Index of the cell containing `x`, honoring the half-open
    /// convention: a coupler belongs to the cell on its left.
    fn cell_index(&self, x: f64) -> Option<usize> {
        if x <= self.couplers[0] || x > *self.couplers.last()? {
            return None;
        }
        Some(self.couplers.partition_point(|&c| c < x) - 1)
    }

    /// Evaluates by binary search over the couplers.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.cell_index(x) {
            Some(i) => self.contents[i].evaluate(x),
            None => 0.0,
        }
    }

    /// The non-trivial cells as a sum of pieces.
    #[must_use]
    pub fn yard(&self) -> Yard {
        let pieces = self
            .couplers
            .windows(2)
            .zip(&self.contents)
            .filter(|(_, content)| !content.is_zero_poly())
            .map(|(cell, content)| Piece::new(cell[0], cell[1], content.clone()))
            .collect();
        Yard::new(pieces)
    }

    /// Walks the union of both coupler sets, combining the pair of cell
    /// contents found under each merged cell's midpoint.
    fn zip_cells(
        &self,
        other: &Self,
        combine: impl Fn(&BoundedPoly, &BoundedPoly) -> BoundedPoly,
    ) -> Self {
        let mut couplers: Vec<f64> =
            self.couplers.iter().chain(&other.couplers).copied().collect();
        couplers.sort_by(f64::total_cmp);
        couplers.dedup();

        let zero = BoundedPoly::zero();
        let contents = couplers
            .windows(2)
            .map(|cell| {
                // halved before summing so sentinel endpoints cannot overflow
                let mid = cell[0] * 0.5 + cell[1] * 0.5;
                let a = self
                    .cell_index(mid)
                    .map_or(&zero, |i| &self.contents[i]);
                let b = other
                    .cell_index(mid)
                    .map_or(&zero, |i| &other.contents[i]);
                combine(a, b)
            })
            .collect();
        Self::from_parts(couplers, contents)
    }

    /// Sum, over the merged couplers.
    #[must_use]
    pub fn add_partition(&self, other: &Self) -> Self {
        self.zip_cells(other, BoundedPoly::add_poly)
    }

    /// Difference, over the merged couplers.
    #[must_use]
    pub fn sub_partition(&self, other: &Self) -> Self {
        self.zip_cells(other, BoundedPoly::sub_poly)
    }

    /// Product, over the merged couplers.
    #[must_use]
    pub fn mul_partition(&self, other: &Self) -> Self {
        self.zip_cells(other, BoundedPoly::mul_poly)
    }

    /// Quotient by a partition whose every cell is a single monomial.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NonMonomialDivisor`] if any divisor cell has more
    /// than one nonzero term, or none: a wider divisor crosses zero
    /// inside its own cell, so the quotient would have a pole there.
    pub fn div_partition(&self, other: &Self) -> Result<Self, AlgebraError> {
        for content in &other.contents {
            cell_monomial(content)?;
        }
        Ok(self.zip_cells(other, |a, b| {
            match cell_monomial(b) {
                Ok(m) => a.div_monomial(m),
                // validated above; merged cells reuse the same contents
                Err(_) => unreachable!("divisor cells were validated"),
            }
        }))
    }

    /// Scales every cell.
    #[must_use]
    pub fn mul_scalar(&self, k: f64) -> Self {
        Self {
            couplers: self.couplers.clone(),
            contents: self.contents.iter().map(|c| c.mul_scalar(k)).collect(),
        }
    }

    /// Divides every cell by a monomial.
    #[must_use]
    pub fn div_monomial(&self, m: Monomial) -> Self {
        Self {
            couplers: self.couplers.clone(),
            contents: self.contents.iter().map(|c| c.div_monomial(m)).collect(),
        }
    }

    /// Cell-wise derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self {
            couplers: self.couplers.clone(),
            contents: self.contents.iter().map(BoundedPoly::derivative).collect(),
        }
    }

    /// The slope at `x`, from the cell containing it.
    #[must_use]
    pub fn derivative_at(&self, x: f64) -> f64 {
        match self.cell_index(x) {
            Some(i) => self.contents[i].derivative().evaluate(x),
            None => 0.0,
        }
    }

    /// The integral accumulated from −∞ up to `x`, cell by cell. Cells
    /// past `x` contribute nothing.
    #[must_use]
    pub fn integral_at(&self, x: f64) -> f64 {
        self.couplers
            .windows(2)
            .zip(&self.contents)
            .map(|(cell, content)| {
                if x <= cell[0] {
                    0.0
                } else {
                    content.integral_over(cell[0], x.min(cell[1]))
                }
            })
            .sum()
    }

    /// The definite integral over `[lo, hi]`, cell by cell.
    #[must_use]
    pub fn integral_over(&self, lo: f64, hi: f64) -> f64 {
        self.couplers
            .windows(2)
            .zip(&self.contents)
            .map(|(cell, content)| {
                let a = lo.max(cell[0]);
                let b = hi.min(cell[1]);
                if a < b {
                    content.integral_over(a, b)
                } else {
                    0.0
                }
            })
            .sum()
    }

    /// Composes with an affine transform by pulling the cells back
    /// through it and re-canonicalizing.
    ///
    /// # Errors
    ///
    /// Propagates [`AlgebraError::LaurentComposition`] when a shift meets
    /// a Laurent cell.
    pub fn compose_affine(&self, map: &AffineMap) -> Result<Self, AlgebraError> {
        Ok(Self::from_yard(&self.yard().compose_affine(map)?))
    }

    /// The same function clipped to `(lo, hi]`, re-canonicalized.
    #[must_use]
    pub fn restriction(&self, lo: f64, hi: f64) -> Self {
        Self::from_yard(&self.yard().restriction(lo, hi))
    }

    /// The function frozen at its boundary values outside `(lo, hi]`.
    #[must_use]
    pub fn clamped(&self, lo: f64, hi: f64) -> Self {
        Self::from_yard(&self.yard().clamped(lo, hi))
    }

    /// The largest value attained on `[lo, hi]`: per overlapped cell,
    /// the polynomial maximum over the clipped range.
    #[must_use]
    pub fn maximum(&self, lo: f64, hi: f64) -> f64 {
        self.fold_cells(lo, hi, f64::NEG_INFINITY, |best, content, a, b| {
            best.max(content.maximum(a, b))
        })
    }

    /// The smallest value attained on `[lo, hi]`.
    #[must_use]
    pub fn minimum(&self, lo: f64, hi: f64) -> f64 {
        self.fold_cells(lo, hi, f64::INFINITY, |best, content, a, b| {
            best.min(content.minimum(a, b))
        })
    }

    fn fold_cells(
        &self,
        lo: f64,
        hi: f64,
        init: f64,
        fold: impl Fn(f64, &BoundedPoly, f64, f64) -> f64,
    ) -> f64 {
        let mut acc = init;
        for (cell, content) in self.couplers.windows(2).zip(&self.contents) {
            let a = lo.max(cell[0]);
            let b = hi.min(cell[1]);
            if a < b {
                acc = fold(acc, content, a, b);
            }
        }
        acc
    }
}

/// Extracts the single nonzero term of a cell, or reports why it cannot
/// serve as a divisor.
fn cell_monomial(content: &BoundedPoly) -> Result<Monomial, AlgebraError> {
    let bounds = content.bounds();
    let mut found = None;
    for i in bounds.lo()..=bounds.hi() {
        if content.coeff(i) != 0.0 {
            if found.is_some() {
                return Err(AlgebraError::NonMonomialDivisor {
                    lo: bounds.lo(),
                    hi: bounds.hi(),
                });
            }
            found = Some(Monomial::new(content.coeff(i), i));
        }
    }
    found.ok_or(AlgebraError::NonMonomialDivisor {
        lo: bounds.lo(),
        hi: bounds.hi(),
    })
}

impl From<&Yard> for Partition {
    fn from(yard: &Yard) -> Self {
        Self::from_yard(yard)
    }
}

impl From<Yard> for Partition {
    fn from(yard: Yard) -> Self {
        Self::from_yard(&yard)
    }
}

impl IntoYard for Partition {
    fn into_yard(self) -> Yard {
        self.yard()
    }
}

impl IntoYard for &Partition {
    fn into_yard(self) -> Yard {
        self.yard()
    }
}

impl Add<&Partition> for &Partition {
    type Output = Partition;
    fn add(self, rhs: &Partition) -> Partition {
        self.add_partition(rhs)
    }
}

impl Sub<&Partition> for &Partition {
    type Output = Partition;
    fn sub(self, rhs: &Partition) -> Partition {
        self.sub_partition(rhs)
    }
}

impl Mul<&Partition> for &Partition {
    type Output = Partition;
    fn mul(self, rhs: &Partition) -> Partition {
        self.mul_partition(rhs)
    }
}

impl Add<BoundedPoly> for Partition {
    type Output = Partition;
    fn add(self, p: BoundedPoly) -> Partition {
        self.add_partition(&Partition::from_yard(&p.into_yard()))
    }
}

impl Sub<BoundedPoly> for Partition {
    type Output = Partition;
    fn sub(self, p: BoundedPoly) -> Partition {
        self.sub_partition(&Partition::from_yard(&p.into_yard()))
    }
}

impl Mul<BoundedPoly> for Partition {
    type Output = Partition;
    fn mul(self, p: BoundedPoly) -> Partition {
        self.mul_partition(&Partition::from_yard(&p.into_yard()))
    }
}

impl Add<AffineMap> for Partition {
    type Output = Partition;
    fn add(self, map: AffineMap) -> Partition {
        self + map.to_poly()
    }
}

impl Sub<AffineMap> for Partition {
    type Output = Partition;
    fn sub(self, map: AffineMap) -> Partition {
        self - map.to_poly()
    }
}

impl Mul<AffineMap> for Partition {
    type Output = Partition;
    fn mul(self, map: AffineMap) -> Partition {
        self * map.to_poly()
    }
}

impl Add<f64> for Partition {
    type Output = Partition;
    fn add(self, k: f64) -> Partition {
        self.add_partition(&Partition::constant(k))
    }
}

impl Sub<f64> for Partition {
    type Output = Partition;
    fn sub(self, k: f64) -> Partition {
        self.sub_partition(&Partition::constant(k))
    }
}

impl Mul<f64> for Partition {
    type Output = Partition;
    fn mul(self, k: f64) -> Partition {
        self.mul_scalar(k)
    }
}

impl Div<f64> for Partition {
    type Output = Partition;
    fn div(self, k: f64) -> Partition {
        self.mul_scalar(1.0 / k)
    }
}

impl Div<Monomial> for Partition {
    type Output = Partition;
    fn div(self, m: Monomial) -> Partition {
        self.div_monomial(m)
    }
}

impl Neg for Partition {
    type Output = Partition;
    fn neg(self) -> Partition {
        self.mul_scalar(-1.0)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.yard())
    }
}
