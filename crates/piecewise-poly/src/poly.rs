//! Dense bounded-degree polynomials.
//!
//! `BoundedPoly` represents f(x) = Σᵢ kᵢxⁱ where the exponents i are
//! confined to a declared interval `lo..=hi`. Negative exponents are
//! permitted (Laurent polynomials); they run in the same time as classic
//! terms and fall out of the same storage, so they are supported as a
//! degenerate case rather than as a separate type.
//!
//! Instances are immutable: every operation returns a new value whose
//! degree interval follows the propagation rules in [`crate::bounds`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::affine::{AffineMap, Monomial};
use crate::bounds::DegreeBounds;
use crate::error::AlgebraError;

/// A dense polynomial with declared exponent interval `lo..=hi`.
///
/// Coefficients are stored in ascending exponent order; `coeffs[j]` holds
/// the coefficient of `x^(lo + j)`. The interval is part of the value and
/// is preserved even when outer coefficients are zero, since downstream
/// bound arithmetic depends on it.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedPoly {
    bounds: DegreeBounds,
    coeffs: SmallVec<[f64; 8]>,
}

impl BoundedPoly {
    /// Creates a polynomial from its lowest exponent and coefficient run.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` is empty.
    #[must_use]
    pub fn new(lo: i32, coeffs: &[f64]) -> Self {
        assert!(!coeffs.is_empty(), "a polynomial spans at least one exponent");
        let hi = lo + coeffs.len() as i32 - 1;
        Self {
            bounds: DegreeBounds::new(lo, hi),
            coeffs: SmallVec::from_slice(coeffs),
        }
    }

    /// The zero polynomial at degree interval `0..=0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(0.0)
    }

    /// The constant polynomial `k`.
    #[must_use]
    pub fn constant(k: f64) -> Self {
        Self {
            bounds: DegreeBounds::scalar(),
            coeffs: smallvec![k],
        }
    }

    /// The polynomial `x`.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(1, &[1.0])
    }

    /// A zero-filled polynomial over the given interval.
    #[must_use]
    pub fn zeroed(bounds: DegreeBounds) -> Self {
        Self {
            bounds,
            coeffs: smallvec![0.0; bounds.len()],
        }
    }

    /// The declared degree interval.
    #[must_use]
    pub fn bounds(&self) -> DegreeBounds {
        self.bounds
    }

    /// The coefficient of `xⁱ`; zero outside the declared interval.
    #[must_use]
    pub fn coeff(&self, i: i32) -> f64 {
        if self.bounds.contains(i) {
            self.coeffs[(i - self.bounds.lo()) as usize]
        } else {
            0.0
        }
    }

    /// Whether every coefficient is zero.
    #[must_use]
    pub fn is_zero_poly(&self) -> bool {
        self.coeffs.iter().all(|&k| k == 0.0)
    }

    /// Whether any term below degree zero is nonzero.
    #[must_use]
    pub fn has_negative_terms(&self) -> bool {
        (self.bounds.lo()..0).any(|i| self.coeff(i) != 0.0)
    }

    /// Reinterprets the polynomial over a wider interval, copying the
    /// overlapping coefficients. Used to force an operation's result onto
    /// the interval its propagation rule declares.
    #[must_use]
    pub fn with_bounds(&self, bounds: DegreeBounds) -> Self {
        let mut out = Self::zeroed(bounds);
        for i in self.bounds.lo()..=self.bounds.hi() {
            debug_assert!(
                bounds.contains(i) || self.coeff(i) == 0.0,
                "nonzero coefficient at x^{i} outside target bounds"
            );
            if bounds.contains(i) {
                out.set(i, self.coeff(i));
            }
        }
        out
    }

    fn set(&mut self, i: i32, k: f64) {
        let lo = self.bounds.lo();
        self.coeffs[(i - lo) as usize] = k;
    }

    fn add_at(&mut self, i: i32, k: f64) {
        let lo = self.bounds.lo();
        self.coeffs[(i - lo) as usize] += k;
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Negative-exponent terms use `powi` with a zero-coefficient guard,
    /// so a vacant Laurent slot never manufactures `0 · 0⁻ⁿ = NaN`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut y = 0.0;
        for i in self.bounds.lo()..0 {
            let k = self.coeff(i);
            if k != 0.0 {
                y += k * x.powi(i);
            }
        }
        let start = self.bounds.lo().max(0);
        if start <= self.bounds.hi() {
            let mut xi = x.powi(start);
            for i in start..=self.bounds.hi() {
                y += self.coeff(i) * xi;
                xi *= x;
            }
        }
        y
    }

    /// Sum; the result interval is the union of both operands'.
    #[must_use]
    pub fn add_poly(&self, q: &Self) -> Self {
        let mut out = Self::zeroed(self.bounds.union(q.bounds));
        for i in out.bounds.lo()..=out.bounds.hi() {
            out.set(i, self.coeff(i) + q.coeff(i));
        }
        out
    }

    /// Difference; same interval rule as addition.
    #[must_use]
    pub fn sub_poly(&self, q: &Self) -> Self {
        let mut out = Self::zeroed(self.bounds.union(q.bounds));
        for i in out.bounds.lo()..=out.bounds.hi() {
            out.set(i, self.coeff(i) - q.coeff(i));
        }
        out
    }

    /// Product; the result interval is the sum of both operands'.
    #[must_use]
    pub fn mul_poly(&self, q: &Self) -> Self {
        let mut out = Self::zeroed(self.bounds.product(q.bounds));
        for i in self.bounds.lo()..=self.bounds.hi() {
            let ki = self.coeff(i);
            if ki == 0.0 {
                continue;
            }
            for j in q.bounds.lo()..=q.bounds.hi() {
                out.add_at(i + j, ki * q.coeff(j));
            }
        }
        out
    }

    /// Adds a constant, widening the interval to include degree zero.
    #[must_use]
    pub fn add_scalar(&self, k: f64) -> Self {
        let mut out = self.with_bounds(self.bounds.union(DegreeBounds::scalar()));
        out.add_at(0, k);
        out
    }

    /// Scales every coefficient; the interval is unchanged.
    #[must_use]
    pub fn mul_scalar(&self, k: f64) -> Self {
        let mut out = self.clone();
        for c in &mut out.coeffs {
            *c *= k;
        }
        out
    }

    /// Divides by a monomial: coefficients scale and the whole interval
    /// shifts down by the monomial's power. Closed for any nonzero
    /// monomial, which is why wider divisors are not offered here.
    #[must_use]
    pub fn div_monomial(&self, m: Monomial) -> Self {
        let mut out = Self::zeroed(self.bounds.shifted_down(m.power));
        for i in self.bounds.lo()..=self.bounds.hi() {
            out.set(i - m.power, self.coeff(i) / m.coeff);
        }
        out
    }

    /// The derivative, one exponent lower everywhere; the constant term
    /// vanishes rather than producing a degree `-1` slot.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let nb = self.bounds.derivative();
        let mut out = Self::zeroed(nb);
        for i in self.bounds.lo()..=self.bounds.hi() {
            if i == 0 {
                continue;
            }
            if nb.contains(i - 1) {
                out.set(i - 1, f64::from(i) * self.coeff(i));
            }
        }
        out
    }

    /// The indefinite integral with zero constant of integration.
    ///
    /// # Errors
    ///
    /// A nonzero `x⁻¹` coefficient integrates to a logarithm, which this
    /// representation cannot hold; use [`Self::integral_at`] or
    /// [`Self::integral_over`] for those.
    pub fn integral(&self) -> Result<Self, AlgebraError> {
        if self.coeff(-1) != 0.0 {
            return Err(AlgebraError::LogarithmicIntegral);
        }
        let mut out = Self::zeroed(self.bounds.integral());
        for i in self.bounds.lo()..=self.bounds.hi() {
            if i == -1 {
                continue;
            }
            out.set(i + 1, self.coeff(i) / f64::from(i + 1));
        }
        Ok(out)
    }

    /// The antiderivative evaluated at `x`, handling the `x⁻¹` log term
    /// directly. Exponents are raised with `powi` rather than a running
    /// product to keep precision across the Laurent range.
    #[must_use]
    pub fn integral_at(&self, x: f64) -> f64 {
        let mut total = 0.0;
        for i in self.bounds.lo()..=self.bounds.hi() {
            let k = self.coeff(i);
            if k == 0.0 {
                continue;
            }
            if i == -1 {
                total += k * x.abs().ln();
            } else {
                total += k * x.powi(i + 1) / f64::from(i + 1);
            }
        }
        total
    }

    /// The definite integral over `[lo, hi]`.
    #[must_use]
    pub fn integral_over(&self, lo: f64, hi: f64) -> f64 {
        let mut total = 0.0;
        for i in self.bounds.lo()..=self.bounds.hi() {
            let k = self.coeff(i);
            if k == 0.0 {
                continue;
            }
            if i == -1 {
                total += k * (hi.abs().ln() - lo.abs().ln());
            } else {
                let n = f64::from(i + 1);
                total += k * (hi.powi(i + 1) / n - lo.powi(i + 1) / n);
            }
        }
        total
    }

    /// Composes with an affine transform of the domain; the interval is
    /// unchanged for identity and scaling.
    ///
    /// # Errors
    ///
    /// Not closed when shifting a polynomial with nonzero
    /// negative-exponent terms: `(x + b)⁻ⁿ` is not a Laurent polynomial.
    pub fn compose_affine(&self, map: &AffineMap) -> Result<Self, AlgebraError> {
        match map {
            AffineMap::Identity => Ok(self.clone()),
            AffineMap::Scaling { factor } => {
                let mut out = Self::zeroed(self.bounds);
                for i in self.bounds.lo()..=self.bounds.hi() {
                    out.set(i, self.coeff(i) * factor.powi(i));
                }
                Ok(out)
            }
            AffineMap::Shifting { .. } => {
                if self.has_negative_terms() {
                    return Err(AlgebraError::LaurentComposition {
                        lo: self.bounds.lo(),
                        hi: self.bounds.hi(),
                    });
                }
                let target = DegreeBounds::new(self.bounds.lo().min(0), self.bounds.hi().max(0));
                let p = self.compose(&map.to_poly())?;
                Ok(p.with_bounds(target.union(p.bounds())))
            }
        }
    }

    /// Composes `self ∘ inner` by Horner's rule, with the result interval
    /// given by the pairwise product rule.
    ///
    /// # Errors
    ///
    /// Not closed when `self` carries negative exponents: the result
    /// would be a rational function.
    pub fn compose(&self, inner: &Self) -> Result<Self, AlgebraError> {
        if self.has_negative_terms() {
            return Err(AlgebraError::LaurentComposition {
                lo: self.bounds.lo(),
                hi: self.bounds.hi(),
            });
        }
        let lo = self.bounds.lo().max(0);
        let hi = self.bounds.hi();
        // Horner over x^lo * (k_lo + k_{lo+1} x + ...)
        let mut acc = Self::constant(self.coeff(hi));
        let mut i = hi;
        while i > lo {
            i -= 1;
            acc = acc.mul_poly(inner).add_scalar(self.coeff(i));
        }
        for _ in 0..lo {
            acc = acc.mul_poly(inner);
        }
        let target = self.bounds.composition(inner.bounds);
        Ok(acc.with_bounds(target.union(acc.bounds)))
    }
}

impl fmt::Display for BoundedPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lo = self.bounds.lo();
        for i in lo..=self.bounds.hi() {
            if i > lo {
                write!(f, " + ")?;
            }
            write!(f, "{}", self.coeff(i))?;
            if i != 0 {
                write!(f, "x")?;
            }
            if i != 0 && i != 1 {
                write!(f, "^{i}")?;
            }
        }
        Ok(())
    }
}

impl Add for BoundedPoly {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add_poly(&rhs)
    }
}

impl Sub for BoundedPoly {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub_poly(&rhs)
    }
}

impl Mul for BoundedPoly {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul_poly(&rhs)
    }
}

impl Neg for BoundedPoly {
    type Output = Self;
    fn neg(self) -> Self {
        self.mul_scalar(-1.0)
    }
}

impl Add<f64> for BoundedPoly {
    type Output = Self;
    fn add(self, k: f64) -> Self {
        self.add_scalar(k)
    }
}

impl Sub<f64> for BoundedPoly {
    type Output = Self;
    fn sub(self, k: f64) -> Self {
        self.add_scalar(-k)
    }
}

impl Mul<f64> for BoundedPoly {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.mul_scalar(k)
    }
}

impl Div<f64> for BoundedPoly {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        self.mul_scalar(1.0 / k)
    }
}

impl Div<Monomial> for BoundedPoly {
    type Output = Self;
    fn div(self, m: Monomial) -> Self {
        self.div_monomial(m)
    }
}

impl Zero for BoundedPoly {
    fn zero() -> Self {
        BoundedPoly::zero()
    }
    fn is_zero(&self) -> bool {
        self.is_zero_poly()
    }
}

impl One for BoundedPoly {
    fn one() -> Self {
        BoundedPoly::constant(1.0)
    }
}
