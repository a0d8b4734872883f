//! Affine domain transforms and monomials.
//!
//! The piecewise algebra composes and divides by a small closed set of
//! inner functions rather than arbitrary expressions: the identity, a pure
//! scaling `f(x) = kx`, a pure shift `f(x) = x + b`, and single monomials
//! `kxⁿ`. Collapsing them into tagged variants keeps the operator surface
//! small while still dispatching exactly.

use crate::bounds::DegreeBounds;
use crate::poly::BoundedPoly;

/// An invertible affine transform of the input domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AffineMap {
    /// `f(x) = x`
    Identity,
    /// `f(x) = factor·x`, `factor ≠ 0`
    Scaling {
        /// Multiplicative factor.
        factor: f64,
    },
    /// `f(x) = x + offset`
    Shifting {
        /// Additive offset.
        offset: f64,
    },
}

impl AffineMap {
    /// `f(x) = factor·x`.
    #[must_use]
    pub fn scaling(factor: f64) -> Self {
        Self::Scaling { factor }
    }

    /// `f(x) = x + offset`.
    #[must_use]
    pub fn shifting(offset: f64) -> Self {
        Self::Shifting { offset }
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Scaling { factor } => factor * x,
            Self::Shifting { offset } => x + offset,
        }
    }

    /// The inverse transform. Scalings invert to the reciprocal factor,
    /// shifts to the negated offset.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Scaling { factor } => Self::Scaling {
                factor: 1.0 / factor,
            },
            Self::Shifting { offset } => Self::Shifting { offset: -offset },
        }
    }

    /// Whether the transform preserves the orientation of intervals.
    /// Only a negative scaling reverses it.
    #[must_use]
    pub fn is_increasing(&self) -> bool {
        match self {
            Self::Scaling { factor } => *factor > 0.0,
            Self::Identity | Self::Shifting { .. } => true,
        }
    }

    /// The transform written out as a polynomial.
    #[must_use]
    pub fn to_poly(&self) -> BoundedPoly {
        match self {
            Self::Identity => BoundedPoly::identity(),
            Self::Scaling { factor } => BoundedPoly::new(1, &[*factor]),
            Self::Shifting { offset } => BoundedPoly::new(0, &[*offset, 1.0]),
        }
    }
}

/// A single term `coeff·x^power`. The only piecewise-safe divisor wider
/// than a scalar: dividing by a monomial shifts degree bounds instead of
/// introducing a singularity inside the support.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monomial {
    /// Coefficient, expected nonzero for use as a divisor.
    pub coeff: f64,
    /// Exponent; may be negative.
    pub power: i32,
}

impl Monomial {
    /// Creates `coeff·x^power`.
    #[must_use]
    pub fn new(coeff: f64, power: i32) -> Self {
        Self { coeff, power }
    }

    /// Evaluates the monomial at a point.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeff * x.powi(self.power)
    }

    /// Degree interval of the monomial: a single exponent.
    #[must_use]
    pub fn bounds(&self) -> DegreeBounds {
        DegreeBounds::new(self.power, self.power)
    }
}

impl From<Monomial> for BoundedPoly {
    fn from(m: Monomial) -> Self {
        BoundedPoly::new(m.power, &[m.coeff])
    }
}

/// Identity and scaling maps are monomials; a shift is not, which is what
/// makes division by a shift non-constructible.
impl TryFrom<AffineMap> for Monomial {
    type Error = crate::error::AlgebraError;

    fn try_from(map: AffineMap) -> Result<Self, Self::Error> {
        match map {
            AffineMap::Identity => Ok(Monomial::new(1.0, 1)),
            AffineMap::Scaling { factor } => Ok(Monomial::new(factor, 1)),
            AffineMap::Shifting { .. } => Err(crate::error::AlgebraError::NonMonomialDivisor {
                lo: 0,
                hi: 1,
            }),
        }
    }
}
