//! Degree-interval tags and their propagation rules.
//!
//! The original formulation tracks the lowest and highest exponent of a
//! polynomial in the type itself. Stable Rust cannot perform the required
//! arithmetic on const parameters, so the bounds travel as a runtime tag
//! validated at construction. Every operation on [`crate::BoundedPoly`]
//! derives its result tag from one of the rules below; the rules determine
//! the representable range of the result and must never be widened or
//! narrowed ad hoc.

/// An inclusive exponent interval `lo..=hi`. `lo` may be negative
/// (Laurent polynomials).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegreeBounds {
    lo: i32,
    hi: i32,
}

impl DegreeBounds {
    /// Creates a degree interval.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    #[must_use]
    pub fn new(lo: i32, hi: i32) -> Self {
        assert!(lo <= hi, "degree bounds must satisfy lo <= hi, got {lo}..{hi}");
        Self { lo, hi }
    }

    /// The interval containing only degree zero.
    #[must_use]
    pub fn scalar() -> Self {
        Self { lo: 0, hi: 0 }
    }

    /// Lowest exponent.
    #[must_use]
    pub fn lo(&self) -> i32 {
        self.lo
    }

    /// Highest exponent.
    #[must_use]
    pub fn hi(&self) -> i32 {
        self.hi
    }

    /// Number of coefficients spanned.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.hi - self.lo + 1) as usize
    }

    /// Always false: a degree interval spans at least one exponent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether exponent `i` lies inside the interval.
    #[must_use]
    pub fn contains(&self, i: i32) -> bool {
        self.lo <= i && i <= self.hi
    }

    /// Rule for addition and subtraction: the union of both intervals.
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        Self::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    /// Rule for multiplication: the sum of both intervals.
    #[must_use]
    pub fn product(&self, other: Self) -> Self {
        Self::new(self.lo + other.lo, self.hi + other.hi)
    }

    /// Rule for division by a monomial of power `q`.
    #[must_use]
    pub fn shifted_down(&self, q: i32) -> Self {
        Self::new(self.lo - q, self.hi - q)
    }

    /// Rule for differentiation. The derivative of a constant collapses
    /// to the zero polynomial at degree zero.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let lo = if self.lo == 0 { 0 } else { self.lo - 1 };
        let hi = self.hi - 1;
        if hi < lo {
            Self::scalar()
        } else {
            Self { lo, hi }
        }
    }

    /// Rule for indefinite integration: each exponent rises by one, and
    /// the interval widens to include the zeroing constant at degree 0.
    #[must_use]
    pub fn integral(&self) -> Self {
        Self::new((self.lo + 1).min(0), (self.hi + 1).max(0))
    }

    /// Rule for composition: the extremes of the four pairwise exponent
    /// products, so that Laurent inner functions stay representable.
    #[must_use]
    pub fn composition(&self, inner: Self) -> Self {
        let products = [
            self.lo * inner.lo,
            self.lo * inner.hi,
            self.hi * inner.lo,
            self.hi * inner.hi,
        ];
        let lo = products.iter().copied().min().unwrap_or(0);
        let hi = products.iter().copied().max().unwrap_or(0);
        Self::new(lo, hi)
    }
}
