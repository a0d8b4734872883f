//! Errors for algebraic operations that are undefined rather than failed.
//!
//! Almost every operation in this workspace is total: degenerate intervals
//! are filtered, far-outside evaluations return the identity element, and
//! no operation performs I/O. The only errors are algebraic combinations
//! with no polynomial result.

use thiserror::Error;

/// An algebraic combination with no representable result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Indefinite integration of an `x⁻¹` term produces a logarithm,
    /// which cannot be represented as a polynomial. Definite integrals
    /// remain available through `integral_at` / `integral_over`.
    #[error("indefinite integral of an x^-1 term is logarithmic, not polynomial")]
    LogarithmicIntegral,

    /// Composing an outer function with negative exponents would require
    /// a rational function, which this algebra does not represent.
    #[error("composition is not closed for Laurent outer functions (degree bounds {lo}..{hi})")]
    LaurentComposition {
        /// Lower degree bound of the offending outer function.
        lo: i32,
        /// Upper degree bound of the offending outer function.
        hi: i32,
    },

    /// Division is only closed when the divisor is a single monomial;
    /// any wider divisor is zero somewhere, so the quotient has a
    /// singularity the representation cannot hold.
    #[error("division requires a monomial divisor, got degree bounds {lo}..{hi}")]
    NonMonomialDivisor {
        /// Lower degree bound of the offending divisor.
        lo: i32,
        /// Upper degree bound of the offending divisor.
        hi: i32,
    },
}
