//! Property-based tests for the piecewise algebra.
//!
//! Equality of piecewise functions is checked through the RMS metric
//! over a range enclosing every generated window, so window boundaries
//! (measure zero) cannot fail a comparison that holds almost everywhere.

use proptest::prelude::*;

use piecewise_poly::{AffineMap, BoundedPoly};

use crate::compose::compose;
use crate::metric::distance;
use crate::partition::Partition;
use crate::piece::Piece;
use crate::yard::{IntoYard, Yard};

const RANGE_LO: f64 = -5.0;
const RANGE_HI: f64 = 5.0;
const TOL: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn content() -> impl Strategy<Value = BoundedPoly> {
    prop::collection::vec(-2.0..2.0f64, 1..4).prop_map(|c| BoundedPoly::new(0, &c))
}

fn piece() -> impl Strategy<Value = Piece> {
    (-4.0..3.0f64, 0.25..2.0f64, content())
        .prop_map(|(lo, width, c)| Piece::new(lo, lo + width, c))
}

fn yard() -> impl Strategy<Value = Yard> {
    prop::collection::vec(piece(), 1..4).prop_map(Yard::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn addition_commutes(a in yard(), b in yard()) {
        let ab = a.clone() + &b;
        let ba = b.clone() + &a;
        prop_assert!(distance(&ab, &ba, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn addition_associates(a in yard(), b in yard(), c in yard()) {
        let lhs = (a.clone() + &b) + &c;
        let rhs = a.clone() + (b.clone() + &c);
        prop_assert!(distance(&lhs, &rhs, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn subtraction_undoes_addition(a in yard(), b in yard()) {
        let back = (a.clone() + &b) - &b;
        prop_assert!(distance(&back, &a, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn zero_is_the_additive_identity(y in yard()) {
        let same = y.clone() + Yard::zero();
        prop_assert!(distance(&same, &y, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn one_is_the_multiplicative_identity(y in yard()) {
        let same = y.clone() * 1.0;
        prop_assert!(distance(&same, &y, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn multiplication_commutes(a in yard(), b in yard()) {
        let ab = a.clone() * &b;
        let ba = b.clone() * &a;
        prop_assert!(distance(&ab, &ba, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn multiplication_distributes_over_addition(
        a in yard(), b in yard(), c in yard()
    ) {
        let lhs = a.clone() * (b.clone() + &c);
        let rhs = (a.clone() * &b) + (a.clone() * &c);
        prop_assert!(distance(&lhs, &rhs, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn canonicalization_preserves_values(y in yard(), x in -5.0..5.0f64) {
        let t = Partition::from_yard(&y);
        prop_assert!(close(t.evaluate(x), y.evaluate(x)));
    }

    #[test]
    fn partition_operations_match_yard_operations(a in yard(), b in yard()) {
        let (ta, tb) = (Partition::from_yard(&a), Partition::from_yard(&b));
        let sum = (&ta + &tb).yard();
        let prod = (&ta * &tb).yard();
        prop_assert!(distance(&sum, &(a.clone() + &b), RANGE_LO, RANGE_HI) < TOL);
        prop_assert!(distance(&prod, &(a * &b), RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn derivative_of_integral_recovers_the_function(y in yard()) {
        let back = y.integral().unwrap().derivative();
        prop_assert!(distance(&back, &y, RANGE_LO, RANGE_HI) < TOL);
    }

    #[test]
    fn definite_integral_agrees_between_forms(y in yard()) {
        let t = Partition::from_yard(&y);
        let a = y.integral_over(RANGE_LO, RANGE_HI);
        let b = t.integral_over(RANGE_LO, RANGE_HI);
        prop_assert!(close(a, b));
    }

    #[test]
    fn affine_composition_matches_pointwise(
        y in yard(),
        factor in 0.25..3.0f64,
        x in -4.0..4.0f64,
    ) {
        let map = AffineMap::scaling(factor);
        let c = y.compose_affine(&map).unwrap();
        prop_assert!(close(c.evaluate(x), y.evaluate(factor * x)));
    }

    #[test]
    fn piecewise_composition_matches_pointwise(
        y in yard(),
        slope in 0.5..2.0f64,
        offset in -1.0..1.0f64,
        x in -2.0..2.0f64,
    ) {
        let inner = Piece::everywhere(BoundedPoly::new(0, &[offset, slope])).into_yard();
        let c = compose(&y, &inner).unwrap();
        let direct = y.evaluate(slope * x + offset);
        prop_assert!((c.evaluate(x) - direct).abs() < 1e-6 * (1.0 + direct.abs()));
    }

    #[test]
    fn restriction_vanishes_outside_the_range(y in yard(), x in -5.0..5.0f64) {
        let r = y.restriction(-1.0, 1.0);
        if x <= -1.0 || x > 1.0 {
            prop_assert_eq!(r.evaluate(x), 0.0);
        } else {
            prop_assert!(close(r.evaluate(x), y.evaluate(x)));
        }
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_the_diagonal(a in yard(), b in yard()) {
        prop_assert!(distance(&a, &a, RANGE_LO, RANGE_HI) < TOL);
        let ab = distance(&a, &b, RANGE_LO, RANGE_HI);
        let ba = distance(&b, &a, RANGE_LO, RANGE_HI);
        prop_assert!(close(ab, ba));
    }
}
