//! Property-based tests for the polynomial layer.

use proptest::prelude::*;

use crate::poly::BoundedPoly;

const SAMPLE_POINTS: [f64; 5] = [-2.0, -1.0, -0.5, 0.75, 1.5];

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

fn coeff() -> impl Strategy<Value = f64> {
    (0.5..8.0f64, any::<bool>()).prop_map(|(m, neg)| if neg { -m } else { m })
}

fn poly() -> impl Strategy<Value = BoundedPoly> {
    (-3..3i32, prop::collection::vec(coeff(), 1..6))
        .prop_map(|(lo, c)| BoundedPoly::new(lo, &c))
}

fn classic_poly() -> impl Strategy<Value = BoundedPoly> {
    prop::collection::vec(coeff(), 1..6).prop_map(|c| BoundedPoly::new(0, &c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn addition_commutes_pointwise(p in poly(), q in poly()) {
        let ab = p.add_poly(&q);
        let ba = q.add_poly(&p);
        for x in SAMPLE_POINTS {
            prop_assert!(close(ab.evaluate(x), ba.evaluate(x), 1e-9));
        }
    }

    #[test]
    fn multiplication_commutes_pointwise(p in poly(), q in poly()) {
        let ab = p.mul_poly(&q);
        let ba = q.mul_poly(&p);
        for x in SAMPLE_POINTS {
            prop_assert!(close(ab.evaluate(x), ba.evaluate(x), 1e-9));
        }
    }

    #[test]
    fn multiplication_distributes_over_addition(
        p in poly(), q in poly(), r in poly()
    ) {
        let lhs = p.mul_poly(&q.add_poly(&r));
        let rhs = p.mul_poly(&q).add_poly(&p.mul_poly(&r));
        for x in SAMPLE_POINTS {
            prop_assert!(close(lhs.evaluate(x), rhs.evaluate(x), 1e-6));
        }
    }

    #[test]
    fn subtraction_undoes_addition(p in poly(), q in poly()) {
        let back = p.add_poly(&q).sub_poly(&q);
        for x in SAMPLE_POINTS {
            prop_assert!(close(back.evaluate(x), p.evaluate(x), 1e-9));
        }
    }

    #[test]
    fn derivative_of_integral_recovers_the_function(p in poly()) {
        prop_assume!(p.coeff(-1) == 0.0);
        let back = p.integral().unwrap().derivative();
        for x in SAMPLE_POINTS {
            prop_assert!(close(back.evaluate(x), p.evaluate(x), 1e-9));
        }
    }

    #[test]
    fn derivative_is_linear(p in poly(), q in poly()) {
        let lhs = p.add_poly(&q).derivative();
        let rhs = p.derivative().add_poly(&q.derivative());
        for x in SAMPLE_POINTS {
            prop_assert!(close(lhs.evaluate(x), rhs.evaluate(x), 1e-9));
        }
    }

    #[test]
    fn composition_matches_pointwise(outer in classic_poly(), inner in classic_poly()) {
        let c = outer.compose(&inner).unwrap();
        // Samples stay near the origin: composed magnitudes grow as the
        // product of the degrees.
        for x in [-0.75, -0.25, 0.5, 1.0] {
            let direct = outer.evaluate(inner.evaluate(x));
            prop_assert!(close(c.evaluate(x), direct, 1e-6));
        }
    }

    #[test]
    fn solutions_satisfy_the_equation(p in classic_poly(), y in -8.0..8.0f64) {
        for r in p.solutions(y) {
            prop_assert!(r.is_finite());
            let residual = (p.evaluate(r) - y).abs();
            let scale: f64 = (p.bounds().lo()..=p.bounds().hi())
                .map(|i| (p.coeff(i) * r.powi(i)).abs())
                .sum();
            prop_assert!(residual <= 1e-5 * (1.0 + scale + y.abs()));
        }
    }

    #[test]
    fn maximum_dominates_sampled_values(p in classic_poly()) {
        let max = p.maximum(-2.0, 2.0);
        for x in SAMPLE_POINTS {
            prop_assert!(p.evaluate(x) <= max + 1e-9 * (1.0 + max.abs()));
        }
    }

    #[test]
    fn minimum_is_below_sampled_values(p in classic_poly()) {
        let min = p.minimum(-2.0, 2.0);
        for x in SAMPLE_POINTS {
            prop_assert!(p.evaluate(x) >= min - 1e-9 * (1.0 + min.abs()));
        }
    }
}
