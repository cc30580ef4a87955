//! Property-based tests for the growth algebra and the comparator.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Comparator, Dominance, Growth, Rational};

    fn variable() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("n"), Just("m"), Just("k")]
    }

    fn elementary() -> impl Strategy<Value = Growth> {
        prop_oneof![
            Just(Growth::constant()),
            variable().prop_map(Growth::log),
            variable().prop_map(Growth::linear),
            (variable(), 1i64..4, 1i64..3).prop_map(|(var, num, den)| {
                Growth::poly(var, Rational::from_i64(num, den)).expect("positive degree")
            }),
            (variable(), 2i64..5).prop_map(|(var, base)| {
                Growth::exponential(var, base).expect("base above one")
            }),
            variable().prop_map(Growth::factorial),
            (variable(), 2i64..9, 2i64..5).prop_map(|(var, a, b)| {
                Growth::raise_to_log(var, &a.into(), &b.into()).expect("valid leaf count")
            }),
        ]
    }

    fn product() -> impl Strategy<Value = Growth> {
        proptest::collection::vec(elementary(), 1..=3)
            .prop_map(|factors| factors.iter().fold(Growth::constant(), |acc, f| acc.multiply(f)))
    }

    fn growth() -> impl Strategy<Value = Growth> {
        proptest::collection::vec(product(), 1..=3)
            .prop_map(|terms| terms.iter().skip(1).fold(terms[0].clone(), |acc, t| acc.add(t)))
    }

    proptest! {
        #[test]
        fn compare_reflexive(f in growth()) {
            prop_assert_eq!(Comparator::new().compare(&f, &f), Dominance::Equal);
        }

        #[test]
        fn compare_antisymmetric(f in growth(), g in growth()) {
            let cmp = Comparator::new();
            prop_assert_eq!(cmp.compare(&f, &g), cmp.compare(&g, &f).reverse());
        }

        #[test]
        fn compare_transitive(f in growth(), g in growth(), h in growth()) {
            let cmp = Comparator::new();
            let fg = cmp.compare(&f, &g);
            let gh = cmp.compare(&g, &h);
            let at_most = |d: Dominance| matches!(d, Dominance::StrictlySlower | Dominance::Equal);
            if at_most(fg) && at_most(gh) {
                prop_assert!(at_most(cmp.compare(&f, &h)));
            }
        }

        #[test]
        fn simplify_idempotent(f in growth()) {
            let cmp = Comparator::new();
            let once = cmp.simplify_sum(&f);
            let twice = cmp.simplify_sum(&once);
            prop_assert_eq!(once.terms().len(), twice.terms().len());
            prop_assert!(once == twice);
            prop_assert!(cmp.sum(&f, &f) == once);
        }

        #[test]
        fn simplify_preserves_class(f in growth()) {
            let cmp = Comparator::new();
            prop_assert_eq!(cmp.compare(&cmp.simplify_sum(&f), &f), Dominance::Equal);
        }

        #[test]
        fn simplify_commutative(f in growth(), g in growth()) {
            let cmp = Comparator::new();
            let fg = cmp.sum(&f, &g);
            let gf = cmp.sum(&g, &f);
            prop_assert_eq!(fg.terms().len(), gf.terms().len());
            prop_assert!(fg == gf);
        }

        #[test]
        fn multiply_commutative(f in growth(), g in growth()) {
            prop_assert!(f.multiply(&g) == g.multiply(&f));
        }

        #[test]
        fn multiply_associative(f in growth(), g in growth(), h in growth()) {
            let left = f.multiply(&g).multiply(&h);
            let right = f.multiply(&g.multiply(&h));
            prop_assert!(left == right);
        }

        #[test]
        fn product_dominates_factors(f in product(), g in product()) {
            let cmp = Comparator::new();
            let fg = f.multiply(&g);
            prop_assert!(matches!(
                cmp.compare(&f, &fg),
                Dominance::StrictlySlower | Dominance::Equal
            ));
        }
    }
}
