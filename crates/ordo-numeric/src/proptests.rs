//! Property-based tests for exact rationals and exponents.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{Exponent, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    // Exponents built from a rational part and at most one log_b a.
    fn exponent() -> impl Strategy<Value = Exponent> {
        (-20i64..20, 1i64..6, 1i64..30, 2i64..10).prop_map(|(n, d, a, b)| {
            let log = Exponent::log(Rational::integer(a), Rational::integer(b))
                .expect("argument and base are in range");
            Exponent::from_rational(Rational::from_i64(n, d)) + log
        })
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((a.clone() * a.recip()).is_one());
        }

        #[test]
        fn exponent_add_commutative(a in exponent(), b in exponent()) {
            let ab = a.clone() + b.clone();
            let ba = b + a;
            prop_assert_eq!(ab.cmp_exact(&ba), Some(Ordering::Equal));
        }

        #[test]
        fn exponent_self_difference_is_zero(a in exponent()) {
            prop_assert!((a.clone() - a).is_zero());
        }

        #[test]
        fn exponent_comparison_antisymmetric(a in exponent(), b in exponent()) {
            let forward = a.cmp_exact(&b);
            let backward = b.cmp_exact(&a);
            prop_assert_eq!(forward.map(Ordering::reverse), backward);
        }

        #[test]
        fn exponent_comparison_agrees_with_estimate(a in exponent(), b in exponent()) {
            if let Some(ordering) = a.cmp_exact(&b) {
                let gap = a.approx() - b.approx();
                match ordering {
                    Ordering::Less => prop_assert!(gap < 1e-9),
                    Ordering::Greater => prop_assert!(gap > -1e-9),
                    Ordering::Equal => prop_assert!(gap.abs() < 1e-9),
                }
            }
        }

        #[test]
        fn exponent_invariant_under_common_power(a in 2i64..30, b in 2i64..10, k in 1u32..4) {
            let plain = Exponent::log(Rational::integer(a), Rational::integer(b)).unwrap();
            let powered = Exponent::log(
                Rational::integer(a).pow(k),
                Rational::integer(b).pow(k),
            )
            .unwrap();
            prop_assert_eq!(powered, plain);
        }

        #[test]
        fn zero_is_not_positive(den in non_zero_int()) {
            let zero = Rational::from_i64(0, den);
            prop_assert!(!zero.is_positive());
            prop_assert!(!zero.is_negative());
        }
    }
}
