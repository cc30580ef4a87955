//! Property-based tests for the recurrence solver.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Recurrence, RecurrenceSolver, SolverOptions};
    use ordo_growth::{Comparator, Dominance, Growth, Rational};

    fn work() -> impl Strategy<Value = Growth> {
        prop_oneof![
            Just(Growth::constant()),
            Just(Growth::log("n")),
            (0i64..5, 1i64..3, 0i64..3).prop_map(|(num, den, log)| {
                Growth::poly("n", Rational::from_i64(num, den))
                    .and_then(|poly| Ok(poly.multiply(&Growth::log_power("n", log)?)))
                    .expect("non-negative powers")
            }),
            (2i64..4).prop_map(|base| Growth::exponential("n", base).expect("base above one")),
        ]
    }

    proptest! {
        #[test]
        fn tree_agrees_with_master(a in 1i64..10, b in 2i64..5, f in work()) {
            let recurrence = Recurrence::divide("n", a, b, f);
            let master = RecurrenceSolver::new().solve(&recurrence);
            let tree = RecurrenceSolver::new()
                .with_options(SolverOptions::new().with_master_theorem(false))
                .solve(&recurrence);
            match (master, tree) {
                (Ok(master), Ok(tree)) => prop_assert!(master.growth() == tree.growth()),
                (master, tree) => prop_assert_eq!(master.is_err(), tree.is_err()),
            }
        }

        #[test]
        fn solution_dominates_work(a in 1i64..10, b in 2i64..5, f in work()) {
            let recurrence = Recurrence::divide("n", a, b, f.clone());
            if let Ok(solution) = RecurrenceSolver::new().solve(&recurrence) {
                let order = Comparator::new().compare(&f, solution.growth());
                prop_assert!(matches!(order, Dominance::StrictlySlower | Dominance::Equal));
            }
        }

        #[test]
        fn chain_adds_one_degree(degree in 0i64..6) {
            let f = Growth::poly("n", degree).expect("non-negative degree");
            let solution = RecurrenceSolver::new()
                .solve(&Recurrence::subtract("n", 1, 1, f))
                .expect("chain recurrence");
            let expected = Growth::poly("n", degree + 1).expect("non-negative degree");
            prop_assert!(solution.growth() == &expected);
        }
    }
}
