//! Property-based tests for the classification driver.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Classifier, CostNode, IterationCount};
    use ordo_growth::{Comparator, Dominance, Growth};

    fn leaf() -> impl Strategy<Value = CostNode> {
        prop_oneof![
            Just(Growth::constant()),
            Just(Growth::log("n")),
            Just(Growth::linear("n")),
            Just(Growth::n_log_n("k")),
            Just(Growth::linear("m")),
        ]
        .prop_map(CostNode::leaf)
    }

    fn count() -> impl Strategy<Value = IterationCount> {
        prop_oneof![
            Just(IterationCount::Linear(Growth::linear("n"))),
            Just(IterationCount::Logarithmic(Growth::linear("n"))),
            Just(IterationCount::Triangular(Growth::linear("m"))),
            Just(IterationCount::SquareRoot(Growth::linear("k"))),
        ]
    }

    fn node() -> impl Strategy<Value = CostNode> {
        leaf().prop_recursive(4, 32, 3, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(CostNode::seq),
                (inner.clone(), proptest::collection::vec(inner.clone(), 1..3))
                    .prop_map(|(condition, branches)| CostNode::branch(condition, branches)),
                (count(), inner).prop_map(|(count, body)| CostNode::loop_over(count, body)),
            ]
        })
    }

    fn node_count(node: &CostNode) -> usize {
        match node {
            CostNode::Leaf(_) | CostNode::Recursive(_) => 1,
            CostNode::Sequence(children) => 1 + children.iter().map(node_count).sum::<usize>(),
            CostNode::Conditional {
                condition,
                branches,
            } => 1 + node_count(condition) + branches.iter().map(node_count).sum::<usize>(),
            CostNode::Loop { body, .. } => 1 + node_count(body),
        }
    }

    proptest! {
        #[test]
        fn trace_has_one_step_per_node(root in node()) {
            let classification = Classifier::new().classify(&root).expect("supported shapes");
            prop_assert_eq!(classification.trace.len(), node_count(&root));
            let last = classification.trace.steps().last().expect("non-empty trace");
            prop_assert!(last.path.is_root());
        }

        #[test]
        fn sequence_order_is_irrelevant(children in proptest::collection::vec(node(), 1..4)) {
            let classifier = Classifier::new();
            let forward = classifier.classify(&CostNode::seq(children.clone())).expect("supported");
            let reversed: Vec<_> = children.into_iter().rev().collect();
            let backward = classifier.classify(&CostNode::seq(reversed)).expect("supported");
            prop_assert!(forward.growth == backward.growth);
        }

        #[test]
        fn loop_dominates_body(count in count(), body in node()) {
            let classifier = Classifier::new();
            let body_growth = classifier.classify(&body).expect("supported").growth;
            let looped = classifier
                .classify(&CostNode::loop_over(count, body))
                .expect("supported")
                .growth;
            prop_assert_eq!(
                Comparator::new().compare(&body_growth, &looped),
                Dominance::StrictlySlower
            );
        }

        #[test]
        fn batch_matches_sequential(roots in proptest::collection::vec(node(), 0..6)) {
            let classifier = Classifier::new();
            let batch = classifier.classify_batch(&roots);
            for (root, parallel) in roots.iter().zip(batch) {
                let sequential = classifier.classify(root).expect("supported").growth;
                prop_assert!(parallel.expect("supported").growth == sequential);
            }
        }
    }
}
