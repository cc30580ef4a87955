//! Classic Algorithm Classification Examples
//!
//! Classifies the textbook algorithms by their structural descriptions and
//! prints the resulting growth class with its derivation.
//!
//! Run with: cargo run --example classic_algorithms

use ordo::prelude::*;

// Helper for a loop of `var` iterations
fn times(var: &str, body: CostNode) -> CostNode {
    CostNode::loop_over(IterationCount::Linear(Growth::linear(var)), body)
}

fn report(name: &str, root: &CostNode, classifier: &Classifier) {
    println!("{name}");
    match classifier.classify(root) {
        Ok(classification) => {
            println!("  result: {}", classification.growth);
            for step in classification.trace.steps() {
                println!("    {step}");
            }
        }
        Err(failure) => {
            println!("  failed: {failure}");
            println!("  {} rules applied before the failure", failure.trace.len());
        }
    }
    println!();
}

fn main() {
    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║              Ordo: Classic Algorithm Classification               ║");
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    let classifier = Classifier::new();

    // Bubble sort: the inner loop runs up to the outer index.
    let bubble = CostNode::loop_over(
        IterationCount::Triangular(Growth::linear("n")),
        CostNode::branch(CostNode::unit(), [CostNode::unit(), CostNode::unit()]),
    );
    report("Bubble sort", &bubble, &classifier);

    // Binary search: T(n) = T(n/2) + O(1)
    let binary_search = CostNode::recursive(Recurrence::divide("n", 1, 2, Growth::constant()));
    report("Binary search", &binary_search, &classifier);

    // Merge sort: T(n) = 2T(n/2) + O(n)
    let merge_sort = CostNode::recursive(Recurrence::divide("n", 2, 2, Growth::linear("n")));
    report("Merge sort", &merge_sort, &classifier);

    // Karatsuba: T(n) = 3T(n/2) + O(n)
    let karatsuba = CostNode::recursive(Recurrence::divide("n", 3, 2, Growth::linear("n")));
    report("Karatsuba multiplication", &karatsuba, &classifier);

    // Naive matrix multiplication by blocks: T(n) = 8T(n/2) + O(n²)
    let blocks = CostNode::recursive(Recurrence::divide("n", 8, 2, Growth::quadratic("n")));
    report("Block matrix multiplication", &blocks, &classifier);

    // Towers of Hanoi: T(n) = 2T(n-1) + O(1)
    let hanoi = CostNode::recursive(Recurrence::subtract("n", 2, 1, Growth::constant()));
    report("Towers of Hanoi", &hanoi, &classifier);

    // Grid traversal over n rows and m columns.
    let grid = times("n", times("m", CostNode::unit()));
    report("Grid traversal", &grid, &classifier);

    // Scan, then sort a subset of size k, then scan again.
    let subset = CostNode::seq([
        times("n", CostNode::unit()),
        CostNode::leaf(Growth::n_log_n("k")),
        times("n", CostNode::unit()),
    ]);
    report("Subset sort (k independent)", &subset, &classifier);

    let related = Classifier::with_config(
        ClassifierConfig::new().with_relations(Relations::new().with_equal("k", "n")),
    );
    report("Subset sort (k = n)", &subset, &related);

    // A loop whose control flow could not be resolved.
    let unresolved = times(
        "n",
        CostNode::loop_over(IterationCount::Unresolved("while gcd(a, b) > 1".into()), CostNode::unit()),
    );
    report("Unresolved inner loop", &unresolved, &classifier);

    // Non-uniform split: T(n) = T(n/3) + T(2n/3) + O(n)
    let uneven = CostNode::recursive(Recurrence::new(
        "n",
        [Subproblem::divide(1, 3), Subproblem::divide(1, Rational::from_i64(3, 2))],
        Growth::linear("n"),
    ));
    report("Uneven split", &uneven, &classifier);
}
