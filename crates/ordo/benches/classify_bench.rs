//! Benchmarks for classifying structural descriptions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordo::prelude::*;

/// Builds `depth` nested linear loops over alternating variables.
fn nested_loops(depth: usize) -> CostNode {
    (0..depth).fold(CostNode::unit(), |body, level| {
        let var = if level % 2 == 0 { "n" } else { "m" };
        CostNode::loop_over(IterationCount::Linear(Growth::linear(var)), body)
    })
}

/// Builds a wide sequence mixing loops, branches and recursive calls.
fn wide_sequence(width: usize) -> CostNode {
    CostNode::seq((0..width).map(|i| match i % 4 {
        0 => CostNode::loop_over(IterationCount::Triangular(Growth::linear("n")), CostNode::unit()),
        1 => CostNode::branch(
            CostNode::leaf(Growth::log("n")),
            [CostNode::leaf(Growth::linear("n")), CostNode::leaf(Growth::n_log_n("k"))],
        ),
        2 => CostNode::recursive(Recurrence::divide("n", 3, 2, Growth::linear("n"))),
        _ => CostNode::leaf(Growth::linear("m")),
    }))
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_nested");
    let classifier = Classifier::new();

    for depth in [4, 16, 64, 200] {
        let root = nested_loops(depth);
        group.bench_with_input(BenchmarkId::new("loops", depth), &depth, |b, _| {
            b.iter(|| black_box(classifier.classify(&root)));
        });
    }

    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_sequence");
    let classifier = Classifier::new();

    for width in [8, 32, 128] {
        let root = wide_sequence(width);
        group.bench_with_input(BenchmarkId::new("mixed", width), &width, |b, _| {
            b.iter(|| black_box(classifier.classify(&root)));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let classifier = Classifier::new();
    let roots: Vec<CostNode> = (0..256).map(|i| wide_sequence(8 + i % 8)).collect();

    c.bench_function("classify_batch_256", |b| {
        b.iter(|| black_box(classifier.classify_batch(&roots)));
    });
}

criterion_group!(benches, bench_nested, bench_sequence, bench_batch);
criterion_main!(benches);
