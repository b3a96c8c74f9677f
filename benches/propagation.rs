use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use throttling::search::{enumerate_color_sets, propagation_time, ColorSet};
use throttling::util::generators::{complete_graph, path_graph};

// Order configurations for benchmarks
const SMALL_ORDER: usize = 6;
const LARGE_ORDER: usize = 9;

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_color_sets");

    for order in [SMALL_ORDER, LARGE_ORDER] {
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, &order| {
            b.iter(|| enumerate_color_sets(order))
        });
    }

    group.finish();
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagation_time");

    // a lone endpoint forces its way down the whole path, the worst case for
    // round count
    let path = path_graph(LARGE_ORDER);
    let endpoint = ColorSet::from_bits(1, LARGE_ORDER);
    group.bench_function("path_endpoint", |b| {
        b.iter(|| propagation_time(&path, &endpoint))
    });

    // a single vertex of a complete graph finishes during domination
    let complete = complete_graph(LARGE_ORDER);
    let single = ColorSet::from_bits(1, LARGE_ORDER);
    group.bench_function("complete_single", |b| {
        b.iter(|| propagation_time(&complete, &single))
    });

    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_propagation);
criterion_main!(benches);
