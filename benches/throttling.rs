use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use throttling::search::power_throttling_number;
use throttling::util::generators::random_graph;

const EDGE_PROBABILITY: f64 = 0.3;
const SEED: u64 = 7;

fn bench_throttling(c: &mut Criterion) {
    let mut group = c.benchmark_group("power_throttling_number");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(SEED);
    for order in 5..=9 {
        let graph = random_graph(order, EDGE_PROBABILITY, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(order), &graph, |b, graph| {
            b.iter(|| power_throttling_number(graph))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throttling);
criterion_main!(benches);
