use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kruskal_trace::graph::{kruskal, Edge, Graph};
use kruskal_trace::render::{RenderOptions, Trace};

fn random_graph(n: usize, m: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let edges = (0..m)
        .map(|_| {
            Edge::new(
                rng.gen_range(1..=n),
                rng.gen_range(1..=n),
                rng.gen_range(-100..=100),
            )
        })
        .collect();
    Graph::new(n, edges)
}

fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");
    for &(n, m) in &[(10, 30), (100, 500), (1000, 5000)] {
        let graph = random_graph(n, m, 42);
        group.bench_with_input(
            BenchmarkId::new("run", format!("{n}x{m}")),
            &graph,
            |b, graph| b.iter(|| kruskal::run(black_box(graph))),
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let graph = random_graph(100, 500, 7);
    let run = kruskal::run(&graph).expect("generated graph is valid");
    c.bench_function("render 100x500", |b| {
        b.iter(|| Trace::new(black_box(&run), RenderOptions::default()).to_string())
    });
}

criterion_group!(benches, bench_kruskal, bench_render);
criterion_main!(benches);
