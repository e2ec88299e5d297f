use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphtrees::graph::{dijkstra, kruskal, prim, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 10_000];
const AVERAGE_DEGREE: usize = 8;

/// Connected graph: a path through every vertex plus random chords.
fn generate_graph(vertex_count: usize) -> Graph<i64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut graph = Graph::new(vertex_count);
    for v in 1..vertex_count {
        graph
            .add_edge(v, v + 1, rng.gen_range(1..1_000))
            .expect("path endpoints are in range");
    }
    for _ in 0..vertex_count * AVERAGE_DEGREE / 2 {
        let u = rng.gen_range(1..=vertex_count);
        let v = rng.gen_range(1..=vertex_count);
        graph
            .add_edge(u, v, rng.gen_range(1..1_000))
            .expect("random endpoints are in range");
    }
    graph
}

fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_trees");

    for &n in VERTEX_COUNTS {
        let graph = generate_graph(n);

        group.bench_with_input(BenchmarkId::new("prim", n), &graph, |b, g| {
            b.iter(|| prim::minimum_spanning_tree(black_box(g), 1).expect("source exists"))
        });
        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, g| {
            b.iter(|| kruskal::minimum_spanning_forest(black_box(g)).expect("no overflow"))
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, g| {
            b.iter(|| dijkstra::shortest_path_tree(black_box(g), 1).expect("source exists"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spanning_trees);
criterion_main!(benches);
