//! Benchmark for minimum spanning tree construction.
//!
//! Measures:
//! - Kruskal vs Prim over the adjacency-list representation
//! - Kruskal vs Prim over the adjacency-matrix representation
//! - Scaling with node count on a fixed-density random graph

#![allow(clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trellis_core::{
    mst_kruskal, mst_prim, AdjacencyList, AdjacencyMatrix, Graph, NodeArena, NodeId,
};

const SIZES: [usize; 3] = [64, 256, 1024];

/// Average out-degree of generated graphs.
const DEGREE: usize = 8;

/// Deterministic xorshift so runs are comparable.
fn next(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

/// Connected undirected graph: a random spanning path plus random chords.
fn random_graph<G: Graph<Weight = u32>>(nodes: &[NodeId]) -> G {
    let mut graph = G::undirected(nodes.to_vec());
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let len = nodes.len() as u64;

    for pair in nodes.windows(2) {
        let w = (next(&mut state) % 1000) as u32 + 1;
        let _ = graph.add_edge(pair[0], pair[1], w);
    }
    for _ in 0..nodes.len() * DEGREE / 2 {
        let a = nodes[(next(&mut state) % len) as usize];
        let b = nodes[(next(&mut state) % len) as usize];
        let w = (next(&mut state) % 1000) as u32 + 1;
        let _ = graph.add_edge(a, b, w);
    }
    graph
}

fn bench_mst_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_list");

    for size in SIZES {
        let nodes = NodeArena::new().insert_all(0..size);
        let graph: AdjacencyList<u32> = random_graph(&nodes);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("kruskal", size), &graph, |b, g| {
            b.iter(|| black_box(mst_kruskal(g)));
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &graph, |b, g| {
            b.iter(|| black_box(mst_prim(g)));
        });
    }

    group.finish();
}

fn bench_mst_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst_matrix");

    for size in SIZES {
        let nodes = NodeArena::new().insert_all(0..size);
        let graph: AdjacencyMatrix<u32> = random_graph(&nodes);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("kruskal", size), &graph, |b, g| {
            b.iter(|| black_box(mst_kruskal(g)));
        });
        group.bench_with_input(BenchmarkId::new("prim", size), &graph, |b, g| {
            b.iter(|| black_box(mst_prim(g)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mst_list, bench_mst_matrix);
criterion_main!(benches);
