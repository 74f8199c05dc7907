use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use roadnav_lib::{sample_city, PrefixIndex, Router, DEFAULT_MAX_RESULTS};
use std::hint::black_box;

static ROUTER: Lazy<Router> = Lazy::new(|| {
    let (adjacency, nodes) = sample_city();
    let mut router = Router::default();
    router.set_graph(adjacency, nodes);
    router
});
static INDEX: Lazy<PrefixIndex> = Lazy::new(|| {
    let (_, nodes) = sample_city();
    PrefixIndex::from_nodes(&nodes)
});

fn bench_routes(c: &mut Criterion) {
    c.bench_function("dijkstra_corner_to_corner", |b| {
        b.iter(|| ROUTER.find_route(black_box(0), black_box(24)))
    });
    c.bench_function("dijkstra_named_pair", |b| {
        b.iter(|| ROUTER.find_route(black_box(20), black_box(4)))
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("prefix_search_single_letter", |b| {
        b.iter(|| INDEX.search(black_box("s"), DEFAULT_MAX_RESULTS))
    });
    c.bench_function("prefix_index_build", |b| {
        let (_, nodes) = sample_city();
        b.iter(|| PrefixIndex::from_nodes(black_box(&nodes)))
    });
}

criterion_group!(benches, bench_routes, bench_search);
criterion_main!(benches);
