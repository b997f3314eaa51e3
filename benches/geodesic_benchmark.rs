use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use isomap_embed::distance::{pairwise_distances, EuclideanDistance};
use isomap_embed::geodesic::geodesic_distances;
use isomap_embed::graph::build_knn_graph;
use ndarray::Array2;
use rand::distr::{Distribution, Uniform};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Clone)]
pub struct GeodesicBenchConfig {
    seed: u64,
    sample_counts: Vec<usize>,
    n_features: usize,
    n_neighbors: usize,
    measurement_time: u64,
    sample_size: usize,
}

impl Default for GeodesicBenchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sample_counts: vec![100, 250, 500, 1000],
            n_features: 16,
            n_neighbors: 10,
            measurement_time: 10,
            sample_size: 10,
        }
    }
}

fn create_test_points(n_samples: usize, n_features: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let value_dist = Uniform::try_from(0.0..1.0).unwrap();
    Array2::from_shape_fn((n_samples, n_features), |_| value_dist.sample(&mut rng))
}

fn bench_geodesic_solver(c: &mut Criterion) {
    let config = GeodesicBenchConfig::default();
    let mut group = c.benchmark_group("geodesic_distances");
    group
        .measurement_time(Duration::from_secs(config.measurement_time))
        .sample_size(config.sample_size);

    for &n_samples in &config.sample_counts {
        let points = create_test_points(n_samples, config.n_features, config.seed);
        let distances = pairwise_distances(points.view(), &EuclideanDistance).unwrap();
        let graph = build_knn_graph(&distances, config.n_neighbors).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &graph,
            |b, graph| b.iter(|| geodesic_distances(graph).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_geodesic_solver);
criterion_main!(benches);
