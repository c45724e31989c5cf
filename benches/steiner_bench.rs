//! Criterion benchmarks for steiner-ga.
//!
//! Measures the network builder on its own (it runs once per child per
//! generation) and short fixed-length optimizer runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use steiner_ga::ga::operators::random_point;
use steiner_ga::ga::{SteinerConfig, SteinerOptimizer};
use steiner_ga::geometry::{presets, BoundingBox, Point};
use steiner_ga::network::build_network;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_build_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_network");
    let terminals = presets::two_by_three_grid();
    let bounds = BoundingBox::enclosing(&terminals).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    for &k in &[1usize, 10, 50] {
        let steiner: Vec<Point> = (0..k).map(|_| random_point(&bounds, true, &mut rng)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(k), &steiner, |b, s| {
            b.iter(|| black_box(build_network(black_box(&terminals), black_box(s))))
        });
    }
    group.finish();
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("steiner_generations");
    group.sample_size(10);

    for (pop, gen) in [(50usize, 20usize), (100, 20), (100, 50)] {
        let config = SteinerConfig::default()
            .with_population_size(pop)
            .with_parent_sigma(pop as f64 / 25.0)
            .with_stagnation_limit(usize::MAX)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, cfg| {
                b.iter(|| {
                    let mut opt = SteinerOptimizer::new(cfg.clone()).unwrap();
                    black_box(opt.run())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_build_network, bench_generations);
criterion_main!(benches);
