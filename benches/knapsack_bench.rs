//! Criterion benchmarks for the knapsack GA.
//!
//! Uses synthetic instances of increasing size to measure per-run overhead
//! of each crossover operator and initialization policy.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_evo::ga::{fitness, Chromosome, Crossover, GaConfig, GaRunner, Initialization};
use knapsack_evo::Instance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Synthetic instances
// ===========================================================================

fn synthetic_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<u64> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let values: Vec<u64> = (0..n).map(|_| rng.random_range(1..100)).collect();
    let capacity = weights.iter().sum::<u64>() / 2;
    Instance::new(weights, values, capacity).expect("non-empty synthetic instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &n in &[50usize, 500, 5000] {
        let instance = synthetic_instance(n, 42);
        let chromosome = Chromosome::new((0..n).map(|i| i % 3 == 0).collect());
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| fitness(black_box(&chromosome), black_box(&instance)))
        });
    }
    group.finish();
}

fn bench_ga_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_crossover");
    group.sample_size(10);

    let instance = synthetic_instance(100, 7);
    for crossover in Crossover::ALL {
        let config = GaConfig::default().with_crossover(crossover).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(crossover),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(&instance), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_size");
    group.sample_size(10);

    for (n, init) in [
        (20usize, Initialization::Random),
        (200, Initialization::Random),
        (200, Initialization::Greedy),
    ] {
        let instance = synthetic_instance(n, 11);
        let config = GaConfig::default().with_initialization(init).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{n}_{init}"), n),
            &(instance, config),
            |b, (inst, config)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(inst), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_ga_crossover, bench_ga_size);
criterion_main!(benches);
