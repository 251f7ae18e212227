/*
 * Boid Simulation Benchmark
 *
 * Measures the brute-force neighbor search, the force pass and the full
 * simulation tick for a range of flock sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flockview::{Domain, Flock, Simulation, SimulationConfig, SpawnSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const SIZES: [usize; 4] = [50, 100, 200, 300];

fn seeded_flock(n: usize) -> Flock {
    let mut rng = StdRng::seed_from_u64(n as u64);
    Flock::new(n, Domain::new(1200.0, 800.0), &SpawnSettings::default(), &mut rng)
}

// Benchmark the neighbor statistics scan
fn bench_neighbour_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbour_search");

    for n in SIZES {
        let flock = seeded_flock(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &flock, |b, flock| {
            b.iter(|| black_box(flock.average_neighbour_count(black_box(50.0))));
        });
    }

    group.finish();
}

// Benchmark the force calculations (separation, alignment, cohesion)
fn bench_force_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_calculations");

    for n in SIZES {
        let mut flock = seeded_flock(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| flock.apply_rules(1.0, 1.0, 1.0, black_box(50.0), 5.0));
        });
    }

    group.finish();
}

// Benchmark the whole tick, statistics included
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for n in SIZES {
        let config = SimulationConfig {
            initial_boids: Some(n),
            rng_seed: Some(7),
            ..SimulationConfig::default()
        };
        let Ok(mut sim) = Simulation::new(&config) else {
            continue;
        };
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(sim.tick()));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_neighbour_search, bench_force_calculations, bench_tick
}

criterion_main!(benches);
