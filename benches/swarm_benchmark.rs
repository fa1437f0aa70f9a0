/*
 * Swarm Simulation Benchmark
 *
 * Measures the per-tick cost of the step loop at several swarm sizes.
 * The loop is O(N) and sequential, so timings should scale linearly.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use trails::params::SimulationParams;
use trails::simulation::{Bounds, Swarm};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm_step");

    for num_particles in [500usize, 2000, 5000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_particles),
            num_particles,
            |b, &n| {
                let mut rng = StdRng::seed_from_u64(7);
                let bounds = Bounds::new(800.0, 450.0);
                let mut swarm = Swarm::initialize(n, bounds, &mut rng);
                let params = SimulationParams::default();

                b.iter(|| {
                    swarm.step(black_box(bounds), &params);
                });
            },
        );
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
    targets = bench_step
}

criterion_main!(benches);
