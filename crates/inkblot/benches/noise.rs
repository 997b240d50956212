mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inkblot::noise::GradientNoiseField;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POINTS: usize = 4096;
const OCTAVES: [u32; 4] = [1, 2, 4, 8];

fn points(seed: u64) -> Vec<(f64, f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..POINTS)
        .map(|_| {
            (
                rng.random_range(0.0..5.0),
                rng.random_range(0.0..5.0),
                rng.random_range(0.0..0.6),
            )
        })
        .collect()
}

fn noise_uncached_benches(c: &mut Criterion) {
    let field = GradientNoiseField::new(0x5eed);
    let pts = points(0xA11CE);

    let mut group = c.benchmark_group("noise/evaluate");
    group.throughput(common::elements_throughput(pts.len()));
    group.bench_function("uncached", |b| {
        b.iter(|| {
            let sum: f64 = pts.iter().map(|&(x, y, z)| field.evaluate(x, y, z)).sum();
            black_box(sum);
        });
    });
    group.finish();
}

fn noise_fractal_benches(c: &mut Criterion) {
    let pts = points(0xBEEF);

    let mut group = c.benchmark_group("noise/fractal");
    group.throughput(common::elements_throughput(pts.len()));

    for &octaves in &OCTAVES {
        group.bench_with_input(BenchmarkId::from_parameter(octaves), &octaves, |b, &o| {
            b.iter(|| {
                // Fresh field per iteration so the cache starts cold.
                let mut field = GradientNoiseField::new(0x5eed);
                let sum: f64 = pts
                    .iter()
                    .map(|&(x, y, z)| field.fractal(x, y, z, o, 0.5, 2.0))
                    .sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = noise_uncached_benches, noise_fractal_benches
}
criterion_main!(benches);
