mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use inkblot::random::SeededRandom;
use inkblot::sampling::{ParticlePattern, SamplingArea};

const PAIRS: usize = 2048;
const MARGINS: [f64; 3] = [0.0, 0.1, 0.3];

fn sampling_pattern_benches(c: &mut Criterion) {
    for pattern in [
        ParticlePattern::Standard,
        ParticlePattern::Inverted,
        ParticlePattern::Star,
    ] {
        let mut group = c.benchmark_group(format!("sampling/{pattern}"));
        group.throughput(common::elements_throughput(PAIRS));
        let sampler = pattern.sampler();

        for &margin in &MARGINS {
            let area = SamplingArea::new(1024.0, margin, margin);
            let mut rng = SeededRandom::new(0xC0FFEE ^ margin.to_bits() as u32);

            group.bench_with_input(BenchmarkId::from_parameter(margin), &margin, |b, _| {
                b.iter(|| {
                    let mut attempts = 0u32;
                    for _ in 0..PAIRS {
                        attempts += sampler.sample(&mut rng, &area).attempts;
                    }
                    black_box(attempts);
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_pattern_benches
}
criterion_main!(benches);
