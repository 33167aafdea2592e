use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sapper_core::{BoardGenerator, GameConfig, RandomBoardGenerator};
use std::hint::black_box;

/// Rejection sampling cost by mine density, from sparse boards up to one safe cell left.
fn gen_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection_sampling");

    for (size, mines) in [(10, 10), (16, 40), (20, 200), (20, 360), (20, 399)] {
        let config = GameConfig::new(size, mines).expect("benchmark configs are valid");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}/{mines}")),
            &config,
            |b, &config| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed = seed.wrapping_add(1);
                    black_box(RandomBoardGenerator::new(seed).generate(black_box(config)))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, gen_tiers);
criterion_main!(benches);
