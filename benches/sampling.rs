use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use weighted_pick::{
    sample_with_repeats_with_rng, sample_without_repeats_with_rng, weighted_n_of_with_rng,
    AliasTable, Population, SampleMode, Value,
};

fn skewed_weights(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 1.0 / (1.0 + i as f64).powf(1.3))
        .collect()
}

fn bench_alias_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_table");
    let sizes = [100, 1_000, 10_000];

    for &size in &sizes {
        let weights = skewed_weights(size);
        group.bench_function(format!("build_n{}", size), |b| {
            b.iter(|| AliasTable::from_weights(black_box(&weights)))
        });
    }

    let table = AliasTable::from_weights(&skewed_weights(1_000)).expect("positive sum");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    group.bench_function("draw_n1000", |b| b.iter(|| table.draw(&mut rng)));
    group.finish();
}

fn bench_with_repeats(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_repeats");
    let sizes = [100, 1_000, 10_000];
    let n = 100;

    for &size in &sizes {
        let weights = skewed_weights(size);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        group.bench_function(format!("n{}_k{}", size, n), |b| {
            b.iter(|| sample_with_repeats_with_rng(black_box(&weights), n, &mut rng))
        });
    }
    group.finish();
}

fn bench_without_repeats(c: &mut Criterion) {
    let mut group = c.benchmark_group("without_repeats");
    // Each round rebuilds a table, so keep sizes modest.
    let sizes = [100, 1_000];
    let n = 10;

    for &size in &sizes {
        let weights = skewed_weights(size);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        group.bench_function(format!("n{}_k{}", size, n), |b| {
            b.iter(|| sample_without_repeats_with_rng(black_box(&weights), n, &mut rng))
        });
    }

    let list = Population::from((0..1_000u32).collect::<Vec<_>>());
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    group.bench_function("weighted_n_of_list_n1000_k10", |b| {
        b.iter(|| {
            weighted_n_of_with_rng(
                10,
                SampleMode::WithoutRepeats,
                black_box(&list),
                |&x| Value::from(f64::from(x % 13)),
                &mut rng,
            )
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_alias_table,
    bench_with_repeats,
    bench_without_repeats
);
criterion_main!(benches);
