use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbtree_core::OrderedIndex;

fn random_keys(count: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [1_000, 10_000, 100_000] {
        let keys = random_keys(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut index = OrderedIndex::with_capacity(keys.len());
                for &key in keys {
                    index.insert(key);
                }
                black_box(index.len())
            })
        });
    }
    group.finish();
}

fn bench_insert_delete(c: &mut Criterion) {
    let keys = random_keys(10_000);
    c.bench_function("insert_then_delete_10k", |b| {
        b.iter(|| {
            let mut index: OrderedIndex = keys.iter().copied().collect();
            for &key in &keys {
                index.delete(key);
            }
            black_box(index.is_empty())
        })
    });
}

fn bench_bounds(c: &mut Criterion) {
    let keys = random_keys(100_000);
    let probes = random_keys(1_000);
    let index: OrderedIndex = keys.into_iter().collect();

    c.bench_function("lower_bound_100k", |b| {
        b.iter(|| {
            for &probe in &probes {
                black_box(index.lower_bound(probe));
            }
        })
    });
    c.bench_function("upper_bound_100k", |b| {
        b.iter(|| {
            for &probe in &probes {
                black_box(index.upper_bound(probe));
            }
        })
    });
}

criterion_group!(benches, bench_insert, bench_insert_delete, bench_bounds);
criterion_main!(benches);
