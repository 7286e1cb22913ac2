use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotlru::policy::lru::LruCache;

fn filled(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity);
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_lru_put_get(c: &mut Criterion) {
    c.bench_function("lru_put_get", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(black_box(i + 10_000), i);
                    let _ = black_box(cache.get(&black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_get_hit");
    for capacity in [64usize, 1024, 65_536] {
        group.throughput(Throughput::Elements(1024));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            let mut cache = filled(cap);
            let mut rng = StdRng::seed_from_u64(42);
            let keys: Vec<u64> = (0..1024).map(|_| rng.random_range(0..cap as u64)).collect();
            b.iter(|| {
                for key in &keys {
                    let _ = black_box(cache.get(key));
                }
            });
        });
    }
    group.finish();
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(black_box(10_000 + i), i);
                }
                cache
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_pop_lru(c: &mut Criterion) {
    c.bench_function("lru_pop_lru", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                while let Some(entry) = cache.pop_lru() {
                    let _ = black_box(entry);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

/// 90% of requests go to 10% of the keys; misses are filled with `put`.
fn bench_lru_hotset(c: &mut Criterion) {
    let universe = 16_384u64;
    let hot = universe / 10;
    let mut rng = StdRng::seed_from_u64(7);
    let keys: Vec<u64> = (0..8192)
        .map(|_| {
            if rng.random_bool(0.9) {
                rng.random_range(0..hot)
            } else {
                rng.random_range(hot..universe)
            }
        })
        .collect();

    c.bench_function("lru_hotset_get_or_put", |b| {
        b.iter_batched(
            || LruCache::new(2048),
            |mut cache| {
                for &key in &keys {
                    if cache.get(&key).is_none() {
                        cache.put(key, key);
                    }
                }
                cache
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_peek_vs_contains(c: &mut Criterion) {
    let cache = filled(1024);
    let mut group = c.benchmark_group("lru_read_only");
    group.bench_function("contains", |b| {
        b.iter(|| {
            for i in 0..2048u64 {
                let _ = black_box(cache.contains(&black_box(i)));
            }
        })
    });
    group.bench_function("peek", |b| {
        b.iter(|| {
            for i in 0..2048u64 {
                let _ = black_box(cache.peek(&black_box(i)));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_lru_put_get,
    bench_lru_get_hit,
    bench_lru_eviction_churn,
    bench_lru_pop_lru,
    bench_lru_hotset,
    bench_lru_peek_vs_contains
);
criterion_main!(benches);
