use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use cacheperf::config::CacheConfig;
use cacheperf::lru::LruKeyCache;
use cacheperf::simulator::Simulator;
use cacheperf::util;

/// Benchmark experimenting
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traces");

    // The locality pattern is tiny, so cycle it into a trace long enough to
    // dominate setup costs
    let addresses: Vec<u64> = util::locality_address_trace()
        .into_iter()
        .cycle()
        .take(100_000)
        .collect();

    for (name, config) in [
        ("16x4", CacheConfig::direct_mapped(16, 4)),
        ("64x16", CacheConfig::direct_mapped(64, 16)),
        ("256x64", CacheConfig::direct_mapped(256, 64)),
    ] {
        group.bench_with_input(
            BenchmarkId::new("Direct mapped: ", name),
            &addresses,
            |bench, addresses| {
                bench.iter(|| {
                    Simulator::new(config).unwrap().run(addresses);
                });
            },
        );
    }

    let keys = util::browsing_key_trace(100_000, 50);
    for capacity in [5usize, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("LRU pages: ", capacity),
            &keys,
            |bench, keys| {
                bench.iter(|| {
                    let mut cache = LruKeyCache::new(capacity).unwrap();
                    for key in keys {
                        cache.access(key.clone());
                    }
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = criterion_benchmark
);
criterion_main!(benches);
