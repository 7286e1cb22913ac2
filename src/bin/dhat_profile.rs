//! DHAT heap profiler for slotlru.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Steady-state eviction should allocate nothing beyond the values
//! themselves: evicted slots are reused and the index never grows past
//! capacity.

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use slotlru::builder::LruCacheBuilder;
use slotlru::policy::lru::LruCache;

/// XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// 90% of accesses hit 10% of the keys; misses are filled with `put`.
fn hotset_workload(cache: &mut LruCache<u64, u64>, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot = UNIVERSE / 10;
    for _ in 0..OPERATIONS {
        let key = if rng.next_u64() % 10 < 9 {
            rng.next_u64() % hot
        } else {
            hot + rng.next_u64() % (UNIVERSE - hot)
        };
        if cache.get(&key).is_none() {
            cache.put(key, key);
        }
    }
}

/// Every `put` past capacity evicts; no `get`s.
fn eviction_churn(cache: &mut LruCache<u64, u64>) {
    for i in 0..OPERATIONS as u64 {
        cache.put(UNIVERSE + i, i);
    }
}

/// Remove and re-insert, exercising free-list reuse from the middle of the list.
fn remove_reinsert(cache: &mut LruCache<u64, u64>, seed: u64) {
    let mut rng = XorShift64::new(seed);
    for _ in 0..OPERATIONS / 2 {
        let key = rng.next_u64() % UNIVERSE;
        if cache.remove(&key).is_none() {
            cache.put(key, key);
        }
    }
}

fn profile(label: &str, mut cache: LruCache<u64, u64>) {
    println!("=== Profiling {label} ===");
    hotset_workload(&mut cache, 42);
    eviction_churn(&mut cache);
    remove_reinsert(&mut cache, 7);
    cache.clear();
    hotset_workload(&mut cache, 99);
    println!("  Final size: {}", cache.len());
}

fn profile_string_values() {
    println!("=== Profiling String values ===");
    let mut cache: LruCache<u64, String> = LruCache::new(CAPACITY);
    for i in 0..OPERATIONS as u64 {
        cache.put(i % UNIVERSE, format!("value-{i}"));
    }
    println!("  Final size: {}", cache.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("slotlru DHAT Heap Profiling");
    println!("===========================\n");

    profile("lazy growth", LruCache::new(CAPACITY));
    profile(
        "preallocated",
        LruCacheBuilder::new(CAPACITY).preallocate(true).build(),
    );
    profile_string_values();

    println!("\n===========================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
