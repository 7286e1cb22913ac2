//! # Cache Trait Hierarchy
//!
//! Generic interfaces for code that should work against "a cache" rather than
//! a concrete [`LruCache`](crate::policy::lru::LruCache), e.g. a retrieval
//! layer that memoizes hot lookups.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) / is_empty(&) / capacity(&)     │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │  remove(&K) → Option<V>                 │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → usize               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! `get` may reorder entries; `contains` never does.

/// Operations every cache supports.
///
/// # Example
///
/// ```
/// use slotlru::traits::CoreCache;
/// use slotlru::policy::lru::LruCache;
///
/// fn lookup_or_load<C>(cache: &mut C, id: u64, load: impl FnOnce(u64) -> String) -> String
/// where
///     C: CoreCache<u64, String>,
/// {
///     if let Some(hit) = cache.get(&id) {
///         return hit.clone();
///     }
///     let loaded = load(id);
///     cache.insert(id, loaded.clone());
///     loaded
/// }
///
/// let mut cache: LruCache<u64, String> = LruCache::new(100);
/// assert_eq!(lookup_or_load(&mut cache, 7, |id| format!("doc-{id}")), "doc-7");
/// assert_eq!(lookup_or_load(&mut cache, 7, |_| unreachable!()), "doc-7");
/// assert_eq!(CoreCache::len(&cache), 1);
/// ```
pub trait CoreCache<K, V> {
    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// A new key arriving at a full cache evicts one entry first.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key`, counting the lookup as a use.
    ///
    /// [`contains`](Self::contains) tests membership without that side effect.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Membership test that leaves eviction order alone.
    fn contains(&self, key: &K) -> bool;

    /// Live entry count.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Upper bound on `len`, fixed at construction.
    fn capacity(&self) -> usize;

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that allow removing an arbitrary key.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a key, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes several keys; results are in input order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// LRU-specific operations that respect recency order.
///
/// # Example
///
/// ```
/// use slotlru::traits::CoreCache;
/// use slotlru::policy::lru::LruCache;
///
/// let mut cache: LruCache<&str, u32> = LruCache::new(10);
/// for (rank, segment) in ["intro", "body", "outro"].into_iter().enumerate() {
///     cache.insert(segment, rank as u32);
/// }
/// assert_eq!(cache.recency_rank("outro"), Some(0));
/// assert_eq!(cache.recency_rank("intro"), Some(2));
///
/// // "intro" becomes most recent, leaving "body" at the back.
/// assert!(cache.touch("intro"));
/// assert_eq!(cache.peek_lru(), Some((&"body", &1)));
/// assert_eq!(cache.pop_lru(), Some(("body", 1)));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Evicts the back of the recency order on demand.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the LRU entry without removing it or changing order.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Promotes `key` without reading it; `false` when absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Position in recency order (0 = most recent). O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker for caches that are safe to share between threads.
///
/// Plain caches are single-owner; share one behind a single lock (see
/// `ConcurrentLruCache` with the `concurrency` feature) rather than locking
/// its parts separately.
pub trait ConcurrentCache: Send + Sync {}
