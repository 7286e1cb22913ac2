//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity key/value cache that evicts the least recently used entry
//! when a new key arrives while full. Every operation except the O(n)
//! inspection helpers is O(1) amortized.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V, S>                           │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  index: HashMap<K, SlotId, S>                                │   │
//!   │   │    key_a ─────────────────────────────┐                      │   │
//!   │   │    key_b ───────────────────┐         │                      │   │
//!   │   │    key_c ─────────┐         │         │                      │   │
//!   │   └───────────────────┼─────────┼─────────┼──────────────────────┘   │
//!   │                       ▼         ▼         ▼                          │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  arena: SlotArena<Entry { key, value, link }>                │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [key_c] ◄──► [key_b] ◄──► [key_a] ◄── tail         │   │
//!   │   │   (MRU)                                (LRU)                 │   │
//!   │   │              list: RecencyList (links live in entries)       │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index stores only slot ids; each value lives exactly once, in its
//! arena entry.
//!
//! ## Operations Flow
//!
//! ```text
//!   put(D) while full (capacity = 3)
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!     1. pop_back → C, remove C from index, free C's slot
//!     2. allocate D (reuses C's slot), push_front, index D
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   get(B) / put(B, _) on an existing key
//!     head ──► [B] ◄──► [D] ◄──► [A] ◄── tail
//!
//!   contains(A) / peek(A): order unchanged
//! ```
//!
//! ## Cache States
//!
//! `Empty` (len 0) → `Partial` (0 < len < capacity) → `Full` (len == capacity).
//! Only an insert-`put` moves forward; eviction keeps a full cache full;
//! `clear` returns to `Empty`. A capacity-0 cache is permanently both `Empty`
//! and `Full`: `is_empty()` and `is_full()` are always `true` and every `put`
//! is dropped.
//!
//! ## Thread Safety
//!
//! - `LruCache`: single owner, no internal locking.
//! - `ConcurrentLruCache` (feature `concurrency`): one `parking_lot::RwLock`
//!   around the whole cache. Index, list and arena are never locked
//!   separately, so no reader can observe an index update without the
//!   matching list update.

use std::borrow::Borrow;
use std::collections::{HashMap, TryReserveError};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::builder::validate_capacity;
use crate::ds::recency_list::{Link, Linked, RecencyList};
use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Arena entry: the key (needed to unindex on eviction), the value, and the
/// recency links.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    link: Link,
}

impl<K, V> Linked for Entry<K, V> {
    #[inline]
    fn link(&self) -> &Link {
        &self.link
    }

    #[inline]
    fn link_mut(&mut self) -> &mut Link {
        &mut self.link
    }
}

/// Fixed-capacity LRU cache.
///
/// # Example
///
/// ```
/// use slotlru::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(2);
/// cache.put(1, 1);
/// cache.put(2, 2);
/// assert_eq!(cache.get(&1), Some(&1));
///
/// // Key 2 is now least recently used and gets evicted.
/// cache.put(3, 3);
/// assert_eq!(cache.get(&2), None);
/// assert_eq!(cache.dump_recency_order(), vec![3, 1]);
/// ```
pub struct LruCache<K, V, S = FxBuildHasher> {
    index: HashMap<K, SlotId, S>,
    arena: SlotArena<Entry<K, V>>,
    list: RecencyList,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 is legal: every `put` is a no-op and every `get`
    /// misses. Storage is allocated lazily, one slot per live entry.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FxBuildHasher)
    }

    /// Creates a cache from an integer that may be negative or too large.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `capacity` is negative or does not fit in
    /// `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use slotlru::policy::lru::LruCache;
    ///
    /// let cache = LruCache::<u64, u64>::try_new(8i64).unwrap();
    /// assert_eq!(cache.capacity(), 8);
    /// assert!(LruCache::<u64, u64>::try_new(-1i64).is_err());
    /// ```
    pub fn try_new<C>(capacity: C) -> Result<Self, ConfigError>
    where
        C: TryInto<usize> + Copy + fmt::Display,
    {
        validate_capacity(capacity).map(Self::new)
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Creates an empty cache that hashes keys with `hasher`.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        debug!(capacity, "created lru cache");
        Self {
            index: HashMap::with_hasher(hasher),
            arena: SlotArena::new(),
            list: RecencyList::new(),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Reserves index and arena storage for the full capacity up front.
    ///
    /// Fails with a [`ConfigError`] on `capacity` when the storage cannot be
    /// allocated.
    pub(crate) fn preallocate(&mut self) -> Result<(), ConfigError> {
        let capacity = self.capacity;
        let additional = capacity.saturating_sub(self.index.len());
        let too_large = |err: TryReserveError| {
            ConfigError::new(
                "capacity",
                format!("cannot preallocate {capacity} entries: {err}"),
            )
        };
        self.index.try_reserve(additional).map_err(too_large)?;
        self.arena.try_reserve(additional).map_err(too_large)
    }

    /// Looks up `key` and promotes it to most recently used.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(&mut self.arena, id);
        self.arena.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get) but returns a mutable reference.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };
        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(&mut self.arena, id);
        self.arena.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Looks up `key` without changing recency order.
    #[inline]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let &id = self.index.get(key)?;
        let value = self.arena.get(id).map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        if value.is_some() {
            self.metrics.record_peek_found();
        }
        value
    }

    /// Inserts or updates `key`, returning the previous value on update.
    ///
    /// An update overwrites in place and counts as a use. Inserting a new
    /// key into a full cache first evicts exactly one entry, the least
    /// recently used, and reuses its slot.
    ///
    /// # Example
    ///
    /// ```
    /// use slotlru::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// assert_eq!(cache.put("a", 1), None);
    /// assert_eq!(cache.put("a", 10), Some(1));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = self
                .arena
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value));
            self.list.move_to_front(&mut self.arena, id);
            return previous;
        }

        if self.capacity == 0 {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() >= self.capacity && self.evict_lru().is_some() {
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }

        let id = self.arena.allocate(Entry {
            key: key.clone(),
            value,
            link: Link::default(),
        });
        self.list.push_front(&mut self.arena, id);
        self.index.insert(key, id);

        debug_assert!(self.index.len() <= self.capacity);
        None
    }

    /// Returns `true` if `key` is cached. Does not affect recency order.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_contains_call();

        let found = self.index.contains_key(key);

        #[cfg(feature = "metrics")]
        if found {
            self.metrics.record_contains_found();
        }
        found
    }

    /// Removes `key` and returns its value, freeing its slot.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        self.list.detach(&mut self.arena, id);
        let entry = self.arena.free(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let popped = self.evict_lru();

        #[cfg(feature = "metrics")]
        if popped.is_some() {
            self.metrics.record_pop_lru_found();
        }
        popped
    }

    /// Returns the least recently used entry without changing order.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let id = self.list.back()?;
        self.arena.get(id).map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the most recently used entry without changing order.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        let id = self.list.front()?;
        self.arena.get(id).map(|entry| (&entry.key, &entry.value))
    }

    /// Promotes `key` without reading it. Returns `false` on a miss.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        let moved = self.list.move_to_front(&mut self.arena, id);

        #[cfg(feature = "metrics")]
        if moved {
            self.metrics.record_touch_found();
        }
        moved
    }

    /// Position of `key` in recency order, 0 being most recent. O(n).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &target = self.index.get(key)?;
        self.list
            .iter(&self.arena)
            .position(|(id, _)| id == target)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of live entries, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` when `len() == capacity()`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.index.len() == self.capacity
    }

    /// Drops every entry and frees every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        let dropped = self.index.len();
        self.index.clear();
        self.list.clear();
        self.arena.clear();
        debug!(dropped, capacity = self.capacity, "cleared lru cache");
    }

    /// Keys from most to least recently used. Does not mutate the cache.
    pub fn dump_recency_order(&self) -> Vec<K> {
        self.list
            .iter(&self.arena)
            .map(|(_, entry)| entry.key.clone())
            .collect()
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list
            .iter(&self.arena)
            .map(|(_, entry)| (&entry.key, &entry.value))
    }

    /// Verifies that index, list and arena describe the same set of entries.
    ///
    /// O(n); meant for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.index.len();
        if len > self.capacity {
            return Err(InvariantError::new("cache", format!(
                "len {len} exceeds capacity {}",
                self.capacity
            )));
        }
        if self.arena.len() != len || self.list.len() != len {
            return Err(InvariantError::new("cache", format!(
                "size mismatch: index={len}, arena={}, list={}",
                self.arena.len(),
                self.list.len()
            )));
        }
        if self.arena.slot_count() > self.capacity {
            return Err(InvariantError::new("cache", format!(
                "arena grew to {} slots, capacity is {}",
                self.arena.slot_count(),
                self.capacity
            )));
        }
        self.list.check_invariants(&self.arena)?;

        for (id, entry) in self.list.iter(&self.arena) {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                other => {
                    return Err(InvariantError::new("cache", format!(
                        "slot {id:?} is listed but its key is indexed as {other:?}"
                    )));
                },
            }
        }
        Ok(())
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let id = self.list.pop_back(&mut self.arena)?;
        let entry = self.arena.free(id)?;
        self.index.remove(&entry.key);
        trace!(slot = id.index(), len = self.index.len(), "evicted lru entry");
        Some((entry.key, entry.value))
    }
}

#[cfg(feature = "metrics")]
impl<K, V, S> LruCache<K, V, S> {
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let m = &self.metrics;
        LruMetricsSnapshot {
            get_calls: m.get_calls,
            get_hits: m.get_hits,
            get_misses: m.get_misses,
            insert_calls: m.insert_calls,
            insert_updates: m.insert_updates,
            insert_new: m.insert_new,
            evicted_entries: m.evicted_entries,
            clear_calls: m.clear_calls,
            remove_calls: m.remove_calls,
            remove_found: m.remove_found,
            pop_lru_calls: m.pop_lru_calls,
            pop_lru_found: m.pop_lru_found,
            touch_calls: m.touch_calls,
            touch_found: m.touch_found,
            contains_calls: m.contains_calls.get(),
            contains_found: m.contains_found.get(),
            peek_calls: m.peek_calls.get(),
            peek_found: m.peek_found.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<K, V, S> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V, S> {
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V, S> CoreCache<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        LruCache::clear(self);
    }
}

impl<K, V, S> MutableCache<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V, S> LruCacheTrait<K, V> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Extend<(K, V)> for LruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Thread-safe LRU cache: one `LruCache` behind one `parking_lot::RwLock`.
///
/// `get`, `put`, `touch` and `remove` take the write lock because they
/// reorder the recency list; `contains`, `peek` and the accessors take the
/// read lock. Values are returned by clone.
///
/// # Example
///
/// ```
/// use slotlru::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::new(2);
/// let handle = cache.clone();
/// std::thread::spawn(move || {
///     handle.put(1, "one".to_string());
/// })
/// .join()
/// .unwrap();
/// assert_eq!(cache.get(&1).as_deref(), Some("one"));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V, S = FxBuildHasher> {
    inner: Arc<RwLock<LruCache<K, V, S>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V, S> Clone for ConcurrentLruCache<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, S> fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.index.len())
            .field("capacity", &cache.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LruCache::new(capacity))
    }

    /// Fallible constructor; see [`LruCache::try_new`].
    pub fn try_new<C>(capacity: C) -> Result<Self, ConfigError>
    where
        C: TryInto<usize> + Copy + fmt::Display,
    {
        LruCache::try_new(capacity).map(Self::from_cache)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, S> ConcurrentLruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Wraps an existing cache.
    pub fn from_cache(cache: LruCache<K, V, S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.write().put(key, value)
    }

    /// Gets a clone of the value and promotes the key.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.write().get(key).cloned()
    }

    /// Gets a clone of the value without promoting it.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.read().peek(key).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains(key)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(key)
    }

    pub fn touch<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().touch(key)
    }

    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.write().pop_lru()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn dump_recency_order(&self) -> Vec<K> {
        self.inner.read().dump_recency_order()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }

    /// Runs `f` with exclusive access, for multi-step updates that must be
    /// atomic with respect to other threads.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut LruCache<K, V, S>) -> R) -> R {
        let mut cache = self.inner.write();
        f(&mut cache)
    }

    /// Runs `f` with shared access.
    pub fn with_read<R>(&self, f: impl FnOnce(&LruCache<K, V, S>) -> R) -> R {
        let cache = self.inner.read();
        f(&cache)
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V, S> ConcurrentLruCache<K, V, S> {
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, S> ConcurrentCache for ConcurrentLruCache<K, V, S>
where
    K: Send + Sync,
    V: Send + Sync,
    S: Send + Sync,
{
}
