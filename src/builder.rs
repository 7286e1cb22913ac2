//! Cache builder for configuring and constructing LRU caches.
//!
//! Collects construction parameters in one place and validates them before
//! any storage is allocated.
//!
//! ## Example
//!
//! ```rust
//! use slotlru::builder::LruCacheBuilder;
//!
//! let mut cache = LruCacheBuilder::new(100).preallocate(true).build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//!
//! // Capacities coming from untyped input are validated.
//! assert!(LruCacheBuilder::from_signed(-4).try_build::<u64, String>().is_err());
//! ```

use std::fmt;
use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCache;

/// Converts an integer capacity into `usize`, rejecting negatives.
pub(crate) fn validate_capacity<C>(capacity: C) -> Result<usize, ConfigError>
where
    C: TryInto<usize> + Copy + fmt::Display,
{
    capacity.try_into().map_err(|_| {
        ConfigError::new(
            "capacity",
            format!("must be a non-negative integer that fits in usize, got {capacity}"),
        )
    })
}

/// Builder for [`LruCache`] and [`ConcurrentLruCache`].
#[derive(Debug, Clone)]
pub struct LruCacheBuilder {
    capacity: Result<usize, ConfigError>,
    preallocate: bool,
}

impl LruCacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: Ok(capacity),
            preallocate: false,
        }
    }

    /// Create a builder from a signed capacity. Negative values are reported
    /// by [`try_build`](Self::try_build).
    pub fn from_signed(capacity: i64) -> Self {
        Self {
            capacity: validate_capacity(capacity),
            preallocate: false,
        }
    }

    /// Reserve storage for the full capacity at construction instead of
    /// growing one slot at a time.
    pub fn preallocate(mut self, preallocate: bool) -> Self {
        self.preallocate = preallocate;
        self
    }

    /// Returns the validated capacity.
    pub fn capacity(&self) -> Result<usize, ConfigError> {
        self.capacity.clone()
    }

    /// Build a cache, reporting invalid parameters.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let mut cache = LruCache::new(self.capacity?);
        if self.preallocate {
            cache.preallocate()?;
        }
        Ok(cache)
    }

    /// Build a cache.
    ///
    /// # Panics
    ///
    /// Panics if the builder was created from an invalid capacity, or if
    /// preallocation cannot reserve storage for it. Use
    /// [`try_build`](Self::try_build) for untrusted input.
    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(err) => panic!("invalid cache configuration: {err}"),
        }
    }

    /// Build a thread-safe cache.
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        self.try_build().map(ConcurrentLruCache::from_cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic_ops() {
        let mut cache = LruCacheBuilder::new(10).build::<u64, String>();

        assert_eq!(cache.put(1, "one".to_string()), None);
        assert_eq!(cache.put(2, "two".to_string()), None);
        assert_eq!(cache.get(&1), Some(&"one".to_string()));
        assert_eq!(cache.get(&3), None);
        assert!(cache.contains(&2));
        assert_eq!(cache.len(), 2);

        // Update
        assert_eq!(cache.put(1, "ONE".to_string()), Some("one".to_string()));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = LruCacheBuilder::new(2).preallocate(true).build::<u64, String>();

        cache.put(1, "one".to_string());
        cache.put(2, "two".to_string());
        cache.put(3, "three".to_string()); // evicts key 1

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn test_signed_capacity_validation() {
        let err = LruCacheBuilder::from_signed(-1)
            .try_build::<u64, u64>()
            .unwrap_err();
        assert!(err.to_string().contains("got -1"));

        let cache = LruCacheBuilder::from_signed(0).try_build::<u64, u64>().unwrap();
        assert_eq!(cache.capacity(), 0);
        assert_eq!(LruCacheBuilder::from_signed(7).capacity(), Ok(7));
    }

    #[test]
    fn test_preallocate_oversized_capacity_is_config_error() {
        let err = LruCacheBuilder::from_signed(i64::MAX)
            .preallocate(true)
            .try_build::<u64, u64>()
            .unwrap_err();
        assert_eq!(err.parameter(), "capacity");
        assert!(err.reason().contains("cannot preallocate"));

        // Without preallocation the same capacity is accepted and grows lazily.
        let mut cache = LruCacheBuilder::from_signed(i64::MAX)
            .try_build::<u64, u64>()
            .unwrap();
        cache.put(1, 1);
        assert_eq!(cache.get(&1), Some(&1));
    }

    #[test]
    #[should_panic(expected = "invalid cache configuration")]
    fn test_build_panics_on_negative() {
        let _ = LruCacheBuilder::from_signed(-10).build::<u64, u64>();
    }

    #[test]
    fn test_validate_capacity_unsigned_passthrough() {
        assert_eq!(validate_capacity(5u8), Ok(5));
        assert!(validate_capacity(-5i32).is_err());
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn test_build_concurrent() {
        let cache = LruCacheBuilder::new(3)
            .try_build_concurrent::<u64, u64>()
            .unwrap();
        cache.put(1, 1);
        assert_eq!(cache.get(&1), Some(1));
        assert!(LruCacheBuilder::from_signed(-2)
            .try_build_concurrent::<u64, u64>()
            .is_err());
    }
}
