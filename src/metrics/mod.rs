//! Optional operation counters for [`LruCache`](crate::policy::lru::LruCache).
//!
//! Enabled with the `metrics` feature. Recording, snapshotting and export are
//! kept in separate traits (see [`traits`]) so the cache core only ever
//! increments counters.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
