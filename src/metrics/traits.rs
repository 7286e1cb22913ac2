//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* so the cache core
//! stays free of monitoring concerns.
//!
//! ```text
//!        ┌─────────────────────────────┐
//!        │     CoreMetricsRecorder     │
//!        │  get_hit/get_miss/insert    │
//!        │  evict/clear                │
//!        └──────────────┬──────────────┘
//!                       │
//!                       ▼
//!        ┌─────────────────────────────┐      ┌─────────────────────────────┐
//!        │     LruMetricsRecorder      │      │   LruMetricsReadRecorder    │
//!        │  remove/pop_lru/touch       │      │  contains/peek (&self)      │
//!        └─────────────────────────────┘      └─────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters every cache records.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// LRU-specific counters for `&mut self` operations.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// LRU counters for `&self` operations (interior mutability).
pub trait LruMetricsReadRecorder {
    fn record_contains_call(&self);
    fn record_contains_found(&self);
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Produces a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes a snapshot to a monitoring sink.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
