//! Storage primitives the LRU cache is assembled from.
//!
//! - [`SlotArena`]: dense slot storage with free-list reuse and stable ids.
//! - [`RecencyList`]: doubly linked recency order whose links live inside
//!   arena entries.

pub mod recency_list;
pub mod slot_arena;

pub use recency_list::{Link, Linked, RecencyIter, RecencyList};
pub use slot_arena::{SlotArena, SlotId};
