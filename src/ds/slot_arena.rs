//! Slot arena: fixed-address storage with a free list for slot reuse.
//!
//! Entries are addressed by [`SlotId`] instead of references, so higher-level
//! structures (the recency list, the cache index) can hold plain integer
//! handles without shared ownership or pointer chasing.
//!
//! ## Architecture
//!
//! ```text
//!   slots: Vec<Option<T>>
//!   ┌───────┬──────────────┐
//!   │ index │ slot         │
//!   ├───────┼──────────────┤
//!   │   0   │ Some(A)      │
//!   │   1   │ None  ◄──────┼── free_list = [1]
//!   │   2   │ Some(C)      │
//!   └───────┴──────────────┘
//!
//!   allocate(D) pops the free list first, then grows `slots`.
//! ```
//!
//! ## Performance
//! - `allocate` / `free` / `get` / `get_mut`: O(1)
//! - `iter`: O(slot_count)
//!
//! Storage never shrinks on `free`; a cache that allocates at most
//! `capacity` live slots therefore never grows beyond `capacity` slots.

use std::collections::TryReserveError;

/// Handle to a slot inside a [`SlotArena`].
///
/// Handles are only meaningful for the arena that produced them. A freed
/// handle may be handed out again by a later `allocate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) u32);

impl SlotId {
    /// Largest number of slots an arena can address.
    pub const MAX_SLOTS: usize = u32::MAX as usize;

    /// Returns the slot's position in the arena's storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<u32>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an arena with storage reserved for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle.
    ///
    /// Reuses the most recently freed slot when one exists, otherwise grows
    /// storage by one slot.
    ///
    /// # Panics
    ///
    /// Panics if the arena already addresses [`SlotId::MAX_SLOTS`] slots and
    /// none are free. A bounded cache never gets near this limit.
    #[inline]
    pub fn allocate(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            debug_assert!(self.slots[idx as usize].is_none(), "corrupt free list");
            self.slots[idx as usize] = Some(value);
            idx
        } else {
            let idx = u32::try_from(self.slots.len())
                .ok()
                .filter(|&idx| idx != u32::MAX)
                .unwrap_or_else(|| panic!("slot arena exhausted ({} slots)", SlotId::MAX_SLOTS));
            self.slots.push(Some(value));
            idx
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Releases the slot and returns its value.
    ///
    /// Returns `None` if `id` is out of range or already free. After this call
    /// `id` is dangling until the slot is reallocated.
    #[inline]
    pub fn free(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.index())?;
        let value = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    /// Returns `true` if `id` refers to a live slot.
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.index())
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever created (live + free).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of freed slots waiting for reuse.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Reserves storage for at least `additional` more slots, never past
    /// [`SlotId::MAX_SLOTS`].
    ///
    /// # Errors
    ///
    /// Returns the allocator's error instead of aborting when the memory
    /// cannot be obtained.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let addressable = SlotId::MAX_SLOTS.saturating_sub(self.slots.len());
        self.slots.try_reserve(additional.min(addressable))
    }

    /// Drops every value and forgets every slot; previously issued handles
    /// become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Iterates live slots in storage order (not recency order).
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx as u32), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_allocate_free_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.allocate("a");
        let id2 = arena.allocate("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.free(id1), Some("a"));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.free_count(), 1);

        let id3 = arena.allocate("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
        assert_eq!(arena.slot_count(), 2);
    }

    #[test]
    fn slot_arena_double_free_is_rejected() {
        let mut arena = SlotArena::new();
        let id = arena.allocate(7);
        assert_eq!(arena.free(id), Some(7));
        assert_eq!(arena.free(id), None);
        assert_eq!(arena.free_count(), 1);
        assert!(arena.is_empty());
    }

    #[test]
    fn slot_arena_out_of_range_handles() {
        let mut arena: SlotArena<u8> = SlotArena::new();
        let bogus = SlotId(42);
        assert!(!arena.contains(bogus));
        assert_eq!(arena.get(bogus), None);
        assert_eq!(arena.get_mut(bogus), None);
        assert_eq!(arena.free(bogus), None);
    }

    #[test]
    fn slot_arena_get_mut_and_iter() {
        let mut arena = SlotArena::with_capacity(4);
        let a = arena.allocate(1);
        let b = arena.allocate(2);
        let c = arena.allocate(3);
        *arena.get_mut(b).unwrap() = 20;
        arena.free(a);

        let live: Vec<_> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(live, vec![(b, 20), (c, 3)]);
    }

    #[test]
    fn slot_arena_clear_resets_storage() {
        let mut arena = SlotArena::new();
        let id = arena.allocate(1);
        arena.allocate(2);
        arena.free(id);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.slot_count(), 0);
        assert_eq!(arena.free_count(), 0);
        assert!(!arena.contains(id));
    }

    #[test]
    fn slot_arena_lifo_reuse_order() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.allocate(i)).collect();
        arena.free(ids[1]);
        arena.free(ids[3]);
        assert_eq!(arena.allocate(10), ids[3]);
        assert_eq!(arena.allocate(11), ids[1]);
        assert_eq!(arena.slot_count(), 4);
    }

    #[test]
    fn slot_arena_try_reserve_keeps_arena_empty() {
        let mut arena: SlotArena<u64> = SlotArena::new();
        arena.try_reserve(16).unwrap();
        assert!(arena.is_empty());
        assert_eq!(arena.slot_count(), 0);

        let id = arena.allocate(7);
        assert_eq!(id.index(), 0);
    }
}
